//! Majority half-circle arcs of ids placed on a circle
//!
//! Ids live on a circle of circumference `modulus`. The arc of a pivot is the
//! half circle starting at the pivot, and its size is the number of ids it
//! holds, or of ids outside it when that is the majority.

use rand::Rng;

use crate::errors::GroupingError;

/// Parameters of a grouping simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupingParams {
    /// The number of ids in a population
    population: usize,
    /// The circumference of the circle
    modulus: u64,
    /// Arc sizes below this are measured again on the rotated population
    threshold: usize,
}

impl GroupingParams {
    /// Validate simulation parameters
    pub fn new(population: usize, modulus: u64, threshold: usize) -> Result<Self, GroupingError> {
        if population == 0 {
            return Err(GroupingError::EmptyPopulation);
        }
        if modulus < 2 {
            return Err(GroupingError::ModulusTooSmall(modulus));
        }
        if threshold > population {
            return Err(GroupingError::ThresholdTooLarge {
                threshold,
                population,
            });
        }

        Ok(Self {
            population,
            modulus,
            threshold,
        })
    }

    /// The number of ids in a population
    pub fn population(&self) -> usize {
        self.population
    }

    /// The circumference of the circle, at least 2
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Arc sizes below this are measured again on the rotated population
    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

/// The point opposite `id` on the circle
fn opposite(id: u64, modulus: u64) -> u64 {
    ((id as u128 + (modulus / 2) as u128) % modulus as u128) as u64
}

/// The size of the majority side of the half-circle arc anchored at
/// `ids[pivot_index]`
///
/// The arc spans from the pivot to its opposite point, bounds included, taken
/// in increasing order when it wraps around zero.
///
/// # Panics
///
/// Panics if `pivot_index` is out of bounds of `ids` or if `modulus` is 0.
pub fn arc_group_size(ids: &[u64], pivot_index: usize, modulus: u64) -> usize {
    let pivot = ids[pivot_index];
    let edge = opposite(pivot, modulus);
    let (low, high) = if pivot > edge {
        (edge, pivot)
    } else {
        (pivot, edge)
    };

    let count = ids.iter().filter(|&&id| id >= low && id <= high).count();
    if 2 * count < ids.len() {
        ids.len() - count
    } else {
        count
    }
}

/// Move every id to its opposite point on the circle
///
/// # Panics
///
/// Panics if `modulus` is 0 and `ids` is not empty.
pub fn rotate_half(ids: &[u64], modulus: u64) -> Vec<u64> {
    ids.iter().map(|&id| opposite(id, modulus)).collect()
}

/// The largest arc group size over all pivots of a population
///
/// Pivots whose arc holds fewer than `threshold` ids are measured again on
/// the population rotated by half a circle.
pub fn max_group_size(ids: &[u64], params: &GroupingParams) -> usize {
    let mut rotated: Option<Vec<u64>> = None;
    let mut max = 0;

    for i in 0..ids.len() {
        let size = arc_group_size(ids, i, params.modulus);
        max = max.max(size);

        if size < params.threshold {
            let rotated = rotated.get_or_insert_with(|| rotate_half(ids, params.modulus));
            max = max.max(arc_group_size(rotated, i, params.modulus));
        }
    }

    max
}

/// Draw a population of ids uniformly from `[0, modulus)`
pub fn random_population<R: Rng>(rng: &mut R, params: &GroupingParams) -> Vec<u64> {
    (0..params.population)
        .map(|_| rng.gen_range(0..params.modulus))
        .collect()
}
