//! Errors raised when configuring a grouping simulation

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Invalid parameters of a grouping simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingError {
    /// The population holds no ids
    EmptyPopulation,
    /// The circle is too small to be split in two halves
    ModulusTooSmall(u64),
    /// The rotation threshold exceeds the population size
    ThresholdTooLarge {
        /// The requested threshold
        threshold: usize,
        /// The population size
        population: usize,
    },
}

impl Display for GroupingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GroupingError::EmptyPopulation => write!(f, "population must not be empty"),
            GroupingError::ModulusTooSmall(modulus) => {
                write!(f, "modulus must be at least 2, got {}", modulus)
            }
            GroupingError::ThresholdTooLarge {
                threshold,
                population,
            } => write!(
                f,
                "threshold {} exceeds the population size {}",
                threshold, population
            ),
        }
    }
}

impl Error for GroupingError {}
