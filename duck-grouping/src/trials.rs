//! Monte-Carlo trials of the maximum group size of random populations

use std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
};

use rand::Rng;
use tracing::debug;

use crate::grouping::{max_group_size, random_population, GroupingParams};

/// The outcome of a batch of trials
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrialReport {
    /// The number of trials run
    pub trials: u64,
    /// The number of trials ending with each maximum group size
    pub distribution: BTreeMap<usize, u64>,
    /// The number of populations handed to the report callback
    pub reported: u64,
}

impl TrialReport {
    /// Record the outcome of a single trial
    pub fn record(&mut self, size: usize) {
        self.trials += 1;
        *self.distribution.entry(size).or_insert(0) += 1;
    }

    /// The number of trials ending with the given maximum group size
    pub fn count(&self, size: usize) -> u64 {
        self.distribution.get(&size).copied().unwrap_or(0)
    }
}

impl Display for TrialReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} trials", self.trials)?;
        for (size, count) in &self.distribution {
            let share = *count as f64 * 100. / self.trials.max(1) as f64;
            writeln!(f, "{:>4}: {:>10} ({:.4}%)", size, count, share)?;
        }
        if self.reported > 0 {
            writeln!(f, "{} populations reported", self.reported)?;
        }
        Ok(())
    }
}

/// Run `trials` trials on random populations
///
/// Each population whose maximum group size equals `report_size` is passed to
/// `on_report` as soon as it is drawn. Only their number is kept.
pub fn run_trials<R: Rng>(
    rng: &mut R,
    params: &GroupingParams,
    trials: u64,
    report_size: Option<usize>,
    mut on_report: impl FnMut(&[u64]),
) -> TrialReport {
    let mut report = TrialReport::default();

    for _ in 0..trials {
        let ids = random_population(rng, params);
        let size = max_group_size(&ids, params);
        if report_size == Some(size) {
            debug!("Population with group size {}: {:?}", size, ids);
            on_report(&ids);
            report.reported += 1;
        }
        report.record(size);
    }

    report
}
