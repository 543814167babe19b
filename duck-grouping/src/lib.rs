//! A Monte-Carlo estimate of how ids drawn uniformly on a circle group into
//! half-circle arcs.

#![deny(missing_docs)]

pub mod errors;
pub mod grouping;
pub mod trials;

pub use errors::GroupingError;
pub use grouping::{arc_group_size, max_group_size, random_population, rotate_half, GroupingParams};
pub use trials::{run_trials, TrialReport};
