use clap::Parser;
use duck_grouping::{run_trials, GroupingParams};
use eyre::Result;
use itertools::Itertools;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{info, Level};

/// Estimate the distribution of the maximum group size of random populations
#[derive(Parser)]
#[command(author, version)]
struct Args {
    /// Number of random populations to draw
    #[arg(short, long, default_value_t = 1_000_000)]
    trials: u64,

    /// Number of ids in each population
    #[arg(short, long, default_value_t = 11)]
    ducks: usize,

    /// Circumference of the circle ids are drawn on
    #[arg(short, long, default_value_t = 10_000_000_000_000_000)]
    modulus: u64,

    /// Arc sizes below this are measured again on the rotated population,
    /// defaults to the number of ducks
    #[arg(long)]
    threshold: Option<usize>,

    /// Seed of the random number generator
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print every population whose maximum group size equals this
    #[arg(short, long)]
    report_size: Option<usize>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    verbosity: Level,
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.verbosity)
        .init();

    let params = GroupingParams::new(
        args.ducks,
        args.modulus,
        args.threshold.unwrap_or(args.ducks),
    )?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(
        "Running {} trials of {} ducks on a circle of {}",
        args.trials,
        params.population(),
        params.modulus()
    );
    let report = run_trials(&mut rng, &params, args.trials, args.report_size, |ids| {
        println!("[{}]", ids.iter().join(", "))
    });
    print!("{}", report);

    Ok(())
}
