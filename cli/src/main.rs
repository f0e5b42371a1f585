use std::process;

use clap::Parser;
use serde::Serialize;
use shuffle::error::ShuffleError;
use shuffle::random::Lcg;
use shuffle::seed::{resolve_seed, ClockSeed};
use shuffle::sequence::{parse_sequence, render_sequence, DEFAULT_DELIMITER};
use shuffle::shuffle::shuffle;
use tracing::{debug, Level};

use anyhow::Result;

#[derive(Debug, Serialize)]
struct ShuffleReport {
    seed: u64,
    result: Vec<i64>,
}

/// Shuffles a list of integers with a Knuth shuffle driven by a seeded LCG.
///
/// The same seed and input always produce the same output, on any platform.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Delimited list of integers, e.g. "10,20,30"
    #[arg(allow_hyphen_values = true)]
    input: Option<String>,

    /// Generator seed (defaults to the current time in seconds)
    #[arg(long, env = "RAND_SEED", allow_hyphen_values = true)]
    seed: Option<String>,

    /// Delimiter between list elements, for both input and output
    #[arg(short, long, default_value_t = DEFAULT_DELIMITER)]
    delimiter: char,

    /// Print the seed and result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
        .init();
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    let input = args.input.as_deref().ok_or(ShuffleError::MissingInput)?;
    let seed = resolve_seed(args.seed.as_deref(), &ClockSeed)?;
    let mut values = parse_sequence(input, args.delimiter)?;
    debug!("Shuffling {} values with seed {seed}.", values.len());
    let mut rng = Lcg::new(seed);
    shuffle(&mut values, &mut rng);
    if args.json {
        let report = ShuffleReport {
            seed,
            result: values,
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", render_sequence(&values, args.delimiter));
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
