use aggregate_ops::{EvalOptions, Result};

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "aggregate-ops")]
#[command(about = "Aggregate numeric fields of JSON records", long_about = None)]
struct Cli {
    /// Data document with a top-level "entries" array.
    data: PathBuf,

    /// Operations document with a top-level "operations" array.
    operations: PathBuf,

    /// Where to write the results array.
    output: PathBuf,

    /// Worker threads used to evaluate operations.
    #[arg(short, long, default_value_t = 1, env = "AGGREGATE_OPS_JOBS")]
    jobs: usize,

    /// Decimal places kept in roundedValue.
    #[arg(long, default_value_t = aggregate_ops::render::DEFAULT_DECIMALS,
          value_parser = clap::value_parser!(u32).range(0..=15))]
    precision: u32,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new().filter_level(log_level).init();
}

fn report(cli: &Cli) -> Result<()> {
    let options = EvalOptions {
        jobs: cli.jobs.max(1),
        precision: cli.precision,
    };
    let results = aggregate_ops::run(&cli.data, &cli.operations, &cli.output, &options)?;
    log::info!("evaluated {} operations", results.len());
    println!("Wrote {}", cli.output.display());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match report(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
