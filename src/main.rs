use anyhow::Result;
use clap::Parser;
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::Instant;

// Define modules used by main
mod config;
mod scenario;

use config::ScenarioConfig;

/// Command-line arguments for the scenario runner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario file describing the vector operations to evaluate (.toml)
    #[arg(short, long, default_value = "scenario.toml")]
    config: PathBuf,

    /// Exit with an error if any step fails
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    // Initialize the logger
    env_logger::init();

    let args = Args::parse();
    info!("Starting Vector2D scenario runner...");

    // --- Load Configuration ---
    let config = ScenarioConfig::load(&args.config)?;
    info!("Loaded {} steps from {}", config.steps.len(), args.config.display());
    debug!("Comparison settings: {:#?}", config.comparison);

    let start_time = Instant::now();
    let report = scenario::run(&config);
    let duration = start_time.elapsed();

    info!(
        "Evaluated {} steps in {:.3} ms ({} failed).",
        report.results.len(),
        duration.as_secs_f64() * 1000.0,
        report.failures
    );

    if report.failures > 0 {
        if args.strict {
            anyhow::bail!("{} of {} steps failed.", report.failures, report.results.len());
        }
        warn!("{} steps failed; rerun with --strict to treat this as an error.", report.failures);
    }

    info!("Scenario Complete.");
    Ok(())
}
