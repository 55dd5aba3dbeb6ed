//! Funding Council - Entry Point
//!
//! Loads a scenario, runs the campaign month by month and prints the
//! council's report for every evaluated month.

use std::path::PathBuf;

use clap::Parser;
use funding_council::core::error::Result;
use funding_council::council::{render_report, simulate, Scenario};

/// Run a funding council campaign from a scenario file
#[derive(Parser, Debug)]
#[command(name = "funding-council")]
#[command(about = "Simulate monthly funding council reports for a campaign")]
struct Args {
    /// Scenario file (TOML)
    #[arg(long, default_value = "data/scenario.toml")]
    scenario: PathBuf,

    /// Override the scenario's month limit
    #[arg(long)]
    months: Option<u32>,

    /// Override the scenario's seed
    #[arg(long)]
    seed: Option<u64>,

    /// Write the full campaign output as JSON to this file
    #[arg(long)]
    json: Option<PathBuf>,

    /// Only print the closing summary
    #[arg(long, short = 'q')]
    quiet: bool,

    /// Log per-nation decisions
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "funding_council=debug"
    } else {
        "funding_council=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let mut scenario = Scenario::load(&args.scenario)?;
    if let Some(seed) = args.seed {
        scenario.campaign.seed = seed;
    }
    if let Some(months) = args.months {
        scenario.campaign.months = months;
    }

    let strings = scenario.string_table();
    let output = simulate(scenario.build_campaign(), scenario.simulation_config())?;

    if !args.quiet {
        for report in &output.reports {
            println!("{}", render_report(report, &strings));
            println!("----------------------------------------");
        }
    }

    println!("{}", output.summary());

    if let Some(path) = args.json {
        std::fs::write(&path, output.to_json()?)?;
        println!("\nFull output written to {}", path.display());
    }

    Ok(())
}
