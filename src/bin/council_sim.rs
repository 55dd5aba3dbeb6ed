//! Campaign survival sweep
//!
//! Runs the bundled scenario over a range of seeds and reports how often the
//! council ends the campaign, and why.

use std::time::Instant;

use funding_council::council::{simulate, FailureReason, Scenario};

const RUNS: u64 = 200;

fn main() -> funding_council::core::error::Result<()> {
    let scenario = Scenario::load("data/scenario.toml")?;

    println!("Funding Council Survival Sweep");
    println!("==============================");
    println!(
        "{} regions, {} nations, difficulty level {}",
        scenario.regions.len(),
        scenario.nations.len(),
        scenario.campaign.difficulty.level()
    );
    println!("Running {} campaigns of up to {} months...", RUNS, scenario.campaign.months);
    println!();

    let start = Instant::now();
    let mut survived = 0;
    let mut by_rating = 0;
    let mut by_debt = 0;
    let mut months_total = 0u64;
    let mut pacts_total = 0u64;

    for run in 0..RUNS {
        let mut scenario = scenario.clone();
        scenario.campaign.seed = scenario.campaign.seed.wrapping_add(run);
        let output = simulate(scenario.build_campaign(), scenario.simulation_config())?;

        months_total += u64::from(output.statistics.months_simulated);
        pacts_total += u64::from(output.statistics.pacts_signed);
        if output.survived() {
            survived += 1;
        }
        if output.statistics.ended_by.contains(&FailureReason::SustainedPoorRating) {
            by_rating += 1;
        }
        if output.statistics.ended_by.contains(&FailureReason::UnrecoverableDebt) {
            by_debt += 1;
        }
    }

    let elapsed = start.elapsed();

    println!("Survived:          {}/{}", survived, RUNS);
    println!("Ended by rating:   {}", by_rating);
    println!("Ended by debt:     {}", by_debt);
    println!("Average length:    {:.1} months", months_total as f64 / RUNS as f64);
    println!("Average pacts:     {:.2}", pacts_total as f64 / RUNS as f64);
    println!("Actual time: {:.2}ms", elapsed.as_secs_f64() * 1000.0);

    Ok(())
}
