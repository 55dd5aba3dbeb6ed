//! Monthly evaluation and the campaign driver

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::CouncilConfig;
use crate::core::error::{CouncilError, Result};
use crate::core::types::Points;
use crate::council::campaign::CampaignState;
use crate::council::events::HistoryLog;
use crate::council::output::CampaignOutput;
use crate::council::report::MonthlyReport;
use crate::council::systems;

/// Evaluate one month and return its report
///
/// Called once per month by the session, after the month's activity has been
/// recorded. All state changes are committed before returning.
///
/// `config` must have passed [`CouncilConfig::validate`]: a zero divisor or a
/// pact chance outside `0.0..=1.0` would panic mid-month.
pub fn evaluate_month(state: &mut CampaignState, config: &CouncilConfig) -> Result<MonthlyReport> {
    debug_assert!(config.validate().is_ok(), "evaluate_month needs a validated config");
    if state.is_terminal() {
        return Err(CouncilError::CampaignOver(state.months_passed()));
    }

    state.begin_month();
    let (month, year) = state.calendar.reported_month();
    tracing::info!(
        "Evaluating month {} ({}/{}) with funds {}",
        state.months_passed(),
        month,
        year,
        state.funds
    );

    // 1. Commit the month's activity
    systems::commit_activity_month(state);

    // 2. Settle income and upkeep
    systems::settle_treasury(state);

    // 3. Score the month
    let totals = systems::aggregate_scores(state, config);

    // 4. Nations decide
    let view = systems::CouncilView::from_totals(&totals);
    let outcomes = systems::decide_nations(state, view, &config.nation);

    // 5. Compile
    let report = systems::compile_report(state, config, totals, outcomes);

    state.calendar.advance_month();

    tracing::info!("{}", report.summary());

    Ok(report)
}

/// Synthetic activity fed into a campaign between evaluations
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityConfig {
    /// Upper bound of player points per region per month
    pub player_max: Points,
    /// Upper bound of opposition points per region in the first month
    pub opposition_max: Points,
    /// Added to `opposition_max` every month
    pub opposition_growth: Points,
    /// Upper bound of research points per month
    pub research_max: Points,
    /// Chance per nation per month of an opposition infiltration
    pub infiltration_chance: f64,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            player_max: 120,
            opposition_max: 60,
            opposition_growth: 10,
            research_max: 80,
            infiltration_chance: 0.01,
        }
    }
}

impl ActivityConfig {
    pub fn validate(&self) -> Result<()> {
        if self.player_max < 0 || self.opposition_max < 0 || self.research_max < 0 {
            return Err(CouncilError::InvalidConfig(
                "activity bounds must not be negative".into(),
            ));
        }
        if self.opposition_growth < 0 {
            return Err(CouncilError::InvalidConfig(
                "opposition_growth must not be negative".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.infiltration_chance) {
            return Err(CouncilError::InvalidConfig(format!(
                "infiltration_chance {} outside [0, 1]",
                self.infiltration_chance
            )));
        }
        Ok(())
    }
}

/// Configuration for a simulated campaign
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Stop after this many months even if the campaign survives
    pub months: u32,
    /// Seed of the synthetic activity stream
    pub seed: u64,
    pub activity: ActivityConfig,
    pub council: CouncilConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            months: 36,
            seed: 12345,
            activity: ActivityConfig::default(),
            council: CouncilConfig::default(),
        }
    }
}

/// Run a campaign month by month until it ends or the month limit is reached
pub fn simulate(mut state: CampaignState, config: SimulationConfig) -> Result<CampaignOutput> {
    let start = std::time::Instant::now();

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut history = HistoryLog::new();
    let mut reports = Vec::new();
    let nations_at_start = state.nations.len();

    for month in 0..config.months {
        if state.is_terminal() {
            break;
        }

        feed_activity(&mut state, &config.activity, month, &mut rng);

        let warning_was_set = state.debt_warning_issued();
        let report = evaluate_month(&mut state, &config.council)?;
        history.record_report(&report, warning_was_set);
        reports.push(report);
    }

    let elapsed = start.elapsed();

    Ok(CampaignOutput::new(
        state,
        reports,
        history,
        nations_at_start,
        elapsed,
    ))
}

/// Record one month of random activity and infiltrations
fn feed_activity(
    state: &mut CampaignState,
    activity: &ActivityConfig,
    month: u32,
    rng: &mut ChaCha8Rng,
) {
    let month = Points::try_from(month).unwrap_or(Points::MAX);
    let opposition_max = activity
        .opposition_max
        .saturating_add(activity.opposition_growth.saturating_mul(month));

    for region in &mut state.regions {
        region.record_player_activity(rng.gen_range(0..=activity.player_max));
        region.record_opposition_activity(rng.gen_range(0..=opposition_max));
    }

    state.record_research_score(rng.gen_range(0..=activity.research_max));

    for nation in &mut state.nations {
        if !nation.has_defected() && rng.gen_bool(activity.infiltration_chance) {
            tracing::debug!("Opposition infiltrated {}", nation.key);
            nation.mark_pact_pending();
        }
    }
}
