//! Monthly report compilation and terminal conditions

use crate::core::config::CouncilConfig;
use crate::council::campaign::CampaignState;
use crate::council::nation::Satisfaction;
use crate::council::report::{CouncilVerdict, FailureReason, MonthlyReport, RatingBand};
use crate::council::systems::decisions::NationOutcome;
use crate::council::systems::scoring::ScoreTotals;

/// Outcome of the debt check for one month
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DebtStatus {
    Solvent,
    Warned,
    Failed,
}

/// Apply the two-strike debt rule and update the warning flag
pub fn check_debt(state: &mut CampaignState, config: &CouncilConfig) -> DebtStatus {
    if state.funds <= config.debt_threshold {
        if state.debt_warning_issued() {
            DebtStatus::Failed
        } else {
            state.set_debt_warning(true);
            DebtStatus::Warned
        }
    } else {
        if state.debt_warning_issued() {
            tracing::info!("Funds recovered to {}, debt warning cleared", state.funds);
        }
        state.set_debt_warning(false);
        DebtStatus::Solvent
    }
}

/// Both this month and last month at or below the difficulty threshold
pub fn rating_failed(totals: &ScoreTotals, threshold: i32) -> bool {
    totals.rating_this_month <= threshold && totals.rating_last_month <= threshold
}

/// Turn nation outcomes into the month's report and settle terminal state
pub fn compile_report(
    state: &mut CampaignState,
    config: &CouncilConfig,
    totals: ScoreTotals,
    outcomes: Vec<NationOutcome>,
) -> MonthlyReport {
    let threshold = state.difficulty_threshold();
    let rating = totals.rating_this_month;

    let mut pleased = Vec::new();
    let mut unhappy = Vec::new();
    let mut defected = Vec::new();
    for outcome in &outcomes {
        if outcome.previously_defected {
            continue;
        }
        if outcome.pact_signed {
            defected.push(outcome.key.clone());
            continue;
        }
        match outcome.satisfaction {
            Satisfaction::Pleased => pleased.push(outcome.key.clone()),
            Satisfaction::Unhappy => unhappy.push(outcome.key.clone()),
            Satisfaction::Neutral => {}
        }
    }
    let funding_delta = outcomes.iter().map(|o| o.funding_delta).sum();

    let mut failures = Vec::new();
    if rating_failed(&totals, threshold) {
        failures.push(FailureReason::SustainedPoorRating);
    }
    let debt = check_debt(state, config);
    if debt == DebtStatus::Failed {
        failures.push(FailureReason::UnrecoverableDebt);
    }

    let mut verdict = CouncilVerdict::classify(rating, threshold, config);
    let is_terminal = !failures.is_empty();
    if is_terminal {
        verdict = CouncilVerdict::NotSucceeded;
        pleased.clear();
        unhappy.clear();
        defected.clear();
        state.mark_terminal();
        tracing::warn!("Campaign failed after month {}: {:?}", state.months_passed(), failures);
    } else if debt == DebtStatus::Warned {
        tracing::warn!("Council warns about debt: funds at {}", state.funds);
    }

    MonthlyReport {
        month: state.months_passed(),
        reported_month: state.calendar.reported_month(),
        totals,
        rating,
        band: RatingBand::classify(rating, threshold, config),
        verdict,
        funding_delta,
        funds: state.funds,
        pleased,
        unhappy,
        defected,
        outcomes,
        debt_warning: debt == DebtStatus::Warned && !is_terminal,
        failures,
        is_terminal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::NationId;
    use crate::council::nation::FundingNation;

    fn state(funds: i64) -> CampaignState {
        CampaignState::new(
            vec![],
            vec![FundingNation::new(NationId(1), "STR_INDIA", 30_000, 90_000)],
            funds,
            9,
            1,
        )
    }

    fn outcome(id: u32, key: &str, satisfaction: Satisfaction, pact: bool) -> NationOutcome {
        NationOutcome {
            nation: NationId(id),
            key: key.to_string(),
            satisfaction,
            funding_delta: 1_000,
            pact_signed: pact,
            previously_defected: false,
        }
    }

    fn totals(this: i32, last: i32) -> ScoreTotals {
        ScoreTotals {
            rating_this_month: this,
            rating_last_month: last,
            ..ScoreTotals::default()
        }
    }

    #[test]
    fn test_lists_follow_outcome_order() {
        let mut s = state(0);
        let outcomes = vec![
            outcome(1, "STR_USA", Satisfaction::Unhappy, false),
            outcome(2, "STR_RUSSIA", Satisfaction::Pleased, false),
            outcome(3, "STR_UK", Satisfaction::Unhappy, false),
            outcome(4, "STR_CHINA", Satisfaction::Unhappy, true),
            outcome(5, "STR_JAPAN", Satisfaction::Neutral, false),
        ];

        let report = compile_report(&mut s, &CouncilConfig::default(), totals(100, 100), outcomes);

        assert_eq!(report.unhappy, vec!["STR_USA", "STR_UK"]);
        assert_eq!(report.pleased, vec!["STR_RUSSIA"]);
        assert_eq!(report.defected, vec!["STR_CHINA"]);
        assert_eq!(report.funding_delta, 5_000);
        assert!(!report.is_terminal);
    }

    #[test]
    fn test_previously_defected_are_not_listed() {
        let mut s = state(0);
        let mut gone = outcome(1, "STR_USA", Satisfaction::Unhappy, false);
        gone.previously_defected = true;
        let report = compile_report(&mut s, &CouncilConfig::default(), totals(10, 10), vec![gone]);
        assert!(report.unhappy.is_empty());
        assert!(report.defected.is_empty());
    }

    #[test]
    fn test_rating_failure_needs_both_months() {
        assert!(rating_failed(&totals(-10, -50), 0));
        assert!(rating_failed(&totals(0, 0), 0));
        assert!(!rating_failed(&totals(10, -50), 0));
        assert!(!rating_failed(&totals(-50, 10), 0));
    }

    #[test]
    fn test_rating_failure_clears_lists() {
        let mut s = state(0);
        let outcomes = vec![outcome(1, "STR_USA", Satisfaction::Pleased, false)];
        let report = compile_report(&mut s, &CouncilConfig::default(), totals(-10, -50), outcomes);

        assert!(report.is_terminal);
        assert!(report.pleased.is_empty());
        assert_eq!(report.verdict, CouncilVerdict::NotSucceeded);
        assert_eq!(report.failures, vec![FailureReason::SustainedPoorRating]);
        assert!(s.is_terminal());
    }

    #[test]
    fn test_debt_two_strikes() {
        let config = CouncilConfig::default();
        let mut s = state(-2_000_000);
        assert_eq!(check_debt(&mut s, &config), DebtStatus::Warned);
        assert!(s.debt_warning_issued());
        assert_eq!(check_debt(&mut s, &config), DebtStatus::Failed);
    }

    #[test]
    fn test_debt_threshold_is_inclusive() {
        let config = CouncilConfig::default();
        let mut s = state(-1_000_000);
        assert_eq!(check_debt(&mut s, &config), DebtStatus::Warned);
    }

    #[test]
    fn test_recovery_clears_warning() {
        let config = CouncilConfig::default();
        let mut s = state(-2_000_000);
        check_debt(&mut s, &config);
        s.funds = 10;
        assert_eq!(check_debt(&mut s, &config), DebtStatus::Solvent);
        assert!(!s.debt_warning_issued());
        s.funds = -2_000_000;
        assert_eq!(check_debt(&mut s, &config), DebtStatus::Warned);
    }

    #[test]
    fn test_both_failures_are_reported() {
        let mut s = state(-5_000_000);
        s.set_debt_warning(true);
        let report = compile_report(&mut s, &CouncilConfig::default(), totals(-100, -100), vec![]);
        assert!(report.failed_by(FailureReason::SustainedPoorRating));
        assert!(report.failed_by(FailureReason::UnrecoverableDebt));
    }

    #[test]
    fn test_warning_month_is_not_terminal() {
        let mut s = state(-5_000_000);
        let outcomes = vec![outcome(1, "STR_USA", Satisfaction::Unhappy, false)];
        let report = compile_report(&mut s, &CouncilConfig::default(), totals(50, 50), outcomes);
        assert!(report.debt_warning);
        assert!(!report.is_terminal);
        assert_eq!(report.unhappy, vec!["STR_USA"]);
    }
}
