//! Integration tests for the monthly funding council

use funding_council::core::config::CouncilConfig;
use funding_council::core::error::CouncilError;
use funding_council::core::types::{NationId, RegionId};
use funding_council::council::{
    evaluate_month, render_report, CampaignState, CouncilVerdict, FailureReason, FundingNation,
    RatingBand, Region, Satisfaction, StringTable,
};

fn nations() -> Vec<FundingNation> {
    vec![
        FundingNation::new(NationId(1), "STR_FRANCE", 300_000, 600_000),
        FundingNation::new(NationId(2), "STR_JAPAN", 400_000, 800_000),
        FundingNation::new(NationId(3), "STR_BRAZIL", 200_000, 400_000),
    ]
}

fn campaign(difficulty: i32, funds: i64) -> CampaignState {
    CampaignState::new(
        vec![Region::new(RegionId(0), "STR_EUROPE")],
        nations(),
        funds,
        difficulty,
        2024,
    )
}

/// Record a month of activity in the only region and evaluate it
fn play_month(
    state: &mut CampaignState,
    config: &CouncilConfig,
    player: i32,
    opposition: i32,
) -> funding_council::council::MonthlyReport {
    state.regions[0].record_player_activity(player);
    state.regions[0].record_opposition_activity(opposition);
    evaluate_month(state, config).expect("campaign is still running")
}

fn strings() -> StringTable {
    let mut table = StringTable::english();
    table.insert("STR_FRANCE", "France");
    table.insert("STR_JAPAN", "Japan");
    table.insert("STR_BRAZIL", "Brazil");
    table
}

#[test]
fn test_two_poor_months_end_the_campaign() {
    let config = CouncilConfig::default();
    let mut state = campaign(9, 5_000_000);
    assert_eq!(state.difficulty_threshold(), 0);

    let first = play_month(&mut state, &config, 100, 0);
    assert_eq!(first.rating, 100);

    // Research bonus of 400 applies from the second month
    let second = play_month(&mut state, &config, 0, 450);
    assert_eq!(second.rating, -50);
    assert!(!second.is_terminal);

    state.nations[0].mark_pact_pending();
    let third = play_month(&mut state, &config, 0, 410);
    assert_eq!(third.rating, -10);
    assert_eq!(third.totals.rating_last_month, -50);
    assert!(third.is_terminal);
    assert_eq!(third.verdict, CouncilVerdict::NotSucceeded);
    assert_eq!(third.failures, vec![FailureReason::SustainedPoorRating]);
    assert!(third.pleased.is_empty());
    assert!(third.unhappy.is_empty());
    assert!(third.defected.is_empty());

    let err = evaluate_month(&mut state, &config).expect_err("no evaluation after failure");
    assert!(matches!(err, CouncilError::CampaignOver(3)));
}

#[test]
fn test_one_poor_month_followed_by_recovery_continues() {
    let config = CouncilConfig::default();
    let mut state = campaign(9, 5_000_000);

    play_month(&mut state, &config, 100, 0);
    let poor = play_month(&mut state, &config, 0, 450);
    assert_eq!(poor.rating, -50);

    let recovered = play_month(&mut state, &config, 0, 390);
    assert_eq!(recovered.rating, 10);
    assert!(!recovered.is_terminal);
    assert_eq!(recovered.verdict, CouncilVerdict::GenerallySatisfied);
    assert_eq!(recovered.band, RatingBand::Good);
}

#[test]
fn test_research_bonus_starts_in_second_month() {
    let config = CouncilConfig::default();
    let mut state = campaign(0, 5_000_000);

    state.record_research_score(30);
    let first = play_month(&mut state, &config, 0, 0);
    assert_eq!(first.totals.research_score, 30);
    assert_eq!(first.rating, 30);

    state.record_research_score(30);
    let second = play_month(&mut state, &config, 0, 0);
    assert_eq!(second.totals.research_score, 430);
    assert_eq!(second.rating, 430);
    assert_eq!(second.totals.rating_last_month, 30);
    assert_eq!(state.research_scores(), &[30, 430, 0]);

    // Nations react to the council total, research and bonus included
    assert!(first.pleased.is_empty());
    assert!(first
        .outcomes
        .iter()
        .all(|o| o.satisfaction == Satisfaction::Neutral));
    assert_eq!(second.pleased, vec!["STR_FRANCE", "STR_JAPAN", "STR_BRAZIL"]);
    assert!(second.funding_delta > 0);
}

#[test]
fn test_debt_needs_two_strikes() {
    let config = CouncilConfig::default();
    let mut state = campaign(0, -5_000_000);

    let warned = play_month(&mut state, &config, 0, 0);
    assert!(warned.debt_warning);
    assert!(!warned.is_terminal);
    assert!(state.debt_warning_issued());

    let failed = play_month(&mut state, &config, 0, 0);
    assert!(failed.is_terminal);
    assert!(failed.failed_by(FailureReason::UnrecoverableDebt));
    assert!(!failed.failed_by(FailureReason::SustainedPoorRating));
    assert!(!failed.debt_warning);
}

#[test]
fn test_debt_warning_resets_after_recovery() {
    let config = CouncilConfig::default();
    let mut state = campaign(0, -5_000_000);

    assert!(play_month(&mut state, &config, 0, 0).debt_warning);

    state.funds = 0;
    let solvent = play_month(&mut state, &config, 0, 0);
    assert!(!solvent.debt_warning);
    assert!(!state.debt_warning_issued());

    state.funds = -5_000_000;
    let warned_again = play_month(&mut state, &config, 0, 0);
    assert!(warned_again.debt_warning);
    assert!(!warned_again.is_terminal);
}

#[test]
fn test_defected_nation_stays_pinned() {
    let config = CouncilConfig::default();
    let mut state = campaign(0, 5_000_000);
    state.nations[1].mark_pact_pending();

    let pact = play_month(&mut state, &config, 5_000, 0);
    assert_eq!(pact.defected, vec!["STR_JAPAN"]);
    assert!(!pact.pleased.contains(&"STR_JAPAN".to_string()));

    for _ in 0..4 {
        let report = play_month(&mut state, &config, 5_000, 0);
        assert!(report.defected.is_empty());
        assert!(!report.pleased.contains(&"STR_JAPAN".to_string()));
        assert!(!report.unhappy.contains(&"STR_JAPAN".to_string()));
    }

    let japan = state.get_nation(NationId(2)).expect("nation exists");
    assert!(japan.has_defected());
    assert_eq!(japan.funding_history(), &[400_000, 0, 0, 0, 0, 0]);
    assert_eq!(japan.contribution(), 0);
}

#[test]
fn test_sustained_unhappiness_ends_in_pacts() {
    let mut config = CouncilConfig::default();
    config.research_bonus = 0;
    config.nation.pact_chance = 1.0;
    config.nation.pact_unhappy_months = 2;
    let mut state = campaign(0, 5_000_000);

    // Unhappy every month, but the rating stays above the -900 threshold
    for _ in 0..2 {
        let report = play_month(&mut state, &config, 0, 800);
        assert_eq!(report.unhappy, vec!["STR_FRANCE", "STR_JAPAN", "STR_BRAZIL"]);
        assert!(report.defected.is_empty());
        assert!(report.funding_delta < 0);
    }
    let income_before_pacts = state.total_funding();
    assert!(income_before_pacts > 0);

    let pacts = play_month(&mut state, &config, 0, 800);
    assert!(!pacts.is_terminal);
    assert_eq!(pacts.defected, vec!["STR_FRANCE", "STR_JAPAN", "STR_BRAZIL"]);
    assert!(pacts.unhappy.is_empty());
    assert!(pacts.pleased.is_empty());
    assert_eq!(pacts.funding_delta, -income_before_pacts);
    for nation in &state.nations {
        assert!(nation.has_defected());
        assert_eq!(nation.current_funding(), 0);
    }

    let funds_before = state.funds;
    let after = play_month(&mut state, &config, 0, 800);
    assert_eq!(state.funds, funds_before);
    assert_eq!(state.total_funding(), 0);
    assert!(after.defected.is_empty());
    assert!(after.unhappy.is_empty());
    assert_eq!(after.funding_delta, 0);
    assert!(state.validate().is_ok());
}

#[test]
fn test_lists_follow_nation_order() {
    let config = CouncilConfig::default();
    let mut state = campaign(0, 5_000_000);

    let report = play_month(&mut state, &config, 5_000, 0);
    assert_eq!(report.pleased, vec!["STR_FRANCE", "STR_JAPAN", "STR_BRAZIL"]);
    assert!(report.funding_delta > 0);
    for nation in &state.nations {
        assert!(nation.current_funding() <= nation.funding_cap);
    }
}

#[test]
fn test_rendered_report_phrasing() {
    let config = CouncilConfig::default();
    let mut state = campaign(0, 5_000_000);
    state.nations[0].mark_pact_pending();
    state.nations[2].mark_pact_pending();

    let report = play_month(&mut state, &config, 5_000, 0);
    let text = render_report(&report, &strings());

    assert_eq!(text.title, "Project Monthly Report");
    assert_eq!(text.month, "Month> December 1998");
    assert_eq!(text.rating, "Monthly Rating> 5000 Excellent");
    assert!(text.change.starts_with("Funding change> -$"));
    assert!(text
        .description
        .starts_with("The Council of Funding Nations is very pleased"));
    assert!(text
        .description
        .contains("\n\nJapan is particularly pleased with your activities."));
    assert!(text
        .description
        .ends_with("\n\nFrance and Brazil have signed a secret pact with the enemy."));
    assert!(text.failure.is_none());
}

#[test]
fn test_histories_grow_one_entry_per_month() {
    let config = CouncilConfig::default();
    let mut state = campaign(0, 5_000_000);

    for month in 1..=6 {
        play_month(&mut state, &config, 50, 20);
        assert_eq!(state.months_passed(), month);
        assert_eq!(state.regions[0].months_recorded(), month as usize + 1);
        for nation in &state.nations {
            assert_eq!(nation.funding_history().len(), month as usize + 1);
        }
        assert!(state.validate().is_ok());
    }
}
