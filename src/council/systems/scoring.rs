//! Score aggregation - council totals and the headline rating

use serde::{Deserialize, Serialize};

use crate::core::config::CouncilConfig;
use crate::core::types::Points;
use crate::council::campaign::CampaignState;

/// Global totals for the month just committed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTotals {
    /// Player activity summed over all regions
    pub player_subtotal: Points,
    /// Opposition activity summed over all regions
    pub opposition_total: Points,
    /// Committed research score, council bonus included
    pub research_score: Points,
    /// What the council credits the player with
    pub player_total: Points,
    pub rating_this_month: Points,
    pub rating_last_month: Points,
}

/// Sum the committed month across regions and fold in research
///
/// The flat research bonus lands on the committed research entry from the
/// second evaluated month onward, so it shows up in the council's totals (and
/// in next month's `rating_last_month`) without touching any region.
pub fn aggregate_scores(state: &mut CampaignState, config: &CouncilConfig) -> ScoreTotals {
    let mut totals = ScoreTotals::default();

    for region in &state.regions {
        if let Some((player, opposition)) = region.committed_activity() {
            totals.player_subtotal += player;
            totals.opposition_total += opposition;
        }
        // Early months have no previous entry; they contribute nothing
        if let Some((player, opposition)) = region.previous_activity() {
            totals.rating_last_month += player - opposition;
        }
    }

    if let Some(idx) = state.research_month_offset() {
        if state.months_passed() > 1 {
            if let Some(score) = state.research_score_mut(idx) {
                *score += config.research_bonus;
            }
        }
        totals.research_score = state.research_scores()[idx];
    }

    if let Some(idx) = state.research_previous_offset() {
        totals.rating_last_month += state.research_scores()[idx];
    }

    totals.player_total = totals.player_subtotal + totals.research_score;
    totals.rating_this_month = totals.player_total - totals.opposition_total;

    tracing::debug!(
        "Council totals: player {} (+{} research), opposition {}, rating {} (last month {})",
        totals.player_subtotal,
        totals.research_score,
        totals.opposition_total,
        totals.rating_this_month,
        totals.rating_last_month
    );

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{NationId, RegionId};
    use crate::council::nation::FundingNation;
    use crate::council::region::Region;
    use crate::council::systems::ledger::commit_activity_month;

    fn campaign() -> CampaignState {
        CampaignState::new(
            vec![Region::new(RegionId(0), "STR_EUROPE"), Region::new(RegionId(1), "STR_AFRICA")],
            vec![FundingNation::new(NationId(1), "STR_EGYPT", 20_000, 60_000)],
            0,
            9,
            3,
        )
    }

    /// Commit one month the way `evaluate_month` sequences it
    fn commit(state: &mut CampaignState, config: &CouncilConfig) -> ScoreTotals {
        state.begin_month();
        commit_activity_month(state);
        aggregate_scores(state, config)
    }

    #[test]
    fn test_first_month_has_no_bonus_and_no_history() {
        let config = CouncilConfig::default();
        let mut state = campaign();
        state.regions[0].record_player_activity(120);
        state.regions[1].record_opposition_activity(80);
        state.record_research_score(30);

        let totals = commit(&mut state, &config);

        assert_eq!(totals.player_subtotal, 120);
        assert_eq!(totals.opposition_total, 80);
        assert_eq!(totals.research_score, 30);
        assert_eq!(totals.rating_this_month, 70);
        assert_eq!(totals.rating_last_month, 0);
    }

    #[test]
    fn test_second_month_gets_bonus_and_previous_month() {
        let config = CouncilConfig::default();
        let mut state = campaign();
        state.regions[0].record_player_activity(120);
        state.regions[1].record_opposition_activity(80);
        state.record_research_score(30);
        commit(&mut state, &config);

        state.regions[1].record_player_activity(50);
        let totals = commit(&mut state, &config);

        assert_eq!(totals.research_score, 400);
        assert_eq!(totals.player_total, 450);
        assert_eq!(totals.rating_this_month, 450);
        // 120 - 80 from the regions plus 30 research, no bonus in month one
        assert_eq!(totals.rating_last_month, 70);
    }

    #[test]
    fn test_bonus_carries_into_following_rating_last_month() {
        let config = CouncilConfig::default();
        let mut state = campaign();
        commit(&mut state, &config);
        commit(&mut state, &config);
        let totals = commit(&mut state, &config);
        assert_eq!(totals.rating_last_month, 400);
        assert_eq!(totals.rating_this_month, 400);
    }

    #[test]
    fn test_region_order_does_not_change_totals() {
        let config = CouncilConfig::default();
        let mut forward = campaign();
        forward.regions[0].record_player_activity(33);
        forward.regions[1].record_opposition_activity(12);
        let mut reversed = forward.clone();
        reversed.regions.reverse();

        assert_eq!(commit(&mut forward, &config), commit(&mut reversed, &config));
    }
}
