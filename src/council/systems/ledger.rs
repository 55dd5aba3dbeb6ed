//! Activity ledger commit

use crate::council::campaign::CampaignState;

/// Close the month in progress for every region and for research
///
/// Runs once per evaluation, before any totals are read.
pub fn commit_activity_month(state: &mut CampaignState) {
    for region in &mut state.regions {
        region.new_month();
    }
    state.commit_research_month();
}
