//! Monthly treasury settlement

use crate::core::types::Funds;
use crate::council::campaign::CampaignState;

/// Pay out last month's funding, deduct upkeep and record the new balance
///
/// Income comes from the funding entries nations committed last month, so it
/// runs before any nation decides this month's change. Returns net income.
pub fn settle_treasury(state: &mut CampaignState) -> Funds {
    let net = state.total_funding() - state.monthly_maintenance;
    state.funds += net;
    state.funds_history.push(state.funds);
    net
}
