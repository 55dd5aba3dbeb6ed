//! Country decisions - satisfaction, funding and pacts per nation
//!
//! Each nation decides from the council totals and its own history only.
//! Randomness comes from a stream seeded by (campaign seed, nation, month),
//! so reordering the nation list never changes any nation's outcome.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::NationPolicy;
use crate::core::types::{Funds, NationId, Points};
use crate::council::campaign::CampaignState;
use crate::council::nation::{FundingNation, Satisfaction};
use crate::council::systems::scoring::ScoreTotals;

/// The totals a nation reacts to
///
/// The player side is the council's full total, research and bonus included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouncilView {
    pub player_activity: Points,
    pub opposition_activity: Points,
}

impl CouncilView {
    pub fn from_totals(totals: &ScoreTotals) -> Self {
        Self {
            player_activity: totals.player_total,
            opposition_activity: totals.opposition_total,
        }
    }

    /// Net score a nation compares against its tier thresholds
    pub fn score(&self, policy: &NationPolicy) -> Points {
        self.player_activity / policy.player_divisor
            - self.opposition_activity / policy.opposition_divisor
    }
}

/// What one nation decided this month
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationOutcome {
    pub nation: NationId,
    pub key: String,
    pub satisfaction: Satisfaction,
    /// New funding entry minus the previous one
    pub funding_delta: Funds,
    /// Signed a pact this month
    pub pact_signed: bool,
    /// Had already defected before this month; nothing was decided
    pub previously_defected: bool,
}

/// Decide every nation in configured order
pub fn decide_nations(
    state: &mut CampaignState,
    view: CouncilView,
    policy: &NationPolicy,
) -> Vec<NationOutcome> {
    let month = state.months_passed();
    let seed = state.seed;

    state
        .nations
        .iter_mut()
        .map(|nation| {
            let rng = nation_rng(seed, nation.id, month);
            decide_nation(nation, view, policy, rng)
        })
        .collect()
}

/// Run one nation's monthly state machine
pub fn decide_nation(
    nation: &mut FundingNation,
    view: CouncilView,
    policy: &NationPolicy,
    mut rng: ChaCha8Rng,
) -> NationOutcome {
    if nation.has_defected() {
        // Terminal: only the pinned entry keeps the history aligned
        let funding_delta = nation.push_funding(0);
        return NationOutcome {
            nation: nation.id,
            key: nation.key.clone(),
            satisfaction: nation.satisfaction(),
            funding_delta,
            pact_signed: false,
            previously_defected: true,
        };
    }

    let disposition = classify(view, policy);
    // Draw both values up front so every nation consumes its stream the same way
    let change = funding_change(nation.current_funding(), policy, &mut rng);
    let pact_roll = rng.gen_bool(policy.pact_chance);

    // Only a nation that is unhappy again this month rolls for a pact
    let streak_eligible = disposition == Satisfaction::Unhappy
        && nation.unhappy_streak() >= policy.pact_unhappy_months;
    if nation.pending_pact() || (streak_eligible && pact_roll) {
        nation.sign_pact();
        nation.set_satisfaction(Satisfaction::Unhappy);
        nation.track_disposition(Satisfaction::Unhappy);
        let funding_delta = nation.push_funding(0);
        tracing::info!("{} signed a pact (funding change {})", nation.key, funding_delta);
        return NationOutcome {
            nation: nation.id,
            key: nation.key.clone(),
            satisfaction: Satisfaction::Unhappy,
            funding_delta,
            pact_signed: true,
            previously_defected: false,
        };
    }

    let old = nation.current_funding();
    let (satisfaction, new_funding) = match disposition {
        Satisfaction::Pleased => {
            let target = (old + change).min(nation.funding_cap);
            if target > old {
                (Satisfaction::Pleased, target)
            } else {
                (Satisfaction::Neutral, old)
            }
        }
        Satisfaction::Unhappy => {
            let target = (old - change).max(0);
            if target < old {
                (Satisfaction::Unhappy, target)
            } else {
                (Satisfaction::Neutral, old)
            }
        }
        Satisfaction::Neutral => (Satisfaction::Neutral, old),
    };

    nation.set_satisfaction(satisfaction);
    nation.track_disposition(disposition);
    let funding_delta = nation.push_funding(new_funding);

    tracing::debug!(
        "{} is {:?} (disposition {:?}, streak {}), funding {} -> {}",
        nation.key,
        satisfaction,
        disposition,
        nation.unhappy_streak(),
        old,
        new_funding
    );

    NationOutcome {
        nation: nation.id,
        key: nation.key.clone(),
        satisfaction,
        funding_delta,
        pact_signed: false,
        previously_defected: false,
    }
}

/// Tier a nation would pick from the council totals alone
pub fn classify(view: CouncilView, policy: &NationPolicy) -> Satisfaction {
    let score = view.score(policy);
    if score < policy.unhappy_below {
        Satisfaction::Unhappy
    } else if score > policy.pleased_above {
        Satisfaction::Pleased
    } else {
        Satisfaction::Neutral
    }
}

/// Size of this month's funding move, in whole funding steps
fn funding_change(current: Funds, policy: &NationPolicy, rng: &mut ChaCha8Rng) -> Funds {
    let percent = rng.gen_range(policy.min_change_percent..=policy.max_change_percent);
    let steps = current / policy.funding_step;
    steps * Funds::from(percent) / 100 * policy.funding_step
}

/// Independent random stream for one nation in one month
pub fn nation_rng(seed: u64, nation: NationId, month: u32) -> ChaCha8Rng {
    let mixed = seed
        ^ u64::from(nation.0).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (u64::from(month) << 32);
    ChaCha8Rng::seed_from_u64(mixed)
}
