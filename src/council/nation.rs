//! Funding nation - monthly funding history and pact state

use serde::{Deserialize, Serialize};

use crate::core::types::{Funds, NationId};

/// How a nation felt about the month just evaluated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Satisfaction {
    Unhappy,
    #[default]
    Neutral,
    Pleased,
}

/// A nation funding the player's project
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FundingNation {
    pub id: NationId,
    /// Stable key, also the localization key of the display name
    pub key: String,
    pub funding_cap: Funds,
    funding_history: Vec<Funds>,
    satisfaction: Satisfaction,
    has_defected: bool,
    pending_pact: bool,
    unhappy_streak: u32,
}

impl FundingNation {
    pub fn new(
        id: NationId,
        key: impl Into<String>,
        starting_funding: Funds,
        funding_cap: Funds,
    ) -> Self {
        Self {
            id,
            key: key.into(),
            funding_cap,
            funding_history: vec![starting_funding.max(0)],
            satisfaction: Satisfaction::Neutral,
            has_defected: false,
            pending_pact: false,
            unhappy_streak: 0,
        }
    }

    pub fn funding_history(&self) -> &[Funds] {
        &self.funding_history
    }

    /// Funding this nation currently pays each month
    pub fn current_funding(&self) -> Funds {
        self.funding_history.last().copied().unwrap_or(0)
    }

    /// Income the project actually receives from this nation
    pub fn contribution(&self) -> Funds {
        if self.has_defected {
            0
        } else {
            self.current_funding()
        }
    }

    pub fn satisfaction(&self) -> Satisfaction {
        self.satisfaction
    }

    pub fn has_defected(&self) -> bool {
        self.has_defected
    }

    pub fn pending_pact(&self) -> bool {
        self.pending_pact
    }

    pub fn unhappy_streak(&self) -> u32 {
        self.unhappy_streak
    }

    /// Flag the nation as compromised; it signs a pact at the next evaluation
    ///
    /// Ignored once the nation has defected.
    pub fn mark_pact_pending(&mut self) {
        if !self.has_defected {
            self.pending_pact = true;
        }
    }

    /// Append this month's funding entry and return the change from last month
    pub(crate) fn push_funding(&mut self, funding: Funds) -> Funds {
        let previous = self.current_funding();
        self.funding_history.push(funding);
        funding - previous
    }

    pub(crate) fn set_satisfaction(&mut self, satisfaction: Satisfaction) {
        self.satisfaction = satisfaction;
    }

    /// Extend or reset the Unhappy streak from the month's classified tier
    ///
    /// Tracked separately from the reported satisfaction, which falls back to
    /// Neutral when funding cannot move.
    pub(crate) fn track_disposition(&mut self, disposition: Satisfaction) {
        if disposition == Satisfaction::Unhappy {
            self.unhappy_streak += 1;
        } else {
            self.unhappy_streak = 0;
        }
    }

    pub(crate) fn sign_pact(&mut self) {
        self.pending_pact = false;
        self.has_defected = true;
    }
}
