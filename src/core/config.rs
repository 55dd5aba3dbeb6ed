//! Council configuration with documented constants
//!
//! Every policy number the monthly evaluation uses lives here, so a scenario
//! file can retune the council without touching the systems.

use serde::{Deserialize, Serialize};

use crate::core::error::{CouncilError, Result};
use crate::core::types::{Funds, Points};

/// Council-level policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CouncilConfig {
    /// Flat research bonus added to the council's player total from the
    /// second evaluated month onward
    pub research_bonus: Points,

    /// Funds at or below this balance count as unrecoverable debt
    ///
    /// The first month below it only earns a warning; a second consecutive
    /// strike ends the campaign.
    pub debt_threshold: Funds,

    /// Rating above which the council is very pleased and the band is Excellent
    pub excellent_rating: Points,

    /// Width of the Poor band below the difficulty threshold
    ///
    /// Ratings at or below `threshold - poor_margin` are Terrible.
    pub poor_margin: Points,

    /// Per-nation decision policy
    pub nation: NationPolicy,
}

/// How a single funding nation reacts to the council totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NationPolicy {
    /// Player activity is divided by this before comparison
    pub player_divisor: Points,

    /// Opposition activity is divided by this before comparison
    ///
    /// Larger than `player_divisor`: a nation forgives opposition activity
    /// more readily than it credits the player.
    pub opposition_divisor: Points,

    /// Scores above this make a nation Pleased
    pub pleased_above: Points,

    /// Scores below this make a nation Unhappy
    pub unhappy_below: Points,

    /// Lower bound of the monthly funding change, in percent
    pub min_change_percent: u32,

    /// Upper bound of the monthly funding change, in percent
    pub max_change_percent: u32,

    /// Funding changes are rounded down to whole multiples of this
    pub funding_step: Funds,

    /// Consecutive Unhappy months before a nation starts rolling for a pact
    pub pact_unhappy_months: u32,

    /// Chance per month that an eligible nation signs a pact
    pub pact_chance: f64,
}

impl Default for CouncilConfig {
    fn default() -> Self {
        Self {
            research_bonus: 400,
            debt_threshold: -1_000_000,
            excellent_rating: 500,
            poor_margin: 300,
            nation: NationPolicy::default(),
        }
    }
}

impl Default for NationPolicy {
    fn default() -> Self {
        Self {
            player_divisor: 10,
            opposition_divisor: 20,
            pleased_above: 30,
            unhappy_below: -30,
            min_change_percent: 5,
            max_change_percent: 20,
            funding_step: 1000,
            pact_unhappy_months: 3,
            pact_chance: 0.5,
        }
    }
}

impl CouncilConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML, then validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CouncilConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.research_bonus < 0 {
            return Err(CouncilError::InvalidConfig(format!(
                "research_bonus ({}) must not be negative",
                self.research_bonus
            )));
        }

        if self.debt_threshold >= 0 {
            return Err(CouncilError::InvalidConfig(format!(
                "debt_threshold ({}) must be negative",
                self.debt_threshold
            )));
        }

        if self.poor_margin < 0 {
            return Err(CouncilError::InvalidConfig(format!(
                "poor_margin ({}) must not be negative",
                self.poor_margin
            )));
        }

        self.nation.validate()
    }
}

impl NationPolicy {
    pub fn validate(&self) -> Result<()> {
        if self.player_divisor <= 0 || self.opposition_divisor <= 0 {
            return Err(CouncilError::InvalidConfig(
                "activity divisors must be positive".into(),
            ));
        }

        if self.unhappy_below > self.pleased_above {
            return Err(CouncilError::InvalidConfig(format!(
                "unhappy_below ({}) should be <= pleased_above ({})",
                self.unhappy_below, self.pleased_above
            )));
        }

        if self.min_change_percent > self.max_change_percent {
            return Err(CouncilError::InvalidConfig(format!(
                "min_change_percent ({}) should be <= max_change_percent ({})",
                self.min_change_percent, self.max_change_percent
            )));
        }

        if self.funding_step <= 0 {
            return Err(CouncilError::InvalidConfig(format!(
                "funding_step ({}) must be positive",
                self.funding_step
            )));
        }

        if self.pact_unhappy_months == 0 {
            return Err(CouncilError::InvalidConfig(
                "pact_unhappy_months must be at least 1".into(),
            ));
        }

        if !(0.0..=1.0).contains(&self.pact_chance) {
            return Err(CouncilError::InvalidConfig(format!(
                "pact_chance ({}) must be within 0.0..=1.0",
                self.pact_chance
            )));
        }

        Ok(())
    }
}
