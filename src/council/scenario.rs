//! Scenario files - nations, regions and council policy loaded from TOML

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::calendar::CampaignCalendar;
use crate::core::config::CouncilConfig;
use crate::core::error::{CouncilError, Result};
use crate::core::types::{Difficulty, Funds, NationId, RegionId};
use crate::council::campaign::CampaignState;
use crate::council::nation::FundingNation;
use crate::council::phrasing::StringTable;
use crate::council::region::Region;
use crate::council::simulation::{ActivityConfig, SimulationConfig};

/// A named difficulty or a raw level
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DifficultySetting {
    Named(Difficulty),
    Level(i32),
}

impl DifficultySetting {
    pub fn level(self) -> i32 {
        match self {
            DifficultySetting::Named(d) => d.level(),
            DifficultySetting::Level(level) => level,
        }
    }
}

impl Default for DifficultySetting {
    fn default() -> Self {
        DifficultySetting::Named(Difficulty::Beginner)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CampaignSection {
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub difficulty: DifficultySetting,
    pub funds: Funds,
    #[serde(default)]
    pub maintenance: Funds,
    #[serde(default = "default_start_month")]
    pub start_month: u8,
    #[serde(default = "default_start_year")]
    pub start_year: u16,
    /// Month limit for simulated runs
    #[serde(default = "default_months")]
    pub months: u32,
}

fn default_start_month() -> u8 {
    1
}

fn default_start_year() -> u16 {
    1999
}

fn default_months() -> u32 {
    36
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegionEntry {
    pub id: u32,
    pub key: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NationEntry {
    pub id: u32,
    pub key: String,
    /// Starting monthly funding
    pub funding: Funds,
    pub cap: Funds,
}

/// A complete campaign setup
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scenario {
    pub campaign: CampaignSection,
    #[serde(default)]
    pub council: CouncilConfig,
    #[serde(default)]
    pub activity: ActivityConfig,
    #[serde(default)]
    pub regions: Vec<RegionEntry>,
    pub nations: Vec<NationEntry>,
    /// Text overrides layered over the built-in English table
    #[serde(default)]
    pub strings: StringTable,
}

impl Scenario {
    /// Parse and validate a scenario
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let scenario: Scenario = toml::from_str(content)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Load a scenario file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let scenario = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded scenario {:?}: {} regions, {} nations",
            path,
            scenario.regions.len(),
            scenario.nations.len()
        );
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<()> {
        self.council.validate()?;
        self.activity.validate()?;

        if !(1..=12).contains(&self.campaign.start_month) {
            return Err(CouncilError::InvalidScenario(format!(
                "start_month {} outside 1..=12",
                self.campaign.start_month
            )));
        }
        if self.nations.is_empty() {
            return Err(CouncilError::InvalidScenario(
                "scenario needs at least one funding nation".into(),
            ));
        }

        let mut region_ids = HashSet::new();
        for region in &self.regions {
            if !region_ids.insert(region.id) {
                return Err(CouncilError::InvalidScenario(format!(
                    "duplicate region id {}",
                    region.id
                )));
            }
        }

        let mut nation_ids = HashSet::new();
        let mut nation_keys = HashSet::new();
        for nation in &self.nations {
            if !nation_ids.insert(nation.id) {
                return Err(CouncilError::InvalidScenario(format!(
                    "duplicate nation id {}",
                    nation.id
                )));
            }
            if !nation_keys.insert(nation.key.as_str()) {
                return Err(CouncilError::InvalidScenario(format!(
                    "duplicate nation key {}",
                    nation.key
                )));
            }
            if nation.funding < 0 || nation.cap < nation.funding {
                return Err(CouncilError::InvalidScenario(format!(
                    "nation {} needs 0 <= funding ({}) <= cap ({})",
                    nation.key, nation.funding, nation.cap
                )));
            }
        }

        Ok(())
    }

    /// Fresh campaign state for this scenario
    pub fn build_campaign(&self) -> CampaignState {
        let regions = self
            .regions
            .iter()
            .map(|r| Region::new(RegionId::new(r.id), r.key.clone()))
            .collect();
        let nations = self
            .nations
            .iter()
            .map(|n| FundingNation::new(NationId::new(n.id), n.key.clone(), n.funding, n.cap))
            .collect();

        CampaignState::new(
            regions,
            nations,
            self.campaign.funds,
            self.campaign.difficulty.level(),
            self.campaign.seed,
        )
        .with_maintenance(self.campaign.maintenance)
        .with_calendar(CampaignCalendar::new(
            self.campaign.start_month,
            self.campaign.start_year,
        ))
    }

    /// Driver settings, with the activity stream seeded from the campaign seed
    pub fn simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            months: self.campaign.months,
            seed: self.campaign.seed.wrapping_add(1),
            activity: self.activity.clone(),
            council: self.council.clone(),
        }
    }

    /// Built-in English text with this scenario's overrides applied
    pub fn string_table(&self) -> StringTable {
        let mut table = StringTable::english();
        table.merge(self.strings.clone());
        table
    }
}
