//! CampaignState - the long-lived aggregate the monthly evaluation mutates

use serde::{Deserialize, Serialize};

use crate::core::calendar::CampaignCalendar;
use crate::core::error::{CouncilError, Result};
use crate::core::types::{Funds, NationId, Points, RegionId};
use crate::council::nation::FundingNation;
use crate::council::region::{committed_offset, previous_offset, Region};

/// Everything the council reads and writes during a monthly evaluation
///
/// Owned by the surrounding game session. Regions and nations are evaluated in
/// the order they are stored here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CampaignState {
    pub regions: Vec<Region>,
    pub nations: Vec<FundingNation>,
    /// Current balance
    pub funds: Funds,
    /// Settled balance after each evaluated month
    pub funds_history: Vec<Funds>,
    /// Upkeep deducted when each month is settled
    pub monthly_maintenance: Funds,
    pub difficulty_level: i32,
    pub calendar: CampaignCalendar,
    /// Seed of the per-nation random streams
    pub seed: u64,
    research_scores: Vec<Points>,
    months_passed: u32,
    debt_warning_issued: bool,
    is_terminal: bool,
}

impl CampaignState {
    pub fn new(
        regions: Vec<Region>,
        nations: Vec<FundingNation>,
        funds: Funds,
        difficulty_level: i32,
        seed: u64,
    ) -> Self {
        Self {
            regions,
            nations,
            funds,
            funds_history: vec![funds],
            monthly_maintenance: 0,
            difficulty_level,
            calendar: CampaignCalendar::default(),
            seed,
            research_scores: vec![0],
            months_passed: 0,
            debt_warning_issued: false,
            is_terminal: false,
        }
    }

    pub fn with_maintenance(mut self, maintenance: Funds) -> Self {
        self.monthly_maintenance = maintenance;
        self
    }

    pub fn with_calendar(mut self, calendar: CampaignCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    pub fn months_passed(&self) -> u32 {
        self.months_passed
    }

    pub fn debt_warning_issued(&self) -> bool {
        self.debt_warning_issued
    }

    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    pub fn research_scores(&self) -> &[Points] {
        &self.research_scores
    }

    /// Add research points to the month in progress
    pub fn record_research_score(&mut self, points: Points) {
        if let Some(current) = self.research_scores.last_mut() {
            *current += points;
        }
    }

    /// Threshold both the rating failure and the rating bands are anchored to
    pub fn difficulty_threshold(&self) -> Points {
        100 * (self.difficulty_level - 9)
    }

    /// Sum of what every non-defected nation pays this month
    pub fn total_funding(&self) -> Funds {
        self.nations.iter().map(FundingNation::contribution).sum()
    }

    pub fn get_region(&self, id: RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    pub fn get_region_mut(&mut self, id: RegionId) -> Result<&mut Region> {
        self.regions
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(CouncilError::RegionNotFound(id))
    }

    pub fn get_nation(&self, id: NationId) -> Option<&FundingNation> {
        self.nations.iter().find(|n| n.id == id)
    }

    pub fn get_nation_mut(&mut self, id: NationId) -> Result<&mut FundingNation> {
        self.nations
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(CouncilError::NationNotFound(id))
    }

    pub fn find_nation_by_key(&self, key: &str) -> Option<&FundingNation> {
        self.nations.iter().find(|n| n.key == key)
    }

    /// Check the append-only invariants once, at setup
    ///
    /// Monthly evaluation trusts these rather than re-checking them.
    pub fn validate(&self) -> Result<()> {
        if self.nations.is_empty() {
            return Err(CouncilError::InvalidScenario(
                "campaign needs at least one funding nation".into(),
            ));
        }

        let months = self.research_scores.len();
        for region in &self.regions {
            if region.activity_player().len() != region.activity_opposition().len() {
                return Err(CouncilError::InvalidScenario(format!(
                    "region {} has misaligned activity histories",
                    region.key
                )));
            }
            if region.months_recorded() != months {
                return Err(CouncilError::InvalidScenario(format!(
                    "region {} records {} months, research history records {}",
                    region.key,
                    region.months_recorded(),
                    months
                )));
            }
        }

        for nation in &self.nations {
            if nation.funding_history().len() != self.months_passed as usize + 1 {
                return Err(CouncilError::InvalidScenario(format!(
                    "nation {} has {} funding entries after {} months",
                    nation.key,
                    nation.funding_history().len(),
                    self.months_passed
                )));
            }
        }

        Ok(())
    }

    pub(crate) fn begin_month(&mut self) {
        self.months_passed += 1;
    }

    /// Commit the research month in progress, mirroring `Region::new_month`
    pub(crate) fn commit_research_month(&mut self) {
        self.research_scores.push(0);
    }

    pub(crate) fn research_month_offset(&self) -> Option<usize> {
        committed_offset(self.research_scores.len())
    }

    pub(crate) fn research_previous_offset(&self) -> Option<usize> {
        previous_offset(self.research_scores.len())
    }

    pub(crate) fn research_score_mut(&mut self, idx: usize) -> Option<&mut Points> {
        self.research_scores.get_mut(idx)
    }

    pub(crate) fn set_debt_warning(&mut self, issued: bool) {
        self.debt_warning_issued = issued;
    }

    pub(crate) fn mark_terminal(&mut self) {
        self.is_terminal = true;
    }
}
