//! Campaign output and serialization

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::types::Funds;
use crate::council::campaign::CampaignState;
use crate::council::events::HistoryLog;
use crate::council::report::{FailureReason, MonthlyReport};

/// Complete result of a simulated campaign
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CampaignOutput {
    pub final_state: CampaignState,
    pub reports: Vec<MonthlyReport>,
    pub history: HistoryLog,
    pub statistics: CampaignStats,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CampaignStats {
    pub months_simulated: u32,
    pub simulation_time_ms: u64,
    pub total_events: u32,
    pub pacts_signed: u32,
    pub nations_at_start: u32,
    pub nations_remaining: u32,
    pub final_funds: Funds,
    /// Monthly income from the nations still funding the project
    pub final_funding: Funds,
    /// Empty when the campaign survived the month limit
    pub ended_by: Vec<FailureReason>,
}

impl CampaignOutput {
    pub fn new(
        state: CampaignState,
        reports: Vec<MonthlyReport>,
        history: HistoryLog,
        nations_at_start: usize,
        elapsed: Duration,
    ) -> Self {
        let nations_remaining = state.nations.iter().filter(|n| !n.has_defected()).count() as u32;
        let ended_by = reports
            .last()
            .filter(|r| r.is_terminal)
            .map(|r| r.failures.clone())
            .unwrap_or_default();

        let statistics = CampaignStats {
            months_simulated: reports.len() as u32,
            simulation_time_ms: elapsed.as_millis() as u64,
            total_events: history.events.len() as u32,
            pacts_signed: history.pacts_signed() as u32,
            nations_at_start: nations_at_start as u32,
            nations_remaining,
            final_funds: state.funds,
            final_funding: state.total_funding(),
            ended_by,
        };

        Self {
            final_state: state,
            reports,
            history,
            statistics,
        }
    }

    pub fn survived(&self) -> bool {
        self.statistics.ended_by.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self)?)
    }

    pub fn summary(&self) -> String {
        let outcome = if self.survived() {
            "campaign survived".to_string()
        } else {
            format!("campaign ended by {:?}", self.statistics.ended_by)
        };
        format!(
            "Simulated {} months in {}ms\n\
             {} events, {} pacts, {}/{} nations still funding\n\
             Funds {}, monthly funding {}, {}",
            self.statistics.months_simulated,
            self.statistics.simulation_time_ms,
            self.statistics.total_events,
            self.statistics.pacts_signed,
            self.statistics.nations_remaining,
            self.statistics.nations_at_start,
            self.statistics.final_funds,
            self.statistics.final_funding,
            outcome,
        )
    }
}
