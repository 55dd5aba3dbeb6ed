//! Council events and history logging

use serde::{Deserialize, Serialize};

use crate::core::types::{Funds, NationId, Points};
use crate::council::report::{FailureReason, MonthlyReport};

/// A recorded council event
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub month: u32,
    pub event_type: EventType,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EventType {
    // Nations
    PactSigned { nation: NationId },
    FundingChanged { nation: NationId, delta: Funds },

    // Treasury
    DebtWarningIssued { funds: Funds },
    DebtWarningCleared { funds: Funds },

    // Council
    MonthRated { rating: Points },
    CampaignFailed { reasons: Vec<FailureReason> },
}

impl EventType {
    pub fn nation(&self) -> Option<NationId> {
        match self {
            EventType::PactSigned { nation } | EventType::FundingChanged { nation, .. } => {
                Some(*nation)
            }
            _ => None,
        }
    }
}

/// The complete council history
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HistoryLog {
    pub events: Vec<Event>,
    next_event_id: u32,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_event(&mut self, event_type: EventType, month: u32) -> u32 {
        let id = self.next_event_id;
        self.next_event_id += 1;

        self.events.push(Event {
            id,
            month,
            event_type,
        });

        id
    }

    /// Record everything noteworthy in a compiled report
    ///
    /// `warning_was_set` is the debt flag before the month was evaluated, so a
    /// recovery can be told apart from a month that never was in debt.
    pub fn record_report(&mut self, report: &MonthlyReport, warning_was_set: bool) {
        let month = report.month;
        self.add_event(EventType::MonthRated { rating: report.rating }, month);

        for outcome in &report.outcomes {
            if outcome.pact_signed {
                self.add_event(EventType::PactSigned { nation: outcome.nation }, month);
            }
            if outcome.funding_delta != 0 {
                self.add_event(
                    EventType::FundingChanged {
                        nation: outcome.nation,
                        delta: outcome.funding_delta,
                    },
                    month,
                );
            }
        }

        if report.debt_warning {
            self.add_event(EventType::DebtWarningIssued { funds: report.funds }, month);
        } else if warning_was_set && !report.is_terminal {
            self.add_event(EventType::DebtWarningCleared { funds: report.funds }, month);
        }

        if report.is_terminal {
            self.add_event(
                EventType::CampaignFailed {
                    reasons: report.failures.clone(),
                },
                month,
            );
        }
    }

    pub fn events_for_month(&self, month: u32) -> impl Iterator<Item = &Event> {
        self.events.iter().filter(move |e| e.month == month)
    }

    pub fn events_for_nation(&self, nation: NationId) -> impl Iterator<Item = &Event> {
        self.events
            .iter()
            .filter(move |e| e.event_type.nation() == Some(nation))
    }

    pub fn pacts_signed(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e.event_type, EventType::PactSigned { .. }))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_ids_are_sequential() {
        let mut log = HistoryLog::new();
        let a = log.add_event(EventType::MonthRated { rating: 10 }, 1);
        let b = log.add_event(EventType::MonthRated { rating: 20 }, 2);
        assert_eq!(a, 0);
        assert_eq!(b, 1);
    }

    #[test]
    fn test_filters() {
        let mut log = HistoryLog::new();
        log.add_event(EventType::PactSigned { nation: NationId(3) }, 4);
        log.add_event(EventType::FundingChanged { nation: NationId(3), delta: -5_000 }, 4);
        log.add_event(EventType::FundingChanged { nation: NationId(1), delta: 2_000 }, 5);
        log.add_event(EventType::DebtWarningIssued { funds: -2_000_000 }, 5);

        assert_eq!(log.events_for_month(4).count(), 2);
        assert_eq!(log.events_for_nation(NationId(3)).count(), 2);
        assert_eq!(log.events_for_nation(NationId(1)).count(), 1);
        assert_eq!(log.pacts_signed(), 1);
    }
}
