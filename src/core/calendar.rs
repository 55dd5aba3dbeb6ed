//! Campaign calendar
//!
//! Tracks the month now starting. Monthly reports describe the month that
//! just ended, so the report label is one month behind the calendar.

use serde::{Deserialize, Serialize};

/// Month/year of the campaign clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignCalendar {
    month: u8,
    year: u16,
}

impl CampaignCalendar {
    /// `month` is 1-based and clamped into 1..=12
    pub fn new(month: u8, year: u16) -> Self {
        Self {
            month: month.clamp(1, 12),
            year,
        }
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn advance_month(&mut self) {
        if self.month == 12 {
            self.month = 1;
            self.year += 1;
        } else {
            self.month += 1;
        }
    }

    /// The month a report issued now covers, wrapping January back to December
    pub fn reported_month(&self) -> (u8, u16) {
        if self.month == 1 {
            (12, self.year.saturating_sub(1))
        } else {
            (self.month - 1, self.year)
        }
    }
}

impl Default for CampaignCalendar {
    fn default() -> Self {
        Self::new(1, 1999)
    }
}

/// Localization key for a 1-based month number
pub fn month_key(month: u8) -> &'static str {
    match month {
        1 => "STR_JAN",
        2 => "STR_FEB",
        3 => "STR_MAR",
        4 => "STR_APR",
        5 => "STR_MAY",
        6 => "STR_JUN",
        7 => "STR_JUL",
        8 => "STR_AUG",
        9 => "STR_SEP",
        10 => "STR_OCT",
        11 => "STR_NOV",
        12 => "STR_DEC",
        _ => "",
    }
}
