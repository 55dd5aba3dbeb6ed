//! Monthly report - the engine's committed output for one month

use serde::{Deserialize, Serialize};

use crate::core::config::CouncilConfig;
use crate::core::types::{Funds, Points};
use crate::council::systems::{NationOutcome, ScoreTotals};

/// Qualitative label for the month's rating, worst to best
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RatingBand {
    Terrible,
    Poor,
    Ok,
    Good,
    Excellent,
}

impl RatingBand {
    /// Band cut points relative to the difficulty threshold and to the fixed
    /// zero/excellent marks. Later checks win, so a positive rating is at least
    /// Good even when the threshold itself sits above zero.
    pub fn classify(rating: Points, threshold: Points, config: &CouncilConfig) -> Self {
        let mut band = RatingBand::Terrible;
        if rating > threshold - config.poor_margin {
            band = RatingBand::Poor;
        }
        if rating > threshold {
            band = RatingBand::Ok;
        }
        if rating > 0 {
            band = RatingBand::Good;
        }
        if rating > config.excellent_rating {
            band = RatingBand::Excellent;
        }
        band
    }

    pub fn key(self) -> &'static str {
        match self {
            RatingBand::Terrible => "STR_RATING_TERRIBLE",
            RatingBand::Poor => "STR_RATING_POOR",
            RatingBand::Ok => "STR_RATING_OK",
            RatingBand::Good => "STR_RATING_GOOD",
            RatingBand::Excellent => "STR_RATING_EXCELLENT",
        }
    }
}

/// The council's overall reading of the month
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CouncilVerdict {
    Dissatisfied,
    GenerallySatisfied,
    VeryPleased,
    NotSucceeded,
}

impl CouncilVerdict {
    pub fn classify(rating: Points, threshold: Points, config: &CouncilConfig) -> Self {
        let mut verdict = CouncilVerdict::Dissatisfied;
        if rating > threshold {
            verdict = CouncilVerdict::GenerallySatisfied;
        }
        if rating > config.excellent_rating {
            verdict = CouncilVerdict::VeryPleased;
        }
        verdict
    }

    pub fn key(self) -> &'static str {
        match self {
            CouncilVerdict::Dissatisfied => "STR_COUNCIL_IS_DISSATISFIED",
            CouncilVerdict::GenerallySatisfied => "STR_COUNCIL_IS_GENERALLY_SATISFIED",
            CouncilVerdict::VeryPleased => "STR_COUNCIL_IS_VERY_PLEASED",
            CouncilVerdict::NotSucceeded => "STR_YOU_HAVE_NOT_SUCCEEDED",
        }
    }
}

/// Why a campaign ended. Both can trigger in the same month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureReason {
    /// This month and last month both rated at or below the difficulty threshold
    SustainedPoorRating,
    /// Funds stayed below the debt threshold after a warning
    UnrecoverableDebt,
}

/// Everything the council decided about one month
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// 1-based number of the evaluated month
    pub month: u32,
    /// (month, year) the report covers
    pub reported_month: (u8, u16),
    pub totals: ScoreTotals,
    pub rating: Points,
    pub band: RatingBand,
    pub verdict: CouncilVerdict,
    /// Net change of monthly funding across all nations
    pub funding_delta: Funds,
    /// Balance after this month was settled
    pub funds: Funds,
    pub pleased: Vec<String>,
    pub unhappy: Vec<String>,
    pub defected: Vec<String>,
    pub outcomes: Vec<NationOutcome>,
    /// A first debt strike was issued this month
    pub debt_warning: bool,
    pub failures: Vec<FailureReason>,
    pub is_terminal: bool,
}

impl MonthlyReport {
    pub fn failed_by(&self, reason: FailureReason) -> bool {
        self.failures.contains(&reason)
    }

    pub fn summary(&self) -> String {
        format!(
            "Month {}: rating {} ({:?}), funding change {:+}, {} pleased / {} unhappy / {} pacts{}",
            self.month,
            self.rating,
            self.band,
            self.funding_delta,
            self.pleased.len(),
            self.unhappy.len(),
            self.defected.len(),
            if self.is_terminal { " - CAMPAIGN OVER" } else { "" },
        )
    }
}
