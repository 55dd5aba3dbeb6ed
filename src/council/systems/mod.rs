//! Monthly evaluation systems

mod compiler;
mod decisions;
mod ledger;
mod scoring;
mod treasury;

pub use compiler::{check_debt, compile_report, rating_failed, DebtStatus};
pub use decisions::{
    classify, decide_nation, decide_nations, nation_rng, CouncilView, NationOutcome,
};
pub use ledger::commit_activity_month;
pub use scoring::{aggregate_scores, ScoreTotals};
pub use treasury::settle_treasury;
