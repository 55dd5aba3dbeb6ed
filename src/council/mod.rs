//! Funding council
//!
//! Monthly evaluation of the player's performance by the nations funding the
//! project. Regions record activity during the month; once per month the
//! council scores it, each nation adjusts its funding or defects, and a
//! report is compiled that may end the campaign.

pub mod campaign;
pub mod events;
pub mod nation;
pub mod output;
pub mod phrasing;
pub mod region;
pub mod report;
pub mod scenario;
pub mod simulation;
pub mod systems;

pub use campaign::CampaignState;
pub use events::{Event, EventType, HistoryLog};
pub use nation::{FundingNation, Satisfaction};
pub use output::{CampaignOutput, CampaignStats};
pub use phrasing::{country_list, render_report, RenderedReport, StringTable, Translator};
pub use region::Region;
pub use report::{CouncilVerdict, FailureReason, MonthlyReport, RatingBand};
pub use scenario::Scenario;
pub use simulation::{evaluate_month, simulate, ActivityConfig, SimulationConfig};
