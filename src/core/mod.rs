pub mod calendar;
pub mod config;
pub mod error;
pub mod types;

pub use calendar::{month_key, CampaignCalendar};
pub use config::{CouncilConfig, NationPolicy};
pub use error::{CouncilError, Result};
