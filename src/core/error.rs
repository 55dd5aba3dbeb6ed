use thiserror::Error;

use crate::core::types::{NationId, RegionId};

#[derive(Error, Debug)]
pub enum CouncilError {
    #[error("Campaign already ended after month {0}")]
    CampaignOver(u32),

    #[error("Nation not found: {0:?}")]
    NationNotFound(NationId),

    #[error("Region not found: {0:?}")]
    RegionNotFound(RegionId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CouncilError>;
