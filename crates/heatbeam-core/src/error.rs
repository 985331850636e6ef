//! Error type for the fallible edges of the turret: persistence and
//! content loading. The tick loop itself never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeatbeamError {
    #[error("persistence stream error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse definition: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid turret definition `{name}`: {reason}")]
    InvalidDefinition { name: String, reason: String },
}

pub type Result<T> = std::result::Result<T, HeatbeamError>;
