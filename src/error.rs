use thiserror::Error;

/// Errors from the fallible edges of the crate: tag parsing and range table configuration.
/// Classification and segmentation themselves never fail.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("unknown script tag: {0:?}")]
    UnknownTag(String),

    #[error("invalid code point range: start {start:#06X} is after end {end:#06X}")]
    InvalidRange { start: u32, end: u32 },

    #[error("failed to read range tables: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse range tables: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScriptError>;
