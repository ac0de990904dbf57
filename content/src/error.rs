//! Error types for content operations

use thiserror::Error;

/// Errors that can occur while working with content data
#[derive(Error, Debug)]
pub enum ContentError {
    /// A property set was not the expected JSON shape
    #[error("Invalid property set: {0}")]
    InvalidProperties(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
