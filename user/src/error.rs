use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("Directory lookup failed: {0}")]
    Directory(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Group not found: {0}")]
    GroupNotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, UserError>;
