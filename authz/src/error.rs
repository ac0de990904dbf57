//! Error types for the redirect permission checks.
//!
//! A denied decision is an `Ok(false)`, never an error. Errors signal that
//! the surrounding integration is broken: the security context produced no
//! principal, the directory has no record for an authenticated principal,
//! or a collaborator call failed outright.

use thiserror::Error;
use user::UserError;

/// Errors that can occur while evaluating redirect permissions
#[derive(Debug, Error)]
pub enum AuthzError {
    /// The security context holds no resolvable authenticated principal.
    ///
    /// Non-recoverable: authorization questions cannot be answered without
    /// knowing who is asking.
    #[error("No authenticated principal in the current security context")]
    MissingPrincipal,

    /// An authenticated principal has no record in the directory.
    ///
    /// Non-recoverable: indicates the authentication and directory
    /// integrations disagree about who exists.
    #[error("User '{0}' not found in the directory")]
    UserNotFound(String),

    /// A directory lookup failed
    #[error("Directory error: {0}")]
    Directory(#[from] UserError),

    /// A right check against the host access control failed
    #[error("Access control error: {0}")]
    AccessControl(String),
}

/// A specialized Result type for permission evaluation
pub type Result<T> = std::result::Result<T, AuthzError>;
