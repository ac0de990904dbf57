//! Core vocabulary for redirect permission checks.
//!
//! The host CMS evaluates rights per content node and content type; this
//! module defines the right kinds, the contract to that evaluation engine,
//! and the rights summary handed to the Studio UI.

use crate::error::Result;
use async_trait::async_trait;
use content::ContentItem;
use serde::{Deserialize, Serialize};

/// The content type name under which redirects are stored in the repository
pub const REDIRECT_CONTENT_TYPE: &str = "Redirect";

/// A permission kind evaluated by the host per content node and content type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Right {
    Read,
    Write,
    Delete,
    Publish,
}

impl std::fmt::Display for Right {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Right::Read => write!(f, "read"),
            Right::Write => write!(f, "write"),
            Right::Delete => write!(f, "delete"),
            Right::Publish => write!(f, "publish"),
        }
    }
}

/// Right-check contract implemented by the host access-control subsystem.
///
/// Answers whether the *current* principal holds `right` on `content` for
/// the given content type. All rule evaluation (rules on folders, group
/// rights, inheritance) happens behind this trait; this component never
/// re-derives any of it.
#[async_trait]
pub trait AccessControl: Send + Sync {
    async fn may_perform(
        &self,
        content: &ContentItem,
        content_type: &str,
        right: Right,
    ) -> Result<bool>;
}

/// Capability summary for a redirects folder, consumed by the Studio UI to
/// drive affordances without repeating individual right checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectRights {
    /// Whether the user may write and publish redirects in the folder
    pub may_write: bool,

    /// Whether the user may manage regex redirects
    pub may_use_regex: bool,
}

impl RedirectRights {
    pub fn new(may_write: bool, may_use_regex: bool) -> Self {
        Self {
            may_write,
            may_use_regex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_display() {
        assert_eq!(Right::Read.to_string(), "read");
        assert_eq!(Right::Publish.to_string(), "publish");
    }

    #[test]
    fn test_rights_summary_serializes_for_the_ui() {
        let rights = RedirectRights::new(true, false);
        let json = serde_json::to_value(&rights).unwrap();
        assert_eq!(json["may_write"], true);
        assert_eq!(json["may_use_regex"], false);
    }
}
