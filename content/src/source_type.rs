//! Classification of a redirect's source URL matching rule

use serde::{Deserialize, Serialize};

/// How a redirect's source URL is matched against incoming requests.
///
/// Stored on the redirect entry as an uppercase string property; values
/// written by older tooling may be lowercase, so parsing is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceUrlType {
    /// The source URL must match the request path exactly
    Plain,
    /// The source URL is a regular expression
    Regex,
}

impl SourceUrlType {
    /// Parse a stored property value.
    ///
    /// Unknown or empty values yield `None` rather than an error; a redirect
    /// without a recognizable source type is treated as plain by callers.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "PLAIN" => Some(SourceUrlType::Plain),
            "REGEX" => Some(SourceUrlType::Regex),
            _ => None,
        }
    }

    /// The uppercase form stored in the content repository
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceUrlType::Plain => "PLAIN",
            SourceUrlType::Regex => "REGEX",
        }
    }
}

impl std::fmt::Display for SourceUrlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
