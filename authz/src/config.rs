//! Configuration for the permission service

use serde::{Deserialize, Serialize};

/// Environment variable naming the privileged regex group
pub const REGEX_GROUP_ENV: &str = "REDIRECTS_PERMISSIONS_REGEX_GROUP";

/// Configuration for [`RedirectPermissionService`](crate::RedirectPermissionService).
///
/// When `regex_group_name` is unset, regex redirects are restricted to
/// administrators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionConfig {
    /// Name of the directory group whose members may manage regex redirects
    pub regex_group_name: Option<String>,
}

impl PermissionConfig {
    /// Configuration naming a regex group.
    ///
    /// Blank names count as unset, matching the behavior of an empty
    /// configuration property.
    pub fn with_regex_group(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            regex_group_name: if name.trim().is_empty() {
                None
            } else {
                Some(name)
            },
        }
    }

    /// Read the configuration from the environment (`.env` aware)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        match std::env::var(REGEX_GROUP_ENV) {
            Ok(name) => Self::with_regex_group(name),
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unconfigured() {
        assert_eq!(PermissionConfig::default().regex_group_name, None);
    }

    #[test]
    fn test_blank_names_count_as_unset() {
        assert_eq!(
            PermissionConfig::with_regex_group("  ").regex_group_name,
            None
        );
        assert_eq!(PermissionConfig::with_regex_group("").regex_group_name, None);
        assert_eq!(
            PermissionConfig::with_regex_group("regex-editors").regex_group_name,
            Some("regex-editors".to_string())
        );
    }
}
