//! Lookup contract against the host user/group directory

use crate::error::Result;
use crate::types::{Group, User};
use async_trait::async_trait;

/// Read access to the host CMS user/group directory.
///
/// Implementations are provided by the host integration. A missing record is
/// `Ok(None)`; an `Err` signals a transport or integration failure and is
/// never used to express "not found".
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Resolve a user record by its directory id
    async fn user_by_id(&self, id: &str) -> Result<Option<User>>;

    /// Resolve a group record by its name
    async fn group_by_name(&self, name: &str) -> Result<Option<Group>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Minimal in-memory directory exercising the contract
    struct MapDirectory {
        users: HashMap<String, User>,
        groups: HashMap<String, Group>,
    }

    #[async_trait]
    impl UserDirectory for MapDirectory {
        async fn user_by_id(&self, id: &str) -> Result<Option<User>> {
            Ok(self.users.get(id).cloned())
        }

        async fn group_by_name(&self, name: &str) -> Result<Option<Group>> {
            Ok(self.groups.get(name).cloned())
        }
    }

    #[tokio::test]
    async fn test_missing_records_are_none_not_err() {
        let directory = MapDirectory {
            users: HashMap::new(),
            groups: HashMap::new(),
        };

        assert!(directory.user_by_id("nobody").await.unwrap().is_none());
        assert!(directory.group_by_name("no-group").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_lookup_roundtrip() {
        let group = Group::new("g-1", "redirect-editors");
        let user = User::new("u-1", "alice").member_of(&group);

        let directory = MapDirectory {
            users: HashMap::from([(user.id.clone(), user.clone())]),
            groups: HashMap::from([(group.name.clone(), group.clone())]),
        };

        let resolved = directory.user_by_id("u-1").await.unwrap().unwrap();
        assert_eq!(resolved, user);

        let resolved = directory
            .group_by_name("redirect-editors")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(resolved.id, "g-1");
    }
}
