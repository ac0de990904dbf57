//! Directory record types

use serde::{Deserialize, Serialize};

/// A user record as resolved from the host directory.
///
/// Only the attributes the permission checks consume are carried here:
/// identity, the administrative flag, and group memberships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The unique identifier of this user in the directory
    pub id: String,

    /// The login/display name of this user
    pub name: String,

    /// Whether the directory marks this user as an administrator
    #[serde(default)]
    pub administrative: bool,

    /// Ids of the groups this user is a direct member of
    #[serde(default)]
    pub group_ids: Vec<String>,
}

impl User {
    /// Create a non-administrative user with no group memberships
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            administrative: false,
            group_ids: Vec::new(),
        }
    }

    /// Mark this user as an administrator, consuming and returning it
    pub fn administrative(mut self) -> Self {
        self.administrative = true;
        self
    }

    /// Add a group membership, consuming and returning the user
    pub fn member_of(mut self, group: &Group) -> Self {
        self.group_ids.push(group.id.clone());
        self
    }

    /// Whether this user is a member of the given group
    pub fn is_member_of(&self, group: &Group) -> bool {
        self.group_ids.iter().any(|id| id == &group.id)
    }

    /// Whether the directory marks this user as an administrator
    pub fn is_administrative(&self) -> bool {
        self.administrative
    }
}

/// A group record as resolved from the host directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// The unique identifier of this group in the directory
    pub id: String,

    /// The name of this group
    pub name: String,
}

impl Group {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
