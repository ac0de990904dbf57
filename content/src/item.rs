//! Host-independent view of a CMS content node

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A content node as seen by this component: an id plus a property map.
///
/// Both redirect entries and the folders they live in are represented this
/// way; a folder simply carries none of the redirect properties. The item
/// holds no handle into the host repository, so it is cheap to clone and
/// safe to pass across the service boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// The unique identifier of this node in the content repository
    pub id: String,

    /// The node's properties, keyed by property name
    #[serde(default)]
    pub properties: HashMap<String, Value>,
}

impl ContentItem {
    /// Create an item with no properties (e.g., a folder reference)
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            properties: HashMap::new(),
        }
    }

    /// Add a property, consuming and returning the item
    pub fn with_property(mut self, key: impl Into<String>, value: Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    /// Read a string property; `None` if absent or not a string
    pub fn string_property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_property_access() {
        let item = ContentItem::new("redirect-1")
            .with_property("source", json!("/old-path"))
            .with_property("active", json!(true));

        assert_eq!(item.string_property("source"), Some("/old-path"));
        // Non-string values read as None rather than panicking
        assert_eq!(item.string_property("active"), None);
        assert_eq!(item.string_property("missing"), None);
    }

    #[test]
    fn test_folder_has_no_properties() {
        let folder = ContentItem::new("folder-redirects");
        assert!(folder.properties.is_empty());
        assert_eq!(folder.string_property("source"), None);
    }
}
