//! Redirect property names and the update-properties carrier

use crate::error::ContentError;
use crate::source_type::SourceUrlType;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Property holding the source URL matching rule, see [`SourceUrlType`]
pub const SOURCE_URL_TYPE: &str = "sourceUrlType";

/// Property holding the source URL of a redirect
pub const SOURCE: &str = "source";

/// Property holding the link target of a redirect
pub const TARGET_LINK: &str = "targetLink";

/// Property holding the redirect type (always redirect vs. only after 404)
pub const REDIRECT_TYPE: &str = "redirectType";

/// Property flagging whether the redirect is active
pub const ACTIVE: &str = "active";

/// Property holding the editorial description of a redirect
pub const DESCRIPTION: &str = "description";

/// The property set an editor proposes when creating or updating a redirect.
///
/// Carries the raw property map handed in by the Studio client; typed
/// accessors are provided for the properties this component inspects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RedirectUpdateProperties {
    properties: HashMap<String, Value>,
}

impl RedirectUpdateProperties {
    /// Wrap a property map
    pub fn new(properties: HashMap<String, Value>) -> Self {
        Self { properties }
    }

    /// Build from a JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                properties: map.into_iter().collect(),
            }),
            other => Err(ContentError::InvalidProperties(format!(
                "expected a JSON object, got {}",
                other
            ))),
        }
    }

    /// The proposed source URL matching rule, if one is set and recognizable
    pub fn source_url_type(&self) -> Option<SourceUrlType> {
        self.string(SOURCE_URL_TYPE).and_then(SourceUrlType::parse)
    }

    /// The proposed source URL
    pub fn source(&self) -> Option<&str> {
        self.string(SOURCE)
    }

    /// The proposed link target id
    pub fn target_link(&self) -> Option<&str> {
        self.string(TARGET_LINK)
    }

    /// The proposed active flag
    pub fn active(&self) -> Option<bool> {
        self.properties.get(ACTIVE).and_then(Value::as_bool)
    }

    /// The proposed editorial description
    pub fn description(&self) -> Option<&str> {
        self.string(DESCRIPTION)
    }

    /// Raw access to the underlying property map
    pub fn as_map(&self) -> &HashMap<String, Value> {
        &self.properties
    }

    fn string(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn update(entries: &[(&str, Value)]) -> RedirectUpdateProperties {
        RedirectUpdateProperties::new(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_source_url_type_accessor() {
        let props = update(&[(SOURCE_URL_TYPE, json!("REGEX"))]);
        assert_eq!(props.source_url_type(), Some(SourceUrlType::Regex));

        let props = update(&[(SOURCE_URL_TYPE, json!("plain"))]);
        assert_eq!(props.source_url_type(), Some(SourceUrlType::Plain));
    }

    #[test]
    fn test_absent_or_unknown_type_is_none() {
        assert_eq!(update(&[]).source_url_type(), None);

        let props = update(&[(SOURCE_URL_TYPE, json!("WILDCARD"))]);
        assert_eq!(props.source_url_type(), None);

        // A non-string value is ignored, not an error
        let props = update(&[(SOURCE_URL_TYPE, json!(42))]);
        assert_eq!(props.source_url_type(), None);
    }

    #[test]
    fn test_typed_accessors() {
        let props = update(&[
            (SOURCE, json!("/products/old")),
            (TARGET_LINK, json!("content-123")),
            (ACTIVE, json!(true)),
            (DESCRIPTION, json!("moved in relaunch")),
        ]);

        assert_eq!(props.source(), Some("/products/old"));
        assert_eq!(props.target_link(), Some("content-123"));
        assert_eq!(props.active(), Some(true));
        assert_eq!(props.description(), Some("moved in relaunch"));
    }

    #[test]
    fn test_from_value_requires_object() {
        let props = RedirectUpdateProperties::from_value(json!({
            "source": "/a", "sourceUrlType": "PLAIN"
        }))
        .unwrap();
        assert_eq!(props.source(), Some("/a"));

        let err = RedirectUpdateProperties::from_value(json!(["not", "an", "object"]));
        assert!(err.is_err());
    }
}
