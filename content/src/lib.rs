//! # Content Crate
//!
//! This crate provides the content model shared across the redirect system:
//! the property-map view of CMS content items, the redirect property names,
//! and the classification of a redirect's source URL.
//!
//! ## Key Types
//!
//! - **`ContentItem`**: A lightweight, host-independent view of a content
//!   node (a redirect entry or a folder) as an id plus a property map
//! - **`SourceUrlType`**: Classification of a redirect's matching rule,
//!   either plain (exact match) or regex
//! - **`RedirectUpdateProperties`**: The property set proposed by an editor
//!   when creating or updating a redirect
//!
//! ## Usage
//!
//! ```rust
//! use content::{properties, ContentItem, SourceUrlType};
//! use serde_json::json;
//!
//! let redirect = ContentItem::new("redirect-42")
//!     .with_property(properties::SOURCE_URL_TYPE, json!("REGEX"));
//!
//! let source_type = redirect
//!     .string_property(properties::SOURCE_URL_TYPE)
//!     .and_then(SourceUrlType::parse);
//! assert_eq!(source_type, Some(SourceUrlType::Regex));
//! ```

pub mod error;
pub mod item;
pub mod properties;
pub mod source_type;

// Re-export commonly used types at the crate root
pub use error::ContentError;
pub use item::ContentItem;
pub use properties::RedirectUpdateProperties;
pub use source_type::SourceUrlType;

/// Result type for content operations
pub type Result<T> = std::result::Result<T, ContentError>;
