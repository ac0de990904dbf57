//! Permission checks for the redirect content type.
//!
//! This crate decides whether the current authenticated user may read,
//! create, edit, or delete a redirect entry. All hard machinery lives in
//! the host CMS and is reached through contracts:
//!
//! 1. **Right checks**: [`AccessControl`] answers whether the principal
//!    holds a [`Right`] on a content node for the redirect content type
//! 2. **Directory lookups**: `user::UserDirectory` resolves user and
//!    group records
//! 3. **Security context**: `user::AuthenticationContext` exposes the
//!    current principal's user id
//!
//! On top of those, this crate adds a single rule of its own: redirects
//! whose source URL is matched as a regular expression may only be created,
//! edited or deleted by members of a configured group, or by administrators
//! when no group is configured.
//!
//! # Example
//!
//! ```rust,no_run
//! # async fn example(
//! #     access_control: std::sync::Arc<dyn authz::AccessControl>,
//! #     directory: std::sync::Arc<dyn user::UserDirectory>,
//! #     auth_context: std::sync::Arc<dyn user::AuthenticationContext>,
//! # ) -> authz::Result<()> {
//! use authz::{PermissionConfig, RedirectPermissionService};
//! use content::ContentItem;
//!
//! let service = RedirectPermissionService::new(
//!     access_control,
//!     directory,
//!     auth_context,
//!     PermissionConfig::from_env(),
//! )
//! .await;
//!
//! let folder = ContentItem::new("folder-redirects");
//! if service.may_read(&folder).await? {
//!     // list redirects for the folder
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod types;

use std::sync::Arc;
use tracing::{debug, error, info};

use content::{properties, ContentItem, RedirectUpdateProperties, SourceUrlType};
use user::{AuthenticationContext, Group, UserDirectory};

pub use config::PermissionConfig;
pub use error::{AuthzError, Result};
pub use types::{AccessControl, RedirectRights, Right, REDIRECT_CONTENT_TYPE};

/// Permission checks for redirects.
///
/// Read, write, delete and publish rights are delegated verbatim to the
/// host access control, evaluated on the folder (create/read) or on the
/// redirect entry itself (edit/delete). Redirects with a regex source are
/// additionally restricted: only members of the configured regex group may
/// manage them, or administrators when no group is configured.
///
/// The regex group is resolved once at construction and held immutably for
/// the service's lifetime; a configured but unresolvable group degrades to
/// the administrator-only policy.
pub struct RedirectPermissionService {
    access_control: Arc<dyn AccessControl>,
    directory: Arc<dyn UserDirectory>,
    auth_context: Arc<dyn AuthenticationContext>,
    regex_group: Option<Group>,
}

impl RedirectPermissionService {
    /// Create the service, resolving the configured regex group once.
    ///
    /// A configured group that cannot be resolved is logged as an error and
    /// the service falls back to administrator-only regex privilege;
    /// construction itself never fails.
    pub async fn new(
        access_control: Arc<dyn AccessControl>,
        directory: Arc<dyn UserDirectory>,
        auth_context: Arc<dyn AuthenticationContext>,
        config: PermissionConfig,
    ) -> Self {
        let regex_group =
            resolve_regex_group(directory.as_ref(), config.regex_group_name.as_deref()).await;

        Self {
            access_control,
            directory,
            auth_context,
            regex_group,
        }
    }

    /// May the current user read redirects below the given folder?
    ///
    /// Delegates to the host READ decision for the redirect content type;
    /// the regex restriction does not apply to reading.
    pub async fn may_read(&self, root_folder: &ContentItem) -> Result<bool> {
        self.access_control
            .may_perform(root_folder, REDIRECT_CONTENT_TYPE, Right::Read)
            .await
    }

    /// May the current user create a redirect with the proposed properties
    /// below the given folder?
    pub async fn may_create(
        &self,
        root_folder: &ContentItem,
        update_properties: &RedirectUpdateProperties,
    ) -> Result<bool> {
        if !self.may_write_and_publish(root_folder).await? {
            return Ok(false);
        }
        let privileged = self.user_allowed_for_regex().await?;
        Ok(allowed_for_regex(
            privileged,
            update_properties.source_url_type(),
        ))
    }

    /// May the current user delete the given redirect?
    ///
    /// Only regex-privileged users may delete regex redirects.
    pub async fn may_delete(&self, redirect: &ContentItem) -> Result<bool> {
        let privileged = self.user_allowed_for_regex().await?;
        Ok(self.may_delete_and_publish(redirect).await?
            && allowed_for_regex(privileged, stored_source_type(redirect)))
    }

    /// May the current user apply the proposed properties to the given
    /// redirect?
    ///
    /// The regex condition is checked against the proposed source type *and*
    /// the stored one: an unprivileged user can neither convert a redirect
    /// into or out of regex form nor edit an existing regex redirect.
    pub async fn may_write(
        &self,
        redirect: &ContentItem,
        update_properties: &RedirectUpdateProperties,
    ) -> Result<bool> {
        let privileged = self.user_allowed_for_regex().await?;
        Ok(self.may_write_and_publish(redirect).await?
            && allowed_for_regex(privileged, update_properties.source_url_type())
            && allowed_for_regex(privileged, stored_source_type(redirect)))
    }

    /// Resolve the rights summary for a folder, letting the Studio UI
    /// pre-compute affordances without repeating individual checks.
    pub async fn resolve_rights(&self, root_folder: &ContentItem) -> Result<RedirectRights> {
        let may_write = self.may_write_and_publish(root_folder).await?;
        let may_use_regex = self.user_allowed_for_regex().await?;
        Ok(RedirectRights::new(may_write, may_use_regex))
    }

    async fn may_write_and_publish(&self, content: &ContentItem) -> Result<bool> {
        Ok(self
            .access_control
            .may_perform(content, REDIRECT_CONTENT_TYPE, Right::Write)
            .await?
            && self
                .access_control
                .may_perform(content, REDIRECT_CONTENT_TYPE, Right::Publish)
                .await?)
    }

    async fn may_delete_and_publish(&self, content: &ContentItem) -> Result<bool> {
        Ok(self
            .access_control
            .may_perform(content, REDIRECT_CONTENT_TYPE, Right::Delete)
            .await?
            && self
                .access_control
                .may_perform(content, REDIRECT_CONTENT_TYPE, Right::Publish)
                .await?)
    }

    /// Is the current user privileged to manage regex redirects?
    ///
    /// A missing principal or a principal without a directory record is an
    /// integration failure and surfaces as an error, not a denial.
    async fn user_allowed_for_regex(&self) -> Result<bool> {
        let user_id = self
            .auth_context
            .current_user_id()
            .ok_or(AuthzError::MissingPrincipal)?;

        let user = self
            .directory
            .user_by_id(&user_id)
            .await?
            .ok_or_else(|| AuthzError::UserNotFound(user_id.clone()))?;

        let privileged = match &self.regex_group {
            Some(group) => user.is_member_of(group),
            None => user.is_administrative(),
        };
        debug!("Regex privilege for user [{}]: {}", user.id, privileged);
        Ok(privileged)
    }
}

/// Resolve the configured regex group against the directory, once.
async fn resolve_regex_group(directory: &dyn UserDirectory, name: Option<&str>) -> Option<Group> {
    let name = name.map(str::trim).filter(|n| !n.is_empty())?;

    match directory.group_by_name(name).await {
        Ok(Some(group)) => {
            info!("Resolved regex permission group [{}]", name);
            Some(group)
        }
        Ok(None) => {
            error!(
                "Configured regex group [{}] not found in the directory, \
                 falling back to administrator-only regex permissions",
                name
            );
            None
        }
        Err(e) => {
            error!(
                "Failed to resolve configured regex group [{}]: {}, \
                 falling back to administrator-only regex permissions",
                name, e
            );
            None
        }
    }
}

fn allowed_for_regex(privileged: bool, source_type: Option<SourceUrlType>) -> bool {
    privileged || source_type != Some(SourceUrlType::Regex)
}

fn stored_source_type(redirect: &ContentItem) -> Option<SourceUrlType> {
    redirect
        .string_property(properties::SOURCE_URL_TYPE)
        .and_then(SourceUrlType::parse)
}
