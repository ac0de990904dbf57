//! Authentication context contract
//!
//! The host owns authentication; this component only ever asks "who is the
//! current principal". Propagation of the security context (thread-locals,
//! request extensions, task-locals) is the host's concern.

/// Read side of the host's security context.
///
/// `current_user_id` returns `None` when no authenticated principal is
/// resolvable. Callers treat that as a broken security integration rather
/// than an anonymous session, so implementations must not substitute guest
/// or system identities.
pub trait AuthenticationContext: Send + Sync {
    /// The directory id of the currently authenticated user, if any
    fn current_user_id(&self) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedContext(Option<String>);

    impl AuthenticationContext for FixedContext {
        fn current_user_id(&self) -> Option<String> {
            self.0.clone()
        }
    }

    #[test]
    fn test_context_exposes_principal() {
        let ctx = FixedContext(Some("u-1".into()));
        assert_eq!(ctx.current_user_id().as_deref(), Some("u-1"));

        let unresolved = FixedContext(None);
        assert_eq!(unresolved.current_user_id(), None);
    }
}
