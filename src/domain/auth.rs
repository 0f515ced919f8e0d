use super::error::DomainError;

/// Identity claims decoded from a verified token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Identity {
    pub(crate) user_id: i64,
    pub(crate) username: String,
    pub(crate) email: String,
}

/// Per-request authentication state.
///
/// `Rejected` keeps a bad token distinct from a missing one: public queries
/// treat it the same as `Anonymous`, while guarded operations fail it.
#[derive(Debug, Clone)]
pub(crate) enum AuthContext {
    Anonymous,
    Authenticated(Identity),
    Rejected(String),
}

impl AuthContext {
    pub(crate) fn require_authenticated(&self) -> Result<&Identity, DomainError> {
        match self {
            AuthContext::Authenticated(identity) => Ok(identity),
            AuthContext::Anonymous | AuthContext::Rejected(_) => {
                Err(DomainError::Unauthenticated)
            }
        }
    }

    pub(crate) fn require_ownership(&self, owner_id: i64) -> Result<&Identity, DomainError> {
        let identity = self.require_authenticated()?;
        if identity.user_id != owner_id {
            return Err(DomainError::Forbidden);
        }
        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthContext, Identity};
    use crate::domain::error::DomainError;

    fn authenticated(user_id: i64) -> AuthContext {
        AuthContext::Authenticated(Identity {
            user_id,
            username: "valid_user".to_string(),
            email: "valid@example.com".to_string(),
        })
    }

    #[test]
    fn require_authenticated_rejects_anonymous() {
        let err = AuthContext::Anonymous
            .require_authenticated()
            .expect_err("anonymous must be rejected");
        assert!(matches!(err, DomainError::Unauthenticated));
    }

    #[test]
    fn require_authenticated_rejects_rejected_token() {
        let ctx = AuthContext::Rejected("token expired".to_string());
        let err = ctx
            .require_authenticated()
            .expect_err("rejected token must not authenticate");
        assert!(matches!(err, DomainError::Unauthenticated));
    }

    #[test]
    fn require_authenticated_returns_identity() {
        let ctx = authenticated(7);
        let identity = ctx.require_authenticated().expect("must be authenticated");
        assert_eq!(identity.user_id, 7);
    }

    #[test]
    fn require_ownership_matches_on_equality_only() {
        let ctx = authenticated(7);
        assert!(ctx.require_ownership(7).is_ok());

        let err = ctx
            .require_ownership(8)
            .expect_err("mismatched owner must be forbidden");
        assert!(matches!(err, DomainError::Forbidden));
    }

    #[test]
    fn require_ownership_without_identity_is_unauthenticated() {
        let err = AuthContext::Anonymous
            .require_ownership(7)
            .expect_err("anonymous must fail before the ownership check");
        assert!(matches!(err, DomainError::Unauthenticated));
    }
}
