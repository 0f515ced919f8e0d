use axum::http::{HeaderMap, header};

use crate::domain::auth::{AuthContext, Identity};
use crate::infrastructure::jwt::JwtService;

/// Builds the per-request auth context from transport headers.
///
/// A missing Authorization header is the normal anonymous case. A header
/// that is present but malformed or fails verification becomes `Rejected`
/// so guarded operations can fail it while public reads still work.
pub(crate) fn auth_context_from_headers(headers: &HeaderMap, jwt: &JwtService) -> AuthContext {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return AuthContext::Anonymous;
    };
    let Ok(value) = value.to_str() else {
        return AuthContext::Rejected("authorization header is not valid UTF-8".to_string());
    };

    let mut parts = value.split_whitespace();
    let (Some(scheme), Some(token), None) = (parts.next(), parts.next(), parts.next()) else {
        return AuthContext::Rejected("malformed authorization header".to_string());
    };
    if !scheme.eq_ignore_ascii_case("bearer") {
        return AuthContext::Rejected("unsupported authorization scheme".to_string());
    }

    match jwt.verify_token(token) {
        Ok(claims) => AuthContext::Authenticated(Identity {
            user_id: claims.user_id,
            username: claims.username,
            email: claims.email,
        }),
        Err(err) => AuthContext::Rejected(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue, header};

    use super::auth_context_from_headers;
    use crate::domain::auth::AuthContext;
    use crate::infrastructure::jwt::JwtService;

    fn jwt() -> JwtService {
        JwtService::new("0123456789abcdef0123456789abcdef", 3600)
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(value).expect("header value must be valid"),
        );
        headers
    }

    #[test]
    fn missing_header_yields_anonymous() {
        let ctx = auth_context_from_headers(&HeaderMap::new(), &jwt());
        assert!(matches!(ctx, AuthContext::Anonymous));
    }

    #[test]
    fn valid_token_yields_authenticated_identity() {
        let jwt = jwt();
        let token = jwt
            .generate_token(42, "alice", "alice@x.com")
            .expect("token must be issued");

        let ctx = auth_context_from_headers(&headers_with(&format!("Bearer {token}")), &jwt);
        match ctx {
            AuthContext::Authenticated(identity) => {
                assert_eq!(identity.user_id, 42);
                assert_eq!(identity.username, "alice");
                assert_eq!(identity.email, "alice@x.com");
            }
            other => panic!("expected Authenticated, got {other:?}"),
        }
    }

    #[test]
    fn bearer_scheme_is_case_insensitive() {
        let jwt = jwt();
        let token = jwt
            .generate_token(42, "alice", "alice@x.com")
            .expect("token must be issued");

        let ctx = auth_context_from_headers(&headers_with(&format!("bearer {token}")), &jwt);
        assert!(matches!(ctx, AuthContext::Authenticated(_)));
    }

    #[test]
    fn tampered_token_yields_rejected() {
        let jwt = jwt();
        let token = jwt
            .generate_token(42, "alice", "alice@x.com")
            .expect("token must be issued");
        let mut tampered = token.clone();
        tampered.pop();
        tampered.push(if token.ends_with('A') { 'B' } else { 'A' });

        let ctx = auth_context_from_headers(&headers_with(&format!("Bearer {tampered}")), &jwt);
        assert!(matches!(ctx, AuthContext::Rejected(_)));
    }

    #[test]
    fn wrong_scheme_yields_rejected() {
        let ctx = auth_context_from_headers(&headers_with("Basic dXNlcjpwYXNz"), &jwt());
        assert!(matches!(ctx, AuthContext::Rejected(_)));
    }

    #[test]
    fn scheme_without_token_yields_rejected() {
        let ctx = auth_context_from_headers(&headers_with("Bearer"), &jwt());
        assert!(matches!(ctx, AuthContext::Rejected(_)));
    }

    #[test]
    fn extra_header_parts_yield_rejected() {
        let ctx = auth_context_from_headers(&headers_with("Bearer abc def"), &jwt());
        assert!(matches!(ctx, AuthContext::Rejected(_)));
    }
}
