/**
 * Authentication Middleware
 *
 * Protects routes that require a valid access token. The middleware pulls
 * the bearer token from the `Authorization` header, verifies it with the
 * access-token verifier and attaches the caller to the request extensions.
 * Handlers then take [`AuthUser`] as a parameter.
 *
 * The refresh endpoint uses [`RefreshBearer`] instead. It only extracts the
 * raw token; verification against the refresh secret and the stored hash
 * happens in the session manager.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::error::AuthError;
use crate::backend::auth::store::CredentialStore;
use crate::backend::auth::tokens::TokenVerifier;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;

/// Authenticated user data extracted from an access token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively. Returns `None` for a missing
/// header, another scheme, or an empty token.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

/// Authentication middleware
///
/// Returns 401 if the token is missing, malformed, signed with the wrong
/// secret or expired.
pub async fn auth_middleware<S: CredentialStore>(
    State(state): State<AppState<S>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let token = bearer_token(request.headers()).ok_or_else(|| {
        tracing::debug!("Missing bearer token");
        BackendError::MissingBearer
    })?;

    let claims = state
        .auth
        .codec()
        .access_verifier()
        .verify(token)
        .map_err(AuthError::from)?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.sub,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the user attached by [`auth_middleware`]
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<St: Send + Sync> FromRequestParts<St> for AuthUser {
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &St) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::MissingBearer
            })?;

        Ok(AuthUser(user))
    }
}

/// Raw bearer token presented to the refresh endpoint
pub struct RefreshBearer(pub String);

impl<St: Send + Sync> FromRequestParts<St> for RefreshBearer {
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &St) -> Result<Self, Self::Rejection> {
        bearer_token(&parts.headers)
            .map(|token| RefreshBearer(token.to_string()))
            .ok_or(BackendError::MissingBearer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extracted() {
        assert_eq!(bearer_token(&headers_with("Bearer abc.def.ghi")), Some("abc.def.ghi"));
        assert_eq!(bearer_token(&headers_with("bearer abc")), Some("abc"));
    }

    #[test]
    fn test_bearer_token_rejects_other_shapes() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
        assert_eq!(bearer_token(&headers_with("Basic dXNlcjpwdw==")), None);
        assert_eq!(bearer_token(&headers_with("Bearer ")), None);
        assert_eq!(bearer_token(&headers_with("Bearer")), None);
    }

    #[tokio::test]
    async fn test_auth_user_missing_extension() {
        let (mut parts, _) = axum::http::Request::builder()
            .uri("http://example.com")
            .body(())
            .unwrap()
            .into_parts();

        let result = AuthUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(BackendError::MissingBearer)));
    }

    #[tokio::test]
    async fn test_auth_user_from_extension() {
        let (mut parts, _) = axum::http::Request::builder()
            .uri("http://example.com")
            .body(())
            .unwrap()
            .into_parts();

        let user = AuthenticatedUser {
            user_id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
        };
        parts.extensions.insert(user.clone());

        let AuthUser(extracted) = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(extracted, user);
    }
}
