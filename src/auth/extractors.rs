use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use axum_extra::extract::cookie::CookieJar;

use crate::auth::repo::{Session, User};
use crate::error::ApiError;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "session_token";

/// Resolves the session token to its owning user before any handler runs.
pub struct AuthUser(pub User);

/// Token extraction order: session cookie first, then a bearer header.
pub(crate) fn session_token(jar: &CookieJar, headers: &HeaderMap) -> Option<String> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        return Some(cookie.value().to_string());
    }
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|t| t.to_string())
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = session_token(&jar, &parts.headers)
            .ok_or_else(|| ApiError::Unauthenticated("Not authenticated".into()))?;

        let user = Session::find_user(&state.db, &token)
            .await?
            .ok_or_else(|| ApiError::Unauthenticated("Invalid or expired session".into()))?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn cookie_takes_precedence_over_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("session_token=sess_cookie"),
        );
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer sess_header"),
        );
        let jar = CookieJar::from_headers(&headers);
        assert_eq!(session_token(&jar, &headers).as_deref(), Some("sess_cookie"));
    }

    #[test]
    fn bearer_header_is_a_fallback() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer sess_header"),
        );
        let jar = CookieJar::from_headers(&headers);
        assert_eq!(session_token(&jar, &headers).as_deref(), Some("sess_header"));
    }

    #[test]
    fn missing_token_resolves_to_none() {
        let headers = HeaderMap::new();
        let jar = CookieJar::from_headers(&headers);
        assert!(session_token(&jar, &headers).is_none());
    }

    #[test]
    fn non_bearer_scheme_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );
        let jar = CookieJar::from_headers(&headers);
        assert!(session_token(&jar, &headers).is_none());
    }
}
