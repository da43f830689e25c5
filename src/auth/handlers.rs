use axum::{
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;
use tracing::{info, instrument};

use crate::{
    auth::{
        dto::{
            CreateSessionRequest, MessageResponse, OnboardingRequest, OnboardingResponse,
            PublicUser, SessionResponse,
        },
        extractors::{session_token, AuthUser, SESSION_COOKIE},
        repo::{Session, User, SESSION_TTL_DAYS},
        services,
    },
    error::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/session", post(create_session))
        .route("/api/auth/me", get(get_me))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/complete-onboarding", post(complete_onboarding))
}

/// Cross-site cookie carrying the session token; the dashboard is served
/// from a different origin than the API.
pub(crate) fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .path("/")
        .max_age(Duration::days(SESSION_TTL_DAYS))
        .build()
}

fn clear_session_cookie(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/").build())
}

#[instrument(skip(state, jar, payload))]
pub async fn create_session(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<(CookieJar, Json<SessionResponse>), ApiError> {
    let session_id = payload
        .session_id
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::Validation("session_id required".into()))?;

    let (user, session) = services::create_session(&state, &session_id).await?;
    info!(user_id = %user.user_id, email = %user.email, "session created");

    let jar = jar.add(session_cookie(session.session_token.clone()));
    Ok((
        jar,
        Json(SessionResponse {
            user: user.into(),
            session_token: session.session_token,
        }),
    ))
}

#[instrument(skip(user))]
pub async fn get_me(AuthUser(user): AuthUser) -> Json<PublicUser> {
    Json(user.into())
}

#[instrument(skip(state, jar, headers))]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
) -> Result<(CookieJar, Json<MessageResponse>), ApiError> {
    if let Some(token) = session_token(&jar, &headers) {
        Session::delete_by_token(&state.db, &token).await?;
    }

    Ok((
        clear_session_cookie(jar),
        Json(MessageResponse {
            message: "Logged out successfully".into(),
        }),
    ))
}

#[instrument(skip(state, user, payload))]
pub async fn complete_onboarding(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<OnboardingRequest>,
) -> Result<Json<OnboardingResponse>, ApiError> {
    User::complete_onboarding(&state.db, &user.user_id, &payload.data).await?;
    info!(user_id = %user.user_id, "onboarding completed");

    Ok(Json(OnboardingResponse {
        message: "Onboarding completed".into(),
        onboarding_completed: true,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_attributes() {
        let cookie = session_cookie("sess_abc".into());
        assert_eq!(cookie.name(), "session_token");
        assert_eq!(cookie.value(), "sess_abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
    }

    #[test]
    fn session_cookie_max_age_matches_the_session_ttl() {
        let cookie = session_cookie("sess_abc".into());
        let max_age = cookie.max_age().expect("max age");
        assert_eq!(max_age.whole_seconds(), 604_800);
    }
}
