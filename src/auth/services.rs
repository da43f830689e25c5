use tracing::warn;

use crate::auth::identity::{test_profile, AuthProfile, TEST_SESSION_ID};
use crate::auth::repo::{Session, User};
use crate::error::ApiError;
use crate::ids;
use crate::state::AppState;

/// Resolves an external session id to profile claims, honoring the test bypass.
pub async fn resolve_profile(state: &AppState, session_id: &str) -> Result<AuthProfile, ApiError> {
    if session_id == TEST_SESSION_ID {
        return Ok(test_profile());
    }

    state.identity.exchange(session_id).await.map_err(|e| {
        warn!(error = %e, "identity exchange failed");
        ApiError::UpstreamAuth("Invalid session_id".into())
    })
}

/// Exchanges the external session id, upserts the user by email and rotates
/// their session token.
pub async fn create_session(
    state: &AppState,
    session_id: &str,
) -> Result<(User, Session), ApiError> {
    let profile = resolve_profile(state, session_id).await?;

    let user = match User::find_by_email(&state.db, &profile.email).await? {
        Some(_) => {
            User::update_profile(
                &state.db,
                &profile.email,
                &profile.name,
                profile.picture.as_deref(),
            )
            .await?
        }
        None => {
            let user_id = ids::new_id("user");
            User::create(
                &state.db,
                &user_id,
                &profile.email,
                &profile.name,
                profile.picture.as_deref(),
            )
            .await?
        }
    };

    let token = ids::new_session_token();
    let session = Session::replace_for_user(&state.db, &user.user_id, &token).await?;
    Ok((user, session))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::auth::identity::IdentityProvider;

    #[tokio::test]
    async fn sentinel_session_id_skips_the_exchange() {
        let state = AppState::fake();
        let profile = resolve_profile(&state, TEST_SESSION_ID)
            .await
            .expect("sentinel profile");
        assert_eq!(profile.email, "test@tensorx.com");
        assert_eq!(profile.name, "Test User");
    }

    #[tokio::test]
    async fn exchange_profile_is_passed_through() {
        let state = AppState::fake();
        let profile = resolve_profile(&state, "opaque-external-id")
            .await
            .expect("fake exchange");
        assert_eq!(profile.email, "fake@tensorx.com");
    }

    #[tokio::test]
    async fn exchange_failure_maps_to_upstream_auth() {
        struct Rejecting;

        #[async_trait::async_trait]
        impl IdentityProvider for Rejecting {
            async fn exchange(&self, _session_id: &str) -> anyhow::Result<AuthProfile> {
                anyhow::bail!("identity exchange rejected session: 503")
            }
        }

        let mut state = AppState::fake();
        state.identity = Arc::new(Rejecting);

        let err = resolve_profile(&state, "opaque-external-id")
            .await
            .expect_err("upstream failure");
        assert!(matches!(err, ApiError::UpstreamAuth(_)));
    }
}
