use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::auth::repo::User;

/// Body of `POST /api/auth/session`.
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub session_id: Option<String>,
}

/// Public part of the user returned to the client.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
    pub onboarding_completed: bool,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            user_id: u.user_id,
            email: u.email,
            name: u.name,
            picture: u.picture,
            onboarding_completed: u.onboarding_completed,
        }
    }
}

/// Response of `POST /api/auth/session`.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: PublicUser,
    pub session_token: String,
}

/// Body of `POST /api/auth/complete-onboarding`.
#[derive(Debug, Deserialize)]
pub struct OnboardingRequest {
    #[serde(default = "empty_object")]
    pub data: Value,
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

#[derive(Debug, Serialize)]
pub struct OnboardingResponse {
    pub message: String,
    pub onboarding_completed: bool,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_request_tolerates_a_missing_id() {
        let req: CreateSessionRequest = serde_json::from_str("{}").expect("body");
        assert!(req.session_id.is_none());
    }

    #[test]
    fn onboarding_data_defaults_to_an_empty_object() {
        let req: OnboardingRequest = serde_json::from_str("{}").expect("body");
        assert_eq!(req.data, serde_json::json!({}));
    }

    #[test]
    fn public_user_drops_internal_fields() {
        let user = User {
            user_id: "user_abc".into(),
            email: "a@b.com".into(),
            name: "A".into(),
            picture: None,
            onboarding_completed: false,
            settings: serde_json::json!({"theme": "dark"}),
            created_at: time::OffsetDateTime::now_utc(),
        };
        let json = serde_json::to_value(PublicUser::from(user)).expect("json");
        assert_eq!(json["user_id"], "user_abc");
        assert!(json.get("settings").is_none());
    }
}
