use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Profile claims returned by the identity exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthProfile {
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
}

/// External session id that skips the exchange and resolves to a fixed identity.
pub const TEST_SESSION_ID: &str = "test_session_id";

pub fn test_profile() -> AuthProfile {
    AuthProfile {
        email: "test@tensorx.com".into(),
        name: "Test User".into(),
        picture: Some(
            "https://ui-avatars.com/api/?name=Test+User&background=06b6d4&color=fff".into(),
        ),
    }
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Exchange an externally issued session id for verified profile claims.
    async fn exchange(&self, session_id: &str) -> anyhow::Result<AuthProfile>;
}

const EXCHANGE_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the Emergent Auth session-data endpoint.
pub struct EmergentIdentity {
    http: reqwest::Client,
    url: String,
}

impl EmergentIdentity {
    pub fn new(url: String) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(EXCHANGE_TIMEOUT)
            .build()?;
        Ok(Self { http, url })
    }
}

#[async_trait]
impl IdentityProvider for EmergentIdentity {
    async fn exchange(&self, session_id: &str) -> anyhow::Result<AuthProfile> {
        let res = self
            .http
            .get(&self.url)
            .header("X-Session-ID", session_id)
            .send()
            .await?;

        if !res.status().is_success() {
            anyhow::bail!("identity exchange rejected session: {}", res.status());
        }

        let profile: AuthProfile = res.json().await?;
        debug!(email = %profile.email, "identity exchange succeeded");
        Ok(profile)
    }
}
