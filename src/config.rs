use serde::Deserialize;

pub const DEFAULT_IDENTITY_URL: &str =
    "https://demobackend.emergentagent.com/auth/v1/env/oauth/session-data";

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Endpoint that exchanges an external session id for profile claims.
    pub identity_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let auth = AuthConfig {
            identity_url: std::env::var("IDENTITY_URL")
                .unwrap_or_else(|_| DEFAULT_IDENTITY_URL.into()),
        };
        Ok(Self { database_url, auth })
    }
}
