use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

/// Sessions are valid for one week from issuance.
pub const SESSION_TTL_DAYS: i64 = 7;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub picture: Option<String>,
    pub onboarding_completed: bool,
    pub settings: serde_json::Value,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl User {
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, email, name, picture, onboarding_completed, settings, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Refresh name and picture from the latest identity exchange.
    pub async fn update_profile(
        db: &PgPool,
        email: &str,
        name: &str,
        picture: Option<&str>,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users SET name = $2, picture = $3
            WHERE email = $1
            RETURNING user_id, email, name, picture, onboarding_completed, settings, created_at
            "#,
        )
        .bind(email)
        .bind(name)
        .bind(picture)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    pub async fn create(
        db: &PgPool,
        user_id: &str,
        email: &str,
        name: &str,
        picture: Option<&str>,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (user_id, email, name, picture)
            VALUES ($1, $2, $3, $4)
            RETURNING user_id, email, name, picture, onboarding_completed, settings, created_at
            "#,
        )
        .bind(user_id)
        .bind(email)
        .bind(name)
        .bind(picture)
        .fetch_one(db)
        .await?;
        Ok(user)
    }

    /// Marks onboarding done and merges `{"onboarding": data}` into settings,
    /// leaving unrelated keys in place.
    pub async fn complete_onboarding(
        db: &PgPool,
        user_id: &str,
        data: &serde_json::Value,
    ) -> anyhow::Result<()> {
        let merge = serde_json::json!({ "onboarding": data });
        sqlx::query(
            r#"
            UPDATE users
            SET onboarding_completed = TRUE,
                settings = settings || $2
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .bind(merge)
        .execute(db)
        .await?;
        Ok(())
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub session_id: String,
    pub user_id: String,
    pub session_token: String,
    pub expires_at: OffsetDateTime,
}

impl Session {
    /// Replaces any existing sessions for the user with a single fresh row.
    /// Delete and insert commit as one unit.
    pub async fn replace_for_user(
        db: &PgPool,
        user_id: &str,
        token: &str,
    ) -> anyhow::Result<Session> {
        let session_id = Uuid::new_v4().to_string();
        let expires_at = OffsetDateTime::now_utc() + Duration::days(SESSION_TTL_DAYS);

        let mut tx = db.begin().await?;
        sqlx::query("DELETE FROM sessions WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
        let session = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (session_id, user_id, session_token, expires_at)
            VALUES ($1, $2, $3, $4)
            RETURNING session_id, user_id, session_token, expires_at
            "#,
        )
        .bind(&session_id)
        .bind(user_id)
        .bind(token)
        .bind(expires_at)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(session)
    }

    /// Resolves a token to its owning user, ignoring expired rows.
    pub async fn find_user(db: &PgPool, token: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT u.user_id, u.email, u.name, u.picture, u.onboarding_completed,
                   u.settings, u.created_at
            FROM users u
            JOIN sessions s ON u.user_id = s.user_id
            WHERE s.session_token = $1 AND s.expires_at > NOW()
            "#,
        )
        .bind(token)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    pub async fn delete_by_token(db: &PgPool, token: &str) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM sessions WHERE session_token = $1")
            .bind(token)
            .execute(db)
            .await?;
        Ok(())
    }
}
