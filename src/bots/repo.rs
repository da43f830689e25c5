use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

use crate::bots::dto::{CreateBotRequest, UpdateBotRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "bot_status", rename_all = "lowercase")]
pub enum BotStatus {
    Stopped,
    Running,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Bot {
    pub bot_id: String,
    pub user_id: String,
    pub name: String,
    pub strategy: String,
    pub trading_pair: String,
    pub exchange: String,
    pub initial_investment: Decimal,
    pub current_value: Decimal,
    pub is_virtual: bool,
    pub settings: Value,
    pub status: BotStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Bot {
    pub async fn list_by_user(db: &PgPool, user_id: &str) -> anyhow::Result<Vec<Bot>> {
        let bots = sqlx::query_as::<_, Bot>(
            r#"
            SELECT bot_id, user_id, name, strategy, trading_pair, exchange,
                   initial_investment, current_value, is_virtual, settings, status,
                   created_at, updated_at
            FROM bots
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(bots)
    }

    /// New bots start stopped with `current_value` pinned to the investment.
    pub async fn create(
        db: &PgPool,
        user_id: &str,
        bot_id: &str,
        req: &CreateBotRequest,
    ) -> anyhow::Result<Bot> {
        let bot = sqlx::query_as::<_, Bot>(
            r#"
            INSERT INTO bots (bot_id, user_id, name, strategy, trading_pair, exchange,
                              initial_investment, current_value, is_virtual, settings)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7, $8, $9)
            RETURNING bot_id, user_id, name, strategy, trading_pair, exchange,
                      initial_investment, current_value, is_virtual, settings, status,
                      created_at, updated_at
            "#,
        )
        .bind(bot_id)
        .bind(user_id)
        .bind(&req.name)
        .bind(&req.strategy)
        .bind(&req.trading_pair)
        .bind(&req.exchange)
        .bind(req.initial_investment)
        .bind(req.is_virtual)
        .bind(Value::Object(req.settings.clone()))
        .fetch_one(db)
        .await?;
        Ok(bot)
    }

    pub async fn get(db: &PgPool, user_id: &str, bot_id: &str) -> anyhow::Result<Option<Bot>> {
        let bot = sqlx::query_as::<_, Bot>(
            r#"
            SELECT bot_id, user_id, name, strategy, trading_pair, exchange,
                   initial_investment, current_value, is_virtual, settings, status,
                   created_at, updated_at
            FROM bots
            WHERE bot_id = $1 AND user_id = $2
            "#,
        )
        .bind(bot_id)
        .bind(user_id)
        .fetch_optional(db)
        .await?;
        Ok(bot)
    }

    /// Applies a partial update; absent fields keep their current value.
    pub async fn update(
        db: &PgPool,
        user_id: &str,
        bot_id: &str,
        patch: &UpdateBotRequest,
    ) -> anyhow::Result<Option<Bot>> {
        let bot = sqlx::query_as::<_, Bot>(
            r#"
            UPDATE bots
            SET name = COALESCE($3, name),
                status = COALESCE($4, status),
                settings = COALESCE($5, settings),
                updated_at = NOW()
            WHERE bot_id = $1 AND user_id = $2
            RETURNING bot_id, user_id, name, strategy, trading_pair, exchange,
                      initial_investment, current_value, is_virtual, settings, status,
                      created_at, updated_at
            "#,
        )
        .bind(bot_id)
        .bind(user_id)
        .bind(patch.name.as_deref())
        .bind(patch.status)
        .bind(patch.settings.clone().map(Value::Object))
        .fetch_optional(db)
        .await?;
        Ok(bot)
    }

    pub async fn set_status(
        db: &PgPool,
        user_id: &str,
        bot_id: &str,
        status: BotStatus,
    ) -> anyhow::Result<Option<Bot>> {
        let bot = sqlx::query_as::<_, Bot>(
            r#"
            UPDATE bots
            SET status = $3, updated_at = NOW()
            WHERE bot_id = $1 AND user_id = $2
            RETURNING bot_id, user_id, name, strategy, trading_pair, exchange,
                      initial_investment, current_value, is_virtual, settings, status,
                      created_at, updated_at
            "#,
        )
        .bind(bot_id)
        .bind(user_id)
        .bind(status)
        .fetch_optional(db)
        .await?;
        Ok(bot)
    }

    pub async fn delete(db: &PgPool, user_id: &str, bot_id: &str) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM bots WHERE bot_id = $1 AND user_id = $2")
            .bind(bot_id)
            .bind(user_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
