use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::{
    auth::AuthUser,
    bots::{
        dto::{CreateBotRequest, UpdateBotRequest},
        repo::{Bot, BotStatus},
    },
    error::ApiError,
    ids,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/bots", get(list_bots).post(create_bot))
        .route(
            "/api/bots/:bot_id",
            get(get_bot).put(update_bot).delete(delete_bot),
        )
        .route("/api/bots/:bot_id/start", post(start_bot))
        .route("/api/bots/:bot_id/stop", post(stop_bot))
}

#[instrument(skip(state, user))]
pub async fn list_bots(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Bot>>, ApiError> {
    let bots = Bot::list_by_user(&state.db, &user.user_id).await?;
    Ok(Json(bots))
}

#[instrument(skip(state, user, payload))]
pub async fn create_bot(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateBotRequest>,
) -> Result<Json<Bot>, ApiError> {
    let bot_id = ids::new_id("bot");
    let bot = Bot::create(&state.db, &user.user_id, &bot_id, &payload).await?;
    info!(user_id = %user.user_id, bot_id = %bot.bot_id, "bot created");
    Ok(Json(bot))
}

#[instrument(skip(state, user))]
pub async fn get_bot(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(bot_id): Path<String>,
) -> Result<Json<Bot>, ApiError> {
    let bot = Bot::get(&state.db, &user.user_id, &bot_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Bot not found".into()))?;
    Ok(Json(bot))
}

#[instrument(skip(state, user, payload))]
pub async fn update_bot(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(bot_id): Path<String>,
    Json(payload): Json<UpdateBotRequest>,
) -> Result<Json<Bot>, ApiError> {
    let patch = payload.normalized();
    let bot = Bot::update(&state.db, &user.user_id, &bot_id, &patch)
        .await?
        .ok_or_else(|| ApiError::NotFound("Bot not found".into()))?;
    info!(user_id = %user.user_id, bot_id = %bot.bot_id, "bot updated");
    Ok(Json(bot))
}

#[instrument(skip(state, user))]
pub async fn delete_bot(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(bot_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let deleted = Bot::delete(&state.db, &user.user_id, &bot_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Bot not found".into()));
    }
    info!(user_id = %user.user_id, %bot_id, "bot deleted");
    Ok(Json(json!({ "message": "Bot deleted successfully" })))
}

#[instrument(skip(state, user))]
pub async fn start_bot(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(bot_id): Path<String>,
) -> Result<Json<Bot>, ApiError> {
    let bot = Bot::set_status(&state.db, &user.user_id, &bot_id, BotStatus::Running)
        .await?
        .ok_or_else(|| ApiError::NotFound("Bot not found".into()))?;
    info!(user_id = %user.user_id, bot_id = %bot.bot_id, "bot started");
    Ok(Json(bot))
}

#[instrument(skip(state, user))]
pub async fn stop_bot(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(bot_id): Path<String>,
) -> Result<Json<Bot>, ApiError> {
    let bot = Bot::set_status(&state.db, &user.user_id, &bot_id, BotStatus::Stopped)
        .await?
        .ok_or_else(|| ApiError::NotFound("Bot not found".into()))?;
    info!(user_id = %user.user_id, bot_id = %bot.bot_id, "bot stopped");
    Ok(Json(bot))
}
