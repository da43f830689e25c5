use axum::Router;

use crate::state::AppState;

mod callbacks;
pub mod dto;
pub(crate) mod extractors;
pub mod handlers;
pub mod identity;
pub mod repo;
pub mod services;

pub use extractors::AuthUser;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(handlers::routes())
        .merge(callbacks::routes())
}
