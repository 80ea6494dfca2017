pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/keywords", post(handlers::handle_keywords))
        .route("/api/v1/preview", post(handlers::handle_preview))
        .route("/api/v1/resumes", post(handlers::handle_build))
        .with_state(state)
}
