pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::advice::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/advice", post(handlers::handle_advice))
        .route("/api/v1/advice/topics", get(handlers::handle_list_topics))
        .route(
            "/api/v1/advice/topics/:topic",
            get(handlers::handle_topic_detail),
        )
        .with_state(state)
}
