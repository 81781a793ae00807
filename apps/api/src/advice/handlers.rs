//! Axum route handlers for the Advice API.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::advice::formatting;
use crate::advice::topics::Topic;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AdviceRequest {
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub data: String,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct TopicSummary {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<TopicSummary>,
}

#[derive(Debug, Serialize)]
pub struct TopicDetailResponse {
    pub key: &'static str,
    pub label: &'static str,
    pub data: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/advice
///
/// Answers a free-text resume question. Always succeeds: the engine falls
/// back internally, so this handler has no error path of its own. The query
/// is not validated; an empty string flows through to the generic tips.
pub async fn handle_advice(
    State(state): State<AppState>,
    Json(request): Json<AdviceRequest>,
) -> Json<AdviceResponse> {
    let advice = state.engine.advise(&request.query).await;

    info!(source = ?advice.source, chars = advice.text.len(), "advice served");

    Json(AdviceResponse {
        data: advice.text,
        success: true,
    })
}

/// GET /api/v1/advice/topics
///
/// The nine-topic taxonomy, for the UI's suggestion chips.
pub async fn handle_list_topics() -> Json<TopicsResponse> {
    Json(TopicsResponse {
        topics: Topic::ALL
            .into_iter()
            .map(|topic| TopicSummary {
                key: topic.key(),
                label: topic.label(),
            })
            .collect(),
    })
}

/// GET /api/v1/advice/topics/:topic
///
/// Renders one topic's block directly, for the UI's category pages.
pub async fn handle_topic_detail(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<TopicDetailResponse>, AppError> {
    let topic = Topic::from_key(&key)
        .ok_or_else(|| AppError::NotFound(format!("Unknown advice topic '{key}'")))?;

    let data = formatting::topic(state.engine.knowledge(), topic, None);

    Ok(Json(TopicDetailResponse {
        key: topic.key(),
        label: topic.label(),
        data,
    }))
}
