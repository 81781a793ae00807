mod advice;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advice::engine::{AdviceEngine, RemoteAdvisor};
use crate::advice::knowledge::KnowledgeBase;
use crate::advice::topics::Topic;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae API v{}", env!("CARGO_PKG_VERSION"));

    // Parse the embedded knowledge base once; it is immutable from here on.
    let kb = KnowledgeBase::embedded()?;
    info!("Knowledge base loaded ({} topics)", Topic::ALL.len());

    // The remote advisor is optional; without a key the engine answers
    // from the knowledge base alone.
    let remote: Option<Arc<dyn RemoteAdvisor>> = match config.anthropic_api_key.clone() {
        Some(key) => {
            info!("Remote advisor enabled (model: {})", llm_client::MODEL);
            Some(Arc::new(LlmClient::new(key)))
        }
        None => {
            info!("ANTHROPIC_API_KEY not set — serving knowledge-base answers only");
            None
        }
    };

    let engine = Arc::new(AdviceEngine::new(kb, remote));

    let state = AppState { engine };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
