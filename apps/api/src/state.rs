use std::sync::Arc;

use crate::advice::engine::AdviceEngine;

/// Shared application state injected into all route handlers via Axum
/// extractors. The engine holds only immutable data and a cloneable HTTP
/// client, so concurrent requests share it without locks.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<AdviceEngine>,
}
