use std::sync::Arc;

use crate::config::Config;
use crate::export::capture::SurfaceCapture;
use crate::llm_client::ModelBackend;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Backend for the AI gateway. Default: `LlmClient`.
    pub llm: Arc<dyn ModelBackend>,
    /// Rasterizer for exports. Default: `CommandCapture`.
    pub capture: Arc<dyn SurfaceCapture>,
    pub config: Config,
}
