use std::sync::Arc;

use crate::tagger::EntityTagger;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Shared HTTP client for resume document fetches.
    pub http: reqwest::Client,
    /// Process-wide entity tagger handle. Built once at startup and reused
    /// across requests — never reloaded per call.
    pub tagger: Arc<dyn EntityTagger>,
}
