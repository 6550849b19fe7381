use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::GenerativeModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup and never mutated; every request gets a clone.
#[derive(Clone)]
pub struct AppState {
    /// The generative oracle behind every analysis call. Trait object so
    /// tests can swap in a canned model with no network access.
    pub oracle: Arc<dyn GenerativeModel>,
    pub config: Config,
}
