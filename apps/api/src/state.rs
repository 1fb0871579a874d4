use crate::config::Config;
use crate::feedback::FeedbackEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Feedback pipeline. Holds the process-wide grammar checker, built once at startup.
    pub engine: FeedbackEngine,
}
