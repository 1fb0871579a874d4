mod config;
mod errors;
mod extract;
mod feedback;
mod grammar;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::feedback::FeedbackEngine;
use crate::grammar::LanguageToolChecker;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Critic v{}", env!("CARGO_PKG_VERSION"));

    // Grammar checker is expensive to set up; build it once and share it
    let checker = LanguageToolChecker::new(
        config.languagetool_url.clone(),
        config.languagetool_language.clone(),
        config.grammar_timeout_secs,
    )?;
    info!(
        "Grammar checker initialized ({} via {})",
        checker.language(),
        config.languagetool_url
    );

    let engine = FeedbackEngine::new(
        Arc::new(checker),
        Duration::from_secs(config.grammar_timeout_secs),
    );

    let state = AppState {
        config: config.clone(),
        engine,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the upload page has a fixed host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
