mod config;
mod errors;
mod export;
mod models;
mod parsing;
mod routes;
mod search;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::parsing::parse_paths;
use crate::parsing::skills::SKILL_VOCABULARY;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config.clone())?;

    // One-shot mode: `resume-api <file>...` prints the parsed records as JSON.
    let paths: Vec<String> = std::env::args().skip(1).collect();
    if !paths.is_empty() {
        let records = parse_paths(&state.parser, &paths);
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    info!(
        "Parser ready: {} vocabulary skills, phone pattern {}",
        SKILL_VOCABULARY.len(),
        config.phone_pattern.as_deref().unwrap_or("default (IN mobile)")
    );
    info!(
        "Exports go to '{}', up to {} files per batch",
        config.export_dir.display(),
        config.max_files
    );

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
