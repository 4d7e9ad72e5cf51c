mod companies;
mod config;
mod db;
mod errors;
mod models;
mod resume;
mod routes;
mod search;
mod state;
mod store;
mod view;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::resume::client::ResumeParserClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::postgres::PgJobStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (panics on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Cloud API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL-backed job store
    let pool = create_pool(&config.database_url).await?;
    let store = Arc::new(PgJobStore::new(pool));
    info!("Job store initialized");

    // Initialize resume parser client
    let resume_parser = ResumeParserClient::new(config.resume_parser_url.clone());
    info!("Resume parser client initialized ({})", config.resume_parser_url);

    // Build app state
    let state = AppState {
        store,
        resume_parser,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
