mod assessments;
mod careers;
mod config;
mod db;
mod errors;
mod models;
mod prediction;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::careers::catalog::seed_career_details;
use crate::config::Config;
use crate::db::create_pool;
use crate::prediction::build_predictor;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerLens API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    seed_career_details(&db).await?;

    // Initialize career predictor (swap via PREDICTION_STRATEGY)
    let predictor = build_predictor(
        config.prediction_strategy,
        &config.artifact_dir,
        config.artifact_cache,
    )
    .with_context(|| {
        format!(
            "Failed to load model artifacts from {}",
            config.artifact_dir.display()
        )
    })?;
    info!(
        "Career predictor: {} (top {})",
        predictor.strategy(),
        config.top_k
    );

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        predictor,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the frontend host once it is deployed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
