use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::prediction::predictor::CareerPredictor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable career predictor, chosen once at startup via PREDICTION_STRATEGY.
    pub predictor: Arc<dyn CareerPredictor>,
}
