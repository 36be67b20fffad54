pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessments::handlers as assessments;
use crate::careers::handlers as careers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessments
        .route(
            "/api/v1/assessments",
            post(assessments::handle_submit_assessment).get(assessments::handle_assessment_history),
        )
        .route("/api/v1/assessments/:id", get(assessments::handle_get_assessment))
        .route(
            "/api/v1/predictions",
            post(assessments::handle_preview_predictions),
        )
        // Career catalogue
        .route("/api/v1/careers", get(careers::handle_list_careers))
        .route("/api/v1/careers/:name", get(careers::handle_get_career))
        .with_state(state)
}
