use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assessments::service::{
    create_assessment_with_recommendations, get_assessment_detail, get_user_assessment_history,
    run_prediction, AssessmentDetail, AssessmentSummary,
};
use crate::assessments::validation::{describe, validate_submission, AssessmentSubmission};
use crate::errors::AppError;
use crate::models::assessment::RecommendationRow;
use crate::prediction::models::{Assessment, PredictionResult};
use crate::prediction::predictor::PredictionStrategy;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Deserialize)]
pub struct SubmitAssessmentRequest {
    pub user_id: Uuid,
    #[serde(flatten)]
    pub submission: AssessmentSubmission,
}

#[derive(Serialize)]
pub struct SubmitAssessmentResponse {
    pub assessment_id: Uuid,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub recommendations: Vec<RecommendationRow>,
}

#[derive(Deserialize)]
pub struct PredictionRequest {
    #[serde(flatten)]
    pub submission: AssessmentSubmission,
    pub top_k: Option<usize>,
}

#[derive(Serialize)]
pub struct PredictionResponse {
    pub strategy: PredictionStrategy,
    pub recommendations: Vec<PredictionResult>,
}

fn validated(submission: AssessmentSubmission) -> Result<Assessment, AppError> {
    validate_submission(submission).map_err(|errors| AppError::Validation(describe(&errors)))
}

/// POST /api/v1/assessments
pub async fn handle_submit_assessment(
    State(state): State<AppState>,
    Json(req): Json<SubmitAssessmentRequest>,
) -> Result<(StatusCode, Json<SubmitAssessmentResponse>), AppError> {
    let assessment = validated(req.submission)?;
    let outcome = create_assessment_with_recommendations(
        &state.db,
        state.predictor.clone(),
        req.user_id,
        assessment,
        state.config.top_k,
    )
    .await?;

    let message = match outcome.error {
        Some(_) => "Assessment submitted but career prediction failed",
        None => "Assessment submitted successfully",
    };
    Ok((
        StatusCode::CREATED,
        Json(SubmitAssessmentResponse {
            assessment_id: outcome.assessment.id,
            message: message.to_string(),
            error: outcome.error,
            recommendations: outcome.recommendations,
        }),
    ))
}

/// GET /api/v1/assessments
pub async fn handle_assessment_history(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<AssessmentSummary>>, AppError> {
    Ok(Json(
        get_user_assessment_history(&state.db, params.user_id).await?,
    ))
}

/// GET /api/v1/assessments/:id
pub async fn handle_get_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<AssessmentDetail>, AppError> {
    Ok(Json(
        get_assessment_detail(&state.db, id, params.user_id).await?,
    ))
}

/// POST /api/v1/predictions
/// Ranks careers for a submission without storing anything.
pub async fn handle_preview_predictions(
    State(state): State<AppState>,
    Json(req): Json<PredictionRequest>,
) -> Result<Json<PredictionResponse>, AppError> {
    let assessment = validated(req.submission)?;
    let top_k = req.top_k.unwrap_or(state.config.top_k);
    if top_k == 0 {
        return Err(AppError::Validation("top_k: must be at least 1".to_string()));
    }

    let strategy = state.predictor.strategy();
    let recommendations = run_prediction(state.predictor.clone(), assessment, top_k).await?;
    Ok(Json(PredictionResponse {
        strategy,
        recommendations,
    }))
}
