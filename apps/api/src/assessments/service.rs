use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::{json, Value};
use sqlx::PgPool;
use tracing::{error, info};
use uuid::Uuid;

use crate::careers::reference::find_career;
use crate::errors::AppError;
use crate::models::assessment::{AssessmentRow, RecommendationRow};
use crate::prediction::models::{Assessment, PredictionResult};
use crate::prediction::predictor::{CareerPredictor, PredictionError, PredictionStrategy};

/// Result of one submission. `error` is set when prediction failed; the
/// assessment is still stored but carries no recommendations.
#[derive(Debug)]
pub struct AssessmentOutcome {
    pub assessment: AssessmentRow,
    pub recommendations: Vec<RecommendationRow>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TopRecommendation {
    pub career_name: String,
    pub match_score: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummary {
    pub id: Uuid,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub education_level: String,
    pub work_style: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub top_recommendation: Option<TopRecommendation>,
    pub recommendations_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentDetail {
    #[serde(flatten)]
    pub assessment: AssessmentRow,
    pub recommendations: Vec<RecommendationRow>,
}

/// Runs the predictor off the async runtime; prediction is CPU-only.
pub async fn run_prediction(
    predictor: Arc<dyn CareerPredictor>,
    assessment: Assessment,
    top_k: usize,
) -> Result<Vec<PredictionResult>, PredictionError> {
    tokio::task::spawn_blocking(move || predictor.predict(&assessment, top_k))
        .await
        .map_err(|e| PredictionError::Aborted(e.to_string()))?
}

/// What to persist once the predictor has run: the ranked results, or the
/// failure message when there are none to store.
#[derive(Debug)]
pub enum PredictionStep {
    Store(Vec<PredictionResult>),
    Skip(String),
}

impl PredictionStep {
    pub fn from_result(result: Result<Vec<PredictionResult>, PredictionError>) -> Self {
        match result {
            Ok(predictions) => PredictionStep::Store(predictions),
            Err(e) => PredictionStep::Skip(e.to_string()),
        }
    }
}

/// Stores the assessment, ranks careers for it and stores the ranking.
///
/// Everything is written in one transaction. A prediction failure is not an
/// error here: the assessment is committed alone and the outcome carries the
/// failure message with an empty recommendation list. A failed insert rolls
/// the assessment back with it, so a recommendation set is never partial.
pub async fn create_assessment_with_recommendations(
    pool: &PgPool,
    predictor: Arc<dyn CareerPredictor>,
    user_id: Uuid,
    assessment: Assessment,
    top_k: usize,
) -> Result<AssessmentOutcome, AppError> {
    let mut tx = pool.begin().await?;

    let row: AssessmentRow = sqlx::query_as(
        r#"
        INSERT INTO assessments (id, user_id, skills, interests, education_level, work_style)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&assessment.skills)
    .bind(&assessment.interests)
    .bind(&assessment.education)
    .bind(&assessment.work_style)
    .fetch_one(&mut *tx)
    .await?;

    let strategy = predictor.strategy();
    let result = run_prediction(predictor, assessment.clone(), top_k).await;
    let predictions = match PredictionStep::from_result(result) {
        PredictionStep::Store(predictions) => predictions,
        PredictionStep::Skip(message) => {
            error!("Prediction failed for assessment {}: {message}", row.id);
            tx.commit().await?;
            info!("Created assessment {} for user {user_id} without recommendations", row.id);
            return Ok(AssessmentOutcome {
                assessment: row,
                recommendations: vec![],
                error: Some(message),
            });
        }
    };

    let mut recommendations = Vec::with_capacity(predictions.len());
    for prediction in &predictions {
        let rec: RecommendationRow = sqlx::query_as(
            r#"
            INSERT INTO recommendations
                (id, assessment_id, career_name, match_score, confidence_level, rank,
                 matching_skills, missing_skills, completeness_percent, rationale)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(row.id)
        .bind(&prediction.career_name)
        .bind(prediction.match_score)
        .bind(prediction.confidence_level.as_str())
        .bind(prediction.rank as i32)
        .bind(&prediction.matching_skills)
        .bind(&prediction.missing_skills)
        .bind(prediction.completeness_percent)
        .bind(build_rationale(&assessment, &prediction.career_name, strategy))
        .fetch_one(&mut *tx)
        .await?;
        recommendations.push(rec);
    }
    tx.commit().await?;

    info!(
        "Created assessment {} for user {user_id} with {} recommendations ({strategy} strategy)",
        row.id,
        recommendations.len()
    );

    Ok(AssessmentOutcome {
        assessment: row,
        recommendations,
        error: None,
    })
}

/// Explains a recommendation. Education and work-style matches are checked
/// against the career's reference requirements, `null` when the career has
/// none on file.
pub fn build_rationale(
    assessment: &Assessment,
    career_name: &str,
    strategy: PredictionStrategy,
) -> Value {
    let reference = find_career(career_name);
    let education_match = reference.map(|c| {
        c.education
            .iter()
            .any(|e| e.eq_ignore_ascii_case(&assessment.education))
    });
    let work_style_match = reference.map(|c| {
        let preferred = assessment.work_style.to_lowercase();
        c.work_styles
            .iter()
            .any(|w| preferred.starts_with(&w.to_lowercase()))
    });

    let mut rationale = json!({
        "interests_alignment": assessment.interests,
        "education_match": education_match,
        "work_style_match": work_style_match,
    });
    if strategy == PredictionStrategy::Mock {
        rationale["note"] = json!("Mock data - trained model not in use");
    }
    rationale
}

/// All assessments for a user, newest first, with their top recommendation.
pub async fn get_user_assessment_history(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<AssessmentSummary>, AppError> {
    let assessments: Vec<AssessmentRow> = sqlx::query_as(
        "SELECT * FROM assessments WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    let ids: Vec<Uuid> = assessments.iter().map(|a| a.id).collect();
    let recommendations: Vec<RecommendationRow> = sqlx::query_as(
        "SELECT * FROM recommendations WHERE assessment_id = ANY($1) ORDER BY assessment_id, rank",
    )
    .bind(&ids)
    .fetch_all(pool)
    .await?;

    Ok(summarize_history(assessments, &recommendations))
}

pub fn summarize_history(
    assessments: Vec<AssessmentRow>,
    recommendations: &[RecommendationRow],
) -> Vec<AssessmentSummary> {
    let mut by_assessment: HashMap<Uuid, Vec<&RecommendationRow>> = HashMap::new();
    for rec in recommendations {
        by_assessment.entry(rec.assessment_id).or_default().push(rec);
    }

    assessments
        .into_iter()
        .map(|a| {
            let recs = by_assessment.get(&a.id).map(Vec::as_slice).unwrap_or(&[]);
            let top_recommendation = recs
                .iter()
                .find(|r| r.rank == 1)
                .map(|r| TopRecommendation {
                    career_name: r.career_name.clone(),
                    match_score: r.match_score,
                });
            AssessmentSummary {
                id: a.id,
                skills: a.skills,
                interests: a.interests,
                education_level: a.education_level,
                work_style: a.work_style,
                created_at: a.created_at,
                top_recommendation,
                recommendations_count: recs.len(),
            }
        })
        .collect()
}

/// One assessment with its ranked recommendations. Only the owner may read it.
pub async fn get_assessment_detail(
    pool: &PgPool,
    assessment_id: Uuid,
    user_id: Uuid,
) -> Result<AssessmentDetail, AppError> {
    let assessment: Option<AssessmentRow> =
        sqlx::query_as("SELECT * FROM assessments WHERE id = $1")
            .bind(assessment_id)
            .fetch_optional(pool)
            .await?;

    let assessment = check_access(assessment, assessment_id, user_id)?;

    let recommendations: Vec<RecommendationRow> = sqlx::query_as(
        "SELECT * FROM recommendations WHERE assessment_id = $1 ORDER BY rank",
    )
    .bind(assessment_id)
    .fetch_all(pool)
    .await?;

    Ok(AssessmentDetail {
        assessment,
        recommendations,
    })
}

/// Only the owner may read an assessment; a missing one is `NotFound`.
pub fn check_access(
    assessment: Option<AssessmentRow>,
    assessment_id: Uuid,
    user_id: Uuid,
) -> Result<AssessmentRow, AppError> {
    let assessment = assessment
        .ok_or_else(|| AppError::NotFound(format!("Assessment {assessment_id} not found")))?;
    if assessment.user_id != user_id {
        return Err(AppError::Forbidden);
    }
    Ok(assessment)
}
