use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssessmentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub education_level: String,
    pub work_style: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecommendationRow {
    pub id: Uuid,
    pub assessment_id: Uuid,
    pub career_name: String,
    pub match_score: f64,
    pub confidence_level: String,
    pub rank: i32,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub completeness_percent: f64,
    pub rationale: Option<Value>,
    pub created_at: DateTime<Utc>,
}
