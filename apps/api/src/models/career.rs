use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerDetailRow {
    pub id: Uuid,
    pub career_name: String,
    pub description: String,
    pub requirements: Value,
    pub salary_info: Value,
    pub job_growth: String,
    pub work_environment: String,
    pub learning_resources: Option<Value>,
    pub related_careers: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
