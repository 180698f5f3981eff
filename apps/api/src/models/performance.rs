use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A stored interview evaluation. `scores` and `feedback` are JSONB documents.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InterviewPerformanceRow {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub answers: Vec<String>,
    pub full_evaluation: String,
    pub overall_score: i32,
    pub scores: Value,
    pub feedback: Value,
    pub performed_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPerformance {
    pub resume_id: Uuid,
    pub answers: Vec<String>,
    pub full_evaluation: String,
    pub overall_score: i32,
    pub scores: Value,
    pub feedback: Value,
}
