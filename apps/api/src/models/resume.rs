use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;
use uuid::Uuid;

/// Job preferences submitted alongside a résumé upload.
/// Known keys are typed; anything else the client sends is kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub desired_locations: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRow {
    pub id: Uuid,
    pub file_name: String,
    pub file_url: Option<String>,
    pub storage_key: Option<String>,
    pub job_preferences: Value,
    pub interview_questions: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

/// Fields supplied when a résumé record is created; id and timestamp are assigned
/// by the store.
#[derive(Debug, Clone)]
pub struct NewResume {
    pub file_name: String,
    pub file_url: Option<String>,
    pub storage_key: Option<String>,
    pub job_preferences: Value,
    pub interview_questions: Vec<String>,
}
