//! Reads and deletion of stored résumés.

use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::questions::normalize_questions;
use crate::models::resume::ResumeRow;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestResumeResponse {
    pub resume: ResumeRow,
    pub resume_id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestionsResponse {
    pub questions: Vec<String>,
    pub resume_id: Uuid,
}

pub fn parse_resume_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::Validation(format!("Invalid resume id: {raw}")))
}

pub async fn latest_resume(state: &AppState) -> Result<LatestResumeResponse, AppError> {
    let resume = state.store.latest_resume().await?.ok_or_else(no_resume)?;
    Ok(LatestResumeResponse {
        resume_id: resume.id,
        resume,
    })
}

/// Questions for `resume_id`, or for the most recent résumé when no id is given.
pub async fn interview_questions(
    state: &AppState,
    resume_id: Option<Uuid>,
) -> Result<InterviewQuestionsResponse, AppError> {
    let resume = match resume_id {
        Some(id) => state.store.find_resume(id).await?,
        None => state.store.latest_resume().await?,
    }
    .ok_or_else(no_resume)?;

    Ok(InterviewQuestionsResponse {
        questions: normalize_questions(&resume.interview_questions),
        resume_id: resume.id,
    })
}

/// Removes the stored document (if any) and then the record with its evaluations.
pub async fn delete_resume(state: &AppState, resume_id: Uuid) -> Result<(), AppError> {
    let resume = state
        .store
        .find_resume(resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    match (&state.storage, resume.storage_key.as_deref()) {
        (Some(storage), Some(key)) => storage.delete(key).await?,
        (None, Some(key)) => warn!(
            "Document storage is not configured; leaving {key} in place for resume {resume_id}"
        ),
        _ => {}
    }

    if !state.store.delete_resume(resume_id).await? {
        return Err(AppError::NotFound(format!("Resume {resume_id} not found")));
    }

    info!("Deleted resume {resume_id}");
    Ok(())
}

fn no_resume() -> AppError {
    AppError::NotFound("No resume found. Please submit a resume first".to_string())
}
