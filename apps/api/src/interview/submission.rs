//! Résumé submission: upload → text extraction → question generation → storage →
//! persistence.

use bytes::Bytes;
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::prompts::build_question_prompt;
use crate::interview::questions::parse_questions;
use crate::interview::upload::{ResumeUpload, SubmissionForm};
use crate::models::resume::NewResume;
use crate::state::AppState;
use crate::storage::StoredDocument;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResumeResponse {
    pub message: String,
    pub resume_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
    pub questions: Vec<String>,
}

pub async fn submit_resume(
    state: &AppState,
    form: SubmissionForm,
) -> Result<SubmitResumeResponse, AppError> {
    let upload = form
        .resume
        .ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;

    let resume_text = extract_resume_text(upload.bytes.clone()).await?;

    let prompt = build_question_prompt(&resume_text, &form.job_preferences);
    let reply = state
        .llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Question generation failed: {e}")))?;
    let questions = parse_questions(&reply);
    info!(
        "Generated {} interview questions for {}",
        questions.len(),
        upload.file_name
    );

    let stored = store_document(state, &upload).await?;

    let job_preferences = serde_json::to_value(&form.job_preferences)
        .map_err(|e| AppError::Internal(e.into()))?;

    let inserted = state
        .store
        .insert_resume(NewResume {
            file_name: upload.file_name.clone(),
            file_url: stored.as_ref().map(|d| d.url.clone()),
            storage_key: stored.as_ref().map(|d| d.key.clone()),
            job_preferences,
            interview_questions: questions.clone(),
        })
        .await;

    let record = match inserted {
        Ok(record) => record,
        Err(e) => {
            discard_document(state, stored.as_ref()).await;
            return Err(e);
        }
    };

    Ok(SubmitResumeResponse {
        message: "Resume submitted successfully".to_string(),
        resume_id: record.id,
        file_url: record.file_url,
        questions,
    })
}

/// Extracts PDF text on a blocking thread. Any failure, including a panic inside
/// the PDF parser, is reported as an unparseable upload.
async fn extract_resume_text(bytes: Bytes) -> Result<String, AppError> {
    let extracted =
        tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)).await;

    match extracted {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => {
            warn!("PDF parsing error: {e:?}");
            Err(AppError::Validation("Could not parse PDF file".to_string()))
        }
        Err(e) => {
            warn!("PDF parsing aborted: {e}");
            Err(AppError::Validation("Could not parse PDF file".to_string()))
        }
    }
}

async fn store_document(
    state: &AppState,
    upload: &ResumeUpload,
) -> Result<Option<StoredDocument>, AppError> {
    let Some(storage) = &state.storage else {
        return Ok(None);
    };
    let key = storage_key(&upload.file_name, Utc::now().timestamp_millis());
    let stored = storage
        .upload(&key, upload.bytes.clone(), &upload.content_type)
        .await?;
    Ok(Some(stored))
}

/// Best-effort removal of a document whose record could not be saved.
async fn discard_document(state: &AppState, stored: Option<&StoredDocument>) {
    if let (Some(storage), Some(doc)) = (&state.storage, stored) {
        if let Err(e) = storage.delete(&doc.key).await {
            warn!("Failed to remove orphaned document {}: {e}", doc.key);
        }
    }
}

/// `resumes/resume_<millis>_<id>.<ext>`, keeping only a plain alphanumeric extension.
fn storage_key(file_name: &str, millis: i64) -> String {
    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty() && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_else(|| "pdf".to_string());
    format!(
        "resumes/resume_{}_{}.{}",
        millis,
        Uuid::new_v4().simple(),
        extension
    )
}
