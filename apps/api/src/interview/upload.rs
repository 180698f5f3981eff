//! Multipart parsing and validation for résumé submissions.

use axum::{
    extract::multipart::{Multipart, MultipartError},
    http::StatusCode,
};
use bytes::Bytes;

use crate::errors::AppError;
use crate::models::resume::JobPreferences;

pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

pub const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

const RESUME_FIELD: &str = "resume";
const PREFERENCES_FIELD: &str = "jobPreferences";

#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

#[derive(Debug, Default)]
pub struct SubmissionForm {
    /// `None` when the request carried no file.
    pub resume: Option<ResumeUpload>,
    pub job_preferences: JobPreferences,
}

/// Reads the `resume` file and `jobPreferences` fields; other fields are ignored.
pub async fn read_submission_form(mut multipart: Multipart) -> Result<SubmissionForm, AppError> {
    let mut form = SubmissionForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, "Invalid multipart body"))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = media_type(field.content_type().unwrap_or_default());
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(e, "Could not read upload"))?;

                // Browsers send an empty, unnamed part when no file was chosen.
                if file_name.is_empty() && bytes.is_empty() {
                    continue;
                }

                validate_upload(&content_type, bytes.len())?;
                form.resume = Some(ResumeUpload {
                    file_name: if file_name.is_empty() {
                        "resume.pdf".to_string()
                    } else {
                        file_name
                    },
                    content_type,
                    bytes,
                });
            }
            Some(PREFERENCES_FIELD) => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| multipart_error(e, "Could not read jobPreferences"))?;
                form.job_preferences = parse_job_preferences(&raw)?;
            }
            _ => {}
        }
    }

    Ok(form)
}

pub fn validate_upload(content_type: &str, size: usize) -> Result<(), AppError> {
    if !ALLOWED_CONTENT_TYPES.contains(&content_type) {
        return Err(AppError::Validation(
            "Invalid file type. Only PDF and Word documents are allowed.".to_string(),
        ));
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(file_too_large());
    }
    Ok(())
}

fn file_too_large() -> AppError {
    AppError::Validation(format!(
        "File too large. Maximum size is {} MB.",
        MAX_UPLOAD_BYTES / (1024 * 1024)
    ))
}

/// A tripped request body limit reads as an oversized upload; anything else is a
/// malformed form.
fn multipart_error(error: MultipartError, context: &str) -> AppError {
    if error.status() == StatusCode::PAYLOAD_TOO_LARGE {
        file_too_large()
    } else {
        AppError::Validation(format!("{context}: {error}"))
    }
}

/// A missing or blank field means no preferences.
pub fn parse_job_preferences(raw: &str) -> Result<JobPreferences, AppError> {
    if raw.trim().is_empty() {
        return Ok(JobPreferences::default());
    }
    serde_json::from_str(raw)
        .map_err(|e| AppError::Validation(format!("Invalid jobPreferences JSON: {e}")))
}

/// Strips parameters such as `; charset=binary` and lower-cases the type.
fn media_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
