//! Axum route handlers for the résumé / interview API.

use axum::{
    extract::{
        multipart::MultipartRejection, rejection::JsonRejection, Multipart, Path, State,
    },
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::errors::AppError;
use crate::interview::evaluation::{evaluate_interview, FullInterviewRequest, InterviewEvaluation};
use crate::interview::resumes::{
    delete_resume, interview_questions, latest_resume, parse_resume_id,
    InterviewQuestionsResponse, LatestResumeResponse,
};
use crate::interview::submission::{submit_resume, SubmitResumeResponse};
use crate::interview::upload::read_submission_form;
use crate::state::AppState;

/// POST /api/resume/submit-resume
///
/// Multipart upload: `resume` file plus optional `jobPreferences` JSON string.
/// A request that is not multipart at all carries no file.
pub async fn handle_submit_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<SubmitResumeResponse>, AppError> {
    let multipart = multipart.map_err(|e| {
        debug!("Rejected non-multipart submission: {e}");
        AppError::Validation("No file uploaded".to_string())
    })?;
    let form = read_submission_form(multipart).await?;
    Ok(Json(submit_resume(&state, form).await?))
}

/// POST /api/resume/latest-resume
pub async fn handle_latest_resume(
    State(state): State<AppState>,
) -> Result<Json<LatestResumeResponse>, AppError> {
    Ok(Json(latest_resume(&state).await?))
}

/// GET /api/resume/interview-questions
pub async fn handle_latest_interview_questions(
    State(state): State<AppState>,
) -> Result<Json<InterviewQuestionsResponse>, AppError> {
    Ok(Json(interview_questions(&state, None).await?))
}

/// GET /api/resume/interview-questions/:resume_id
pub async fn handle_interview_questions(
    State(state): State<AppState>,
    Path(resume_id): Path<String>,
) -> Result<Json<InterviewQuestionsResponse>, AppError> {
    let resume_id = parse_resume_id(&resume_id)?;
    Ok(Json(interview_questions(&state, Some(resume_id)).await?))
}

/// POST /api/resume/submit-full-interview
pub async fn handle_submit_full_interview(
    State(state): State<AppState>,
    request: Result<Json<FullInterviewRequest>, JsonRejection>,
) -> Result<Json<InterviewEvaluation>, AppError> {
    let Json(request) = request.map_err(|e| AppError::Validation(e.body_text()))?;
    let resume_id = parse_resume_id(&request.resume_id)?;
    Ok(Json(
        evaluate_interview(&state, resume_id, request.answers).await?,
    ))
}

/// DELETE /api/resume/:resume_id
pub async fn handle_delete_resume(
    State(state): State<AppState>,
    Path(resume_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let resume_id = parse_resume_id(&resume_id)?;
    delete_resume(&state, resume_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
