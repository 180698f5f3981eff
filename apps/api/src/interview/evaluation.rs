//! Full-interview evaluation: stored questions + answers → model transcript →
//! extracted feedback and scores → persisted performance record.

use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::extract::DetailedFeedback;
use crate::interview::prompts::build_evaluation_prompt;
use crate::interview::scoring::ScoreCard;
use crate::models::performance::NewPerformance;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullInterviewRequest {
    pub resume_id: String,
    #[serde(default)]
    pub answers: Vec<String>,
}

/// Composite evaluation returned to the client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewEvaluation {
    pub full_evaluation: String,
    pub overall_score: u32,
    #[serde(flatten)]
    pub scores: ScoreCard,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub detailed_feedback: DetailedFeedback,
}

pub async fn evaluate_interview(
    state: &AppState,
    resume_id: Uuid,
    answers: Vec<String>,
) -> Result<InterviewEvaluation, AppError> {
    let resume = state
        .store
        .find_resume(resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    let prompt = build_evaluation_prompt(&resume.interview_questions, &answers);
    let full_evaluation = state
        .llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Interview evaluation failed: {e}")))?;

    let feedback = state.parser.parse(&full_evaluation).await;
    let scores = ScoreCard::from_feedback(&feedback.detailed_feedback);

    let evaluation = InterviewEvaluation {
        full_evaluation,
        overall_score: feedback.overall_score,
        scores,
        strengths: feedback.strengths,
        improvements: feedback.improvements,
        detailed_feedback: feedback.detailed_feedback,
    };

    let record = state
        .store
        .insert_performance(performance_record(resume_id, answers, &evaluation)?)
        .await?;

    info!(
        "Evaluated interview for resume {} (parser: {}, overall: {}, record: {})",
        resume_id,
        state.parser.backend(),
        evaluation.overall_score,
        record.id
    );

    Ok(evaluation)
}

fn performance_record(
    resume_id: Uuid,
    answers: Vec<String>,
    evaluation: &InterviewEvaluation,
) -> Result<NewPerformance, AppError> {
    let scores = serde_json::to_value(evaluation.scores).map_err(|e| AppError::Internal(e.into()))?;
    Ok(NewPerformance {
        resume_id,
        answers,
        full_evaluation: evaluation.full_evaluation.clone(),
        overall_score: evaluation.overall_score as i32,
        scores,
        feedback: json!({
            "strengths": evaluation.strengths,
            "improvements": evaluation.improvements,
            "detailedFeedback": evaluation.detailed_feedback,
        }),
    })
}
