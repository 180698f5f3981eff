//! Evaluation parsing: pluggable, trait-based strategy that turns a model transcript
//! into `ExtractedFeedback`.
//!
//! Default: `RegexEvaluationParser` (section markers + regex, deterministic).
//! A structured-output backend can replace it without touching the orchestrator.
//!
//! `AppState` holds an `Arc<dyn EvaluationParser>`.

use async_trait::async_trait;

use crate::interview::extract::{extract_feedback, ExtractedFeedback};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implementations must not fail: missing structure degrades to defaults.
#[async_trait]
pub trait EvaluationParser: Send + Sync {
    async fn parse(&self, transcript: &str) -> ExtractedFeedback;

    /// Short backend name, logged with each evaluation.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// RegexEvaluationParser: default implementation
// ────────────────────────────────────────────────────────────────────────────

pub struct RegexEvaluationParser;

#[async_trait]
impl EvaluationParser for RegexEvaluationParser {
    async fn parse(&self, transcript: &str) -> ExtractedFeedback {
        extract_feedback(transcript)
    }

    fn backend(&self) -> &'static str {
        "regex"
    }
}
