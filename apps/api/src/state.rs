use std::sync::Arc;

use crate::interview::parser::EvaluationParser;
use crate::llm_client::LanguageModel;
use crate::storage::DocumentStorage;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// Every collaborator is created once at startup and shared for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ResumeStore>,
    /// `None` when no S3 bucket is configured; uploads are then not kept.
    pub storage: Option<Arc<dyn DocumentStorage>>,
    pub llm: Arc<dyn LanguageModel>,
    /// Pluggable transcript parser. Default: RegexEvaluationParser.
    pub parser: Arc<dyn EvaluationParser>,
}
