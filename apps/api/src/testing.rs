//! Test doubles for the state seams: canned model, recording storage, in-memory store.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::AppError;
use crate::interview::parser::RegexEvaluationParser;
use crate::llm_client::{LanguageModel, LlmError};
use crate::state::AppState;
use crate::storage::{DocumentStorage, StoredDocument};
use crate::store::memory::MemoryResumeStore;

pub const SAMPLE_EVALUATION: &str = "\
Overall Performance Score: 82/100

Technical Skills Assessment:
Strong grasp of async Rust.

Communication Skills:
Excellent clarity.

Problem-Solving Approach:
Solid, methodical approach.

Key Strengths:
- Clear communicator
- Strong technical depth

Areas for Improvement:
- Needs more examples

Detailed Feedback:
Ready for a senior role.";

/// Returns a fixed reply (or a fixed failure) and remembers every prompt.
#[derive(Clone)]
pub struct StubModel {
    reply: Option<String>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl StubModel {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            prompts: Arc::default(),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            prompts: Arc::default(),
        }
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LanguageModel for StubModel {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().ok_or(LlmError::Api {
            status: 503,
            message: "model unavailable".to_string(),
        })
    }
}

#[derive(Default)]
pub struct RecordingStorage {
    keys: Mutex<Vec<String>>,
    deleted: Mutex<Vec<String>>,
}

impl RecordingStorage {
    pub fn keys(&self) -> Vec<String> {
        self.keys.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentStorage for RecordingStorage {
    async fn upload(
        &self,
        key: &str,
        _body: Bytes,
        _content_type: &str,
    ) -> Result<StoredDocument, AppError> {
        self.keys.lock().unwrap().push(key.to_string());
        Ok(StoredDocument {
            key: key.to_string(),
            url: format!("http://storage.test/{key}"),
        })
    }

    async fn delete(&self, key: &str) -> Result<(), AppError> {
        self.deleted.lock().unwrap().push(key.to_string());
        Ok(())
    }
}

/// State with an empty in-memory store, no document storage and the regex parser.
pub fn test_state(model: StubModel) -> (AppState, Arc<MemoryResumeStore>) {
    let store = Arc::new(MemoryResumeStore::default());
    let state = AppState {
        store: store.clone(),
        storage: None,
        llm: Arc::new(model),
        parser: Arc::new(RegexEvaluationParser),
    };
    (state, store)
}
