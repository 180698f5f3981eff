// Interview Engine
// Implements: résumé submission, question generation, transcript extraction,
// keyword scoring and evaluation persistence.
// All LLM calls go through llm_client; no direct Gemini calls here.

pub mod evaluation;
pub mod extract;
pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod questions;
pub mod resumes;
pub mod scoring;
pub mod submission;
pub mod upload;
