//! Record store: persistence seam for résumés and interview evaluations.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`; production uses `PgResumeStore`,
//! tests use the in-memory store.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::performance::{InterviewPerformanceRow, NewPerformance};
use crate::models::resume::{NewResume, ResumeRow};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgResumeStore;

#[async_trait]
pub trait ResumeStore: Send + Sync {
    async fn insert_resume(&self, resume: NewResume) -> Result<ResumeRow, AppError>;

    async fn find_resume(&self, id: Uuid) -> Result<Option<ResumeRow>, AppError>;

    /// The most recently submitted résumé, if any.
    async fn latest_resume(&self) -> Result<Option<ResumeRow>, AppError>;

    /// Returns `false` when no record with `id` existed.
    async fn delete_resume(&self, id: Uuid) -> Result<bool, AppError>;

    async fn insert_performance(
        &self,
        performance: NewPerformance,
    ) -> Result<InterviewPerformanceRow, AppError>;
}
