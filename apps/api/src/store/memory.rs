//! In-memory `ResumeStore` used by router and orchestrator tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::performance::{InterviewPerformanceRow, NewPerformance};
use crate::models::resume::{NewResume, ResumeRow};
use crate::store::ResumeStore;

#[derive(Default)]
pub struct MemoryResumeStore {
    resumes: Mutex<Vec<ResumeRow>>,
    performances: Mutex<Vec<InterviewPerformanceRow>>,
}

impl MemoryResumeStore {
    pub fn performances(&self) -> Vec<InterviewPerformanceRow> {
        self.performances.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResumeStore for MemoryResumeStore {
    async fn insert_resume(&self, resume: NewResume) -> Result<ResumeRow, AppError> {
        let mut resumes = self.resumes.lock().unwrap();
        // Keep submitted_at strictly increasing so "latest" is deterministic.
        let submitted_at = Utc::now() + Duration::milliseconds(resumes.len() as i64);
        let row = ResumeRow {
            id: Uuid::new_v4(),
            file_name: resume.file_name,
            file_url: resume.file_url,
            storage_key: resume.storage_key,
            job_preferences: resume.job_preferences,
            interview_questions: resume.interview_questions,
            submitted_at,
        };
        resumes.push(row.clone());
        Ok(row)
    }

    async fn find_resume(&self, id: Uuid) -> Result<Option<ResumeRow>, AppError> {
        Ok(self
            .resumes
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn latest_resume(&self) -> Result<Option<ResumeRow>, AppError> {
        Ok(self
            .resumes
            .lock()
            .unwrap()
            .iter()
            .max_by_key(|r| r.submitted_at)
            .cloned())
    }

    async fn delete_resume(&self, id: Uuid) -> Result<bool, AppError> {
        let mut resumes = self.resumes.lock().unwrap();
        let before = resumes.len();
        resumes.retain(|r| r.id != id);
        let deleted = resumes.len() < before;
        if deleted {
            self.performances
                .lock()
                .unwrap()
                .retain(|p| p.resume_id != id);
        }
        Ok(deleted)
    }

    async fn insert_performance(
        &self,
        performance: NewPerformance,
    ) -> Result<InterviewPerformanceRow, AppError> {
        let row = InterviewPerformanceRow {
            id: Uuid::new_v4(),
            resume_id: performance.resume_id,
            answers: performance.answers,
            full_evaluation: performance.full_evaluation,
            overall_score: performance.overall_score,
            scores: performance.scores,
            feedback: performance.feedback,
            performed_at: Utc::now(),
        };
        self.performances.lock().unwrap().push(row.clone());
        Ok(row)
    }
}
