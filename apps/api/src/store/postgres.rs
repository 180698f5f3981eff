use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::performance::{InterviewPerformanceRow, NewPerformance};
use crate::models::resume::{NewResume, ResumeRow};
use crate::store::ResumeStore;

#[derive(Clone)]
pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn insert_resume(&self, resume: NewResume) -> Result<ResumeRow, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO resumes
                (id, file_name, file_url, storage_key, job_preferences, interview_questions)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&resume.file_name)
        .bind(&resume.file_url)
        .bind(&resume.storage_key)
        .bind(&resume.job_preferences)
        .bind(&resume.interview_questions)
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted resume {} ({})", row.id, row.file_name);
        Ok(row)
    }

    async fn find_resume(&self, id: Uuid) -> Result<Option<ResumeRow>, AppError> {
        Ok(
            sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn latest_resume(&self) -> Result<Option<ResumeRow>, AppError> {
        Ok(sqlx::query_as::<_, ResumeRow>(
            "SELECT * FROM resumes ORDER BY submitted_at DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn delete_resume(&self, id: Uuid) -> Result<bool, AppError> {
        // interview_performances rows go with it via ON DELETE CASCADE
        let result = sqlx::query("DELETE FROM resumes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_performance(
        &self,
        performance: NewPerformance,
    ) -> Result<InterviewPerformanceRow, AppError> {
        let row = sqlx::query_as::<_, InterviewPerformanceRow>(
            r#"
            INSERT INTO interview_performances
                (id, resume_id, answers, full_evaluation, overall_score, scores, feedback)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(performance.resume_id)
        .bind(&performance.answers)
        .bind(&performance.full_evaluation)
        .bind(performance.overall_score)
        .bind(&performance.scores)
        .bind(&performance.feedback)
        .fetch_one(&self.pool)
        .await?;

        info!(
            "Recorded interview performance {} for resume {}",
            row.id, row.resume_id
        );
        Ok(row)
    }
}
