//! Postgres-backed `JobStore` over the crawled `jobs` table. All queries are
//! read-only; the table is owned by the crawler, not this service.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::store::JobStore;

// Numeric columns are cast to float8 so rows decode without a decimal crate.
const JOB_COLUMNS: &str = "id::text AS id, title, company, location, crawled_date, job_url, \
     job_url_direct, site, job_type, job_level, is_remote, description, \
     min_amount::float8 AS min_amount, max_amount::float8 AS max_amount, currency, interval";

#[derive(Debug, Clone)]
pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    pub fn new(pool: PgPool) -> Self {
        PgJobStore { pool }
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn fetch_page(&self, offset: u64, limit: u64) -> Result<Vec<JobPosting>, AppError> {
        let sql = format!(
            "SELECT {JOB_COLUMNS} FROM jobs ORDER BY crawled_date DESC, id OFFSET $1 LIMIT $2"
        );
        let jobs = sqlx::query_as::<_, JobPosting>(&sql)
            .bind(offset as i64)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?;
        Ok(jobs)
    }

    async fn search_company(
        &self,
        pattern: &str,
        limit: u64,
    ) -> Result<Vec<JobPosting>, AppError> {
        let sql = format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE company ILIKE $1 \
             ORDER BY crawled_date DESC LIMIT $2"
        );
        let jobs = sqlx::query_as::<_, JobPosting>(&sql)
            .bind(format!("%{pattern}%"))
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?;
        Ok(jobs)
    }

    async fn company_jobs(&self, name: &str) -> Result<Vec<JobPosting>, AppError> {
        // ILIKE without wildcards: exact name, case-insensitive.
        let sql = format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE company ILIKE $1 ORDER BY crawled_date DESC"
        );
        let jobs = sqlx::query_as::<_, JobPosting>(&sql)
            .bind(name)
            .fetch_all(&self.pool)
            .await?;
        Ok(jobs)
    }
}
