#![allow(dead_code)]

//! In-memory `JobStore` for tests and local development, mirroring the
//! ordering and matching semantics of the Postgres backend.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::search::normalize::fold;
use crate::store::JobStore;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    jobs: Vec<JobPosting>,
}

impl MemoryStore {
    pub fn new(jobs: Vec<JobPosting>) -> Self {
        MemoryStore { jobs }
    }

    fn ordered(&self) -> Vec<JobPosting> {
        let mut jobs = self.jobs.clone();
        jobs.sort_by(|a, b| b.crawled_date.cmp(&a.crawled_date));
        jobs
    }
}

#[async_trait]
impl JobStore for MemoryStore {
    async fn fetch_page(&self, offset: u64, limit: u64) -> Result<Vec<JobPosting>, AppError> {
        Ok(self
            .ordered()
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn search_company(
        &self,
        pattern: &str,
        limit: u64,
    ) -> Result<Vec<JobPosting>, AppError> {
        let pattern = fold(pattern);
        Ok(self
            .ordered()
            .into_iter()
            .filter(|job| fold(&job.company).contains(&pattern))
            .take(limit as usize)
            .collect())
    }

    async fn company_jobs(&self, name: &str) -> Result<Vec<JobPosting>, AppError> {
        Ok(self
            .ordered()
            .into_iter()
            .filter(|job| job.company.eq_ignore_ascii_case(name))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn posting(id: &str, company: &str, day: u32) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            title: "Engineer".to_string(),
            company: company.to_string(),
            location: "Pune".to_string(),
            crawled_date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
            job_url: format!("https://jobs.example/{id}"),
            job_url_direct: None,
            site: None,
            job_type: None,
            job_level: None,
            is_remote: None,
            description: None,
            min_amount: None,
            max_amount: None,
            currency: None,
            interval: None,
        }
    }

    #[tokio::test]
    async fn test_search_company_is_case_insensitive_substring() {
        let store = MemoryStore::new(vec![
            posting("1", "Acme Corp", 1),
            posting("2", "Beta Labs", 1),
        ]);
        let hits = store.search_company("acme", 100).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].company, "Acme Corp");
    }

    #[tokio::test]
    async fn test_pages_come_back_newest_first() {
        let store = MemoryStore::new(vec![posting("old", "Acme", 1), posting("new", "Acme", 20)]);
        let page = store.fetch_page(0, 10).await.unwrap();
        assert_eq!(page[0].id, "new");
    }

    #[tokio::test]
    async fn test_company_jobs_matches_exact_name_ignoring_case() {
        let store = MemoryStore::new(vec![
            posting("1", "Acme", 1),
            posting("2", "Acme Corp", 1),
        ]);
        let jobs = store.company_jobs("acme").await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].company, "Acme");
    }
}
