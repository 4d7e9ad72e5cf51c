//! Remote fetch adapter: read-only, paged access to the hosted jobs table.
//!
//! Handlers and tests depend on the `JobStore` trait, never on a concrete
//! backend; `AppState` carries an `Arc<dyn JobStore>` swapped at startup.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::job::JobPosting;

/// Page size used when accumulating the whole table.
pub const FETCH_PAGE_SIZE: u64 = 1000;

/// Cap applied to company-search fetches, matching the store-side limit the
/// search view has always used.
pub const SEARCH_RESULT_LIMIT: u64 = 1000;

#[async_trait]
pub trait JobStore: Send + Sync {
    /// Ranged ordered select: newest crawl first.
    async fn fetch_page(&self, offset: u64, limit: u64) -> Result<Vec<JobPosting>, AppError>;

    /// Substring match on company name (case-insensitive), newest first.
    async fn search_company(
        &self,
        pattern: &str,
        limit: u64,
    ) -> Result<Vec<JobPosting>, AppError>;

    /// All postings for one company (case-insensitive exact name), newest
    /// first.
    async fn company_jobs(&self, name: &str) -> Result<Vec<JobPosting>, AppError>;
}

/// Accumulates pages until a page shorter than `page_size` signals
/// end-of-data. Invalid rows (no company or no job_url) are skipped. Any
/// fetch error aborts the whole accumulation and pages gathered so far are
/// discarded rather than partially rendered.
pub async fn fetch_all(
    store: &dyn JobStore,
    page_size: u64,
) -> Result<Vec<JobPosting>, AppError> {
    let mut all = Vec::new();
    let mut offset = 0;

    loop {
        let page = store.fetch_page(offset, page_size).await?;
        let fetched = page.len() as u64;
        all.extend(page.into_iter().filter(JobPosting::is_valid));

        if fetched < page_size {
            break;
        }
        offset += page_size;
    }

    Ok(all)
}
