use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::companies::grouping::{company_stats, group_by_company, CompanyGroup, CompanyStats};
use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::search::handlers::{apply_filter, JobsQuery};
use crate::search::normalize::fold;
use crate::state::AppState;
use crate::store::{fetch_all, FETCH_PAGE_SIZE, SEARCH_RESULT_LIMIT};

/// GET /api/v1/companies
///
/// Global directory summary: accumulates the whole table and reports one
/// distinct-posting count per company, independent of any active filters.
pub async fn handle_company_summary(
    State(state): State<AppState>,
) -> Result<Json<Vec<CompanyStats>>, AppError> {
    let jobs = fetch_all(state.store.as_ref(), FETCH_PAGE_SIZE).await?;
    Ok(Json(company_stats(&jobs)))
}

#[derive(Debug, Deserialize)]
pub struct CompanySearchQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /api/v1/companies/search
///
/// Query-specific view: fresh fetch scoped to the search term, grouped with
/// de-duplicated members. A blank term short-circuits to an empty result
/// without touching the store.
pub async fn handle_search_companies(
    State(state): State<AppState>,
    Query(params): Query<CompanySearchQuery>,
) -> Result<Json<Vec<CompanyGroup>>, AppError> {
    if fold(&params.q).is_empty() {
        return Ok(Json(vec![]));
    }

    let jobs = state
        .store
        .search_company(params.q.trim(), SEARCH_RESULT_LIMIT)
        .await?;
    Ok(Json(group_by_company(&jobs)))
}

#[derive(Debug, Serialize)]
pub struct CompanyJobsResponse {
    pub company: String,
    /// All postings for the company, before filtering.
    pub total: usize,
    /// Postings passing the active filters.
    pub matching: usize,
    pub jobs: Vec<JobPosting>,
}

/// GET /api/v1/companies/{name}
///
/// Company detail view: full posting list with the same filter engine the
/// jobs listing uses, plus total/matching counts for the header line.
pub async fn handle_company_jobs(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<JobsQuery>,
) -> Result<Json<CompanyJobsResponse>, AppError> {
    let all = state.store.company_jobs(&name).await?;
    if all.is_empty() {
        return Err(AppError::NotFound(format!("No postings for '{name}'")));
    }

    let jobs = apply_filter(&all, &params.filter_state());
    Ok(Json(CompanyJobsResponse {
        company: name,
        total: all.len(),
        matching: jobs.len(),
        jobs,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::client::ResumeParserClient;
    use crate::store::memory::MemoryStore;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn posting(id: &str, company: &str, title: &str) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            location: "Pune".to_string(),
            crawled_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
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

    fn state_with(jobs: Vec<JobPosting>) -> AppState {
        AppState {
            store: Arc::new(MemoryStore::new(jobs)),
            resume_parser: ResumeParserClient::new("http://localhost:9".to_string()),
        }
    }

    #[tokio::test]
    async fn test_summary_reports_deduplicated_counts() {
        let mut duplicate = posting("dup", "Acme", "Engineer");
        duplicate.job_url = "https://jobs.example/a1".to_string();
        let mut original = posting("a1", "Acme", "Engineer");
        original.job_url = "https://jobs.example/a1".to_string();

        let state = state_with(vec![original, duplicate, posting("b1", "Beta", "Analyst")]);
        let Json(stats) = handle_company_summary(State(state)).await.unwrap();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].name, "Acme");
        assert_eq!(stats[0].job_count, 1);
    }

    #[tokio::test]
    async fn test_blank_search_returns_empty_without_fetching() {
        let state = state_with(vec![posting("a1", "Acme", "Engineer")]);
        let Json(groups) = handle_search_companies(
            State(state),
            Query(CompanySearchQuery {
                q: "   ".to_string(),
            }),
        )
        .await
        .unwrap();
        assert!(groups.is_empty());
    }

    #[tokio::test]
    async fn test_company_detail_reports_total_and_matching() {
        let state = state_with(vec![
            posting("a1", "Acme", "Software Engineer"),
            posting("a2", "Acme", "Sales Rep"),
        ]);
        let params = JobsQuery {
            query: "engineer".to_string(),
            ..Default::default()
        };
        let Json(response) =
            handle_company_jobs(State(state), Path("Acme".to_string()), Query(params))
                .await
                .unwrap();
        assert_eq!(response.total, 2);
        assert_eq!(response.matching, 1);
        assert_eq!(response.jobs[0].title, "Software Engineer");
    }

    #[tokio::test]
    async fn test_unknown_company_is_not_found() {
        let state = state_with(vec![posting("a1", "Acme", "Engineer")]);
        let result = handle_company_jobs(
            State(state),
            Path("Nowhere Inc".to_string()),
            Query(JobsQuery::default()),
        )
        .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
