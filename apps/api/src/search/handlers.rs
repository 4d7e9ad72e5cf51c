use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::job::{JobPosting, JOB_LEVELS, JOB_TYPES};
use crate::search::filter::FilterState;
use crate::search::normalize::NormalizedJob;
use crate::search::sort::{sort_jobs, SortConfig, SortDirection, SortKey};
use crate::state::AppState;

const DEFAULT_PAGE_LIMIT: u64 = 100;

/// Query-string shape of a filtered job listing request. Multi-select
/// fields arrive comma-separated (`job_types=Contract,Internship`).
#[derive(Debug, Default, Deserialize)]
pub struct JobsQuery {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub job_types: String,
    #[serde(default)]
    pub job_levels: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub job_level: String,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub sort: Option<SortKey>,
    pub dir: Option<SortDirection>,
}

impl JobsQuery {
    pub fn filter_state(&self) -> FilterState {
        FilterState {
            query: self.query.clone(),
            location: self.location.clone(),
            job_types: split_csv(&self.job_types),
            job_levels: split_csv(&self.job_levels),
            job_type_query: self.job_type.clone(),
            job_level_query: self.job_level.clone(),
        }
    }
}

pub fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Keeps only postings passing the filter; the input snapshot is never
/// mutated.
pub fn apply_filter(jobs: &[JobPosting], filter: &FilterState) -> Vec<JobPosting> {
    if filter.is_empty() {
        return jobs.to_vec();
    }
    jobs.iter()
        .map(NormalizedJob::new)
        .filter(|normalized| filter.matches(normalized))
        .map(|normalized| normalized.job.clone())
        .collect()
}

#[derive(Debug, Serialize)]
pub struct FilterOptions {
    pub job_types: Vec<&'static str>,
    pub job_levels: Vec<&'static str>,
}

/// GET /api/v1/jobs/filters
/// Canonical multi-select options offered by the filter UI.
pub async fn handle_filter_options() -> Json<FilterOptions> {
    Json(FilterOptions {
        job_types: JOB_TYPES.to_vec(),
        job_levels: JOB_LEVELS.to_vec(),
    })
}

#[derive(Debug, Serialize)]
pub struct JobsResponse {
    pub count: usize,
    pub jobs: Vec<JobPosting>,
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobsQuery>,
) -> Result<Json<JobsResponse>, AppError> {
    let offset = params.offset.unwrap_or(0);
    let limit = params.limit.unwrap_or(DEFAULT_PAGE_LIMIT);

    let page = state.store.fetch_page(offset, limit).await?;
    let mut jobs = apply_filter(&page, &params.filter_state());

    if let Some(key) = params.sort {
        let config = SortConfig::new(key, params.dir.unwrap_or(SortDirection::Asc));
        jobs = sort_jobs(&jobs, &config);
    }

    Ok(Json(JobsResponse {
        count: jobs.len(),
        jobs,
    }))
}
