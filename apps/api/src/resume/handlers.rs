use axum::extract::{Multipart, Query, State};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::resume::client::ParsedResume;
use crate::resume::keywords::{rank_by_keywords, JobMatch};
use crate::search::handlers::split_csv;
use crate::state::AppState;
use crate::store::{fetch_all, FETCH_PAGE_SIZE};

/// POST /api/v1/resumes/parse
///
/// Accepts a multipart upload and forwards it to the external parser
/// service; the response (profile, score breakdown, feedback, keywords) is
/// passed through as-is.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParsedResume>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("unreadable upload: {e}")))?;
            let parsed = state.resume_parser.parse(file_name, data).await?;
            return Ok(Json(parsed));
        }
    }

    Err(AppError::Validation("missing 'file' field".to_string()))
}

#[derive(Debug, Deserialize)]
pub struct MatchQuery {
    /// Comma-separated resume keywords, as extracted by the parser service.
    pub keywords: String,
}

/// GET /api/v1/jobs/match
///
/// Ranks the current snapshot by resume-keyword match count; zero-match
/// postings are omitted.
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    Query(params): Query<MatchQuery>,
) -> Result<Json<Vec<JobMatch>>, AppError> {
    let keywords = split_csv(&params.keywords);
    if keywords.is_empty() {
        return Err(AppError::Validation(
            "at least one keyword is required".to_string(),
        ));
    }

    let jobs = fetch_all(state.store.as_ref(), FETCH_PAGE_SIZE).await?;
    Ok(Json(rank_by_keywords(&jobs, &keywords)))
}
