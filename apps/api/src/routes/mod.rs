pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::companies::handlers as company_handlers;
use crate::resume::handlers as resume_handlers;
use crate::search::handlers as search_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs API
        .route("/api/v1/jobs", get(search_handlers::handle_list_jobs))
        .route(
            "/api/v1/jobs/match",
            get(resume_handlers::handle_match_jobs),
        )
        .route(
            "/api/v1/jobs/filters",
            get(search_handlers::handle_filter_options),
        )
        // Companies API
        .route(
            "/api/v1/companies",
            get(company_handlers::handle_company_summary),
        )
        .route(
            "/api/v1/companies/search",
            get(company_handlers::handle_search_companies),
        )
        .route(
            "/api/v1/companies/:name",
            get(company_handlers::handle_company_jobs),
        )
        // Resume API
        .route(
            "/api/v1/resumes/parse",
            post(resume_handlers::handle_parse_resume),
        )
        .with_state(state)
}
