use std::sync::Arc;

use crate::resume::client::ResumeParserClient;
use crate::store::JobStore;

/// Shared application state injected into all route handlers via Axum
/// extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only job store. `PgJobStore` in production; tests swap in
    /// `MemoryStore` without touching handler code.
    pub store: Arc<dyn JobStore>,
    pub resume_parser: ResumeParserClient,
}
