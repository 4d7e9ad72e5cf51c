//! Thin client for the external resume-parsing service.
//!
//! Parsing and scoring happen entirely in the external service; this client
//! only ships the file and decodes the response. The keyword list it returns
//! feeds the job-matching rank (see `resume::keywords`).

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

/// Fixed score breakdown schema returned by the parser service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub contact_info: f64,
    pub structure: f64,
    pub experience: f64,
    pub keywords: f64,
    pub impact: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeScore {
    pub total: f64,
    pub breakdown: ScoreBreakdown,
}

/// Full parser response: the structured profile is passed through opaquely,
/// only score/feedback/keywords are consumed downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParsedResume {
    pub resume: Value,
    pub score: ResumeScore,
    #[serde(default)]
    pub feedback: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ResumeParserClient {
    http: reqwest::Client,
    base_url: String,
}

impl ResumeParserClient {
    pub fn new(base_url: String) -> Self {
        ResumeParserClient {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// POSTs the uploaded file as multipart form data and decodes the
    /// parser's JSON response.
    pub async fn parse(&self, file_name: String, data: Bytes) -> Result<ParsedResume, AppError> {
        let part = reqwest::multipart::Part::bytes(data.to_vec()).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(format!("{}/parse", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("resume parser unreachable: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "resume parser returned {}",
                response.status()
            )));
        }

        response
            .json::<ParsedResume>()
            .await
            .map_err(|e| AppError::Upstream(format!("malformed parser response: {e}")))
    }
}
