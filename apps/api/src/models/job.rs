#![allow(dead_code)]

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Sentinel shown for optional fields with no value.
pub const NOT_SPECIFIED: &str = "Not specified";

/// One job listing as crawled into the remote store.
///
/// Optional fields are genuinely optional in the source data (different
/// job boards expose different subsets); absence is modeled as `None`, never
/// as an empty string or a literal "NULL".
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub crawled_date: NaiveDate,
    pub job_url: String,
    pub job_url_direct: Option<String>,
    pub site: Option<String>,
    pub job_type: Option<String>,
    pub job_level: Option<String>,
    pub is_remote: Option<bool>,
    pub description: Option<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    pub currency: Option<String>,
    pub interval: Option<String>,
}

/// Canonical job type values offered as multi-select filter options.
pub const JOB_TYPES: [&str; 4] = ["Fulltime", "Contract", "Internship", "Parttime"];

/// Canonical experience level values offered as multi-select filter options.
pub const JOB_LEVELS: [&str; 5] = [
    "Entry level",
    "Associate",
    "Mid-Senior level",
    "Director",
    "Executive",
];

impl JobPosting {
    /// A crawled row is usable only if it names a company and carries a
    /// source URL; rows failing this are dropped during accumulation.
    pub fn is_valid(&self) -> bool {
        !self.company.trim().is_empty() && !self.job_url.trim().is_empty()
    }

    /// Job type title-cased for display ("contract" -> "Contract"), "N/A"
    /// when absent.
    pub fn display_job_type(&self) -> String {
        match self.job_type.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            None => "N/A".to_string(),
            Some(raw) => raw
                .split_whitespace()
                .map(title_case_word)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    pub fn display_job_level(&self) -> &str {
        self.job_level.as_deref().unwrap_or(NOT_SPECIFIED)
    }

    pub fn display_site(&self) -> &str {
        self.site.as_deref().unwrap_or("N/A")
    }

    /// Human-readable salary range. Rules carried over from the companies
    /// view: no amounts -> "Not Disclosed"; equal min/max collapse to one
    /// figure; missing interval defaults to "yr"; unknown currency codes are
    /// shown verbatim.
    pub fn display_salary(&self) -> String {
        let currency = self.currency.as_deref().unwrap_or("USD");
        let symbol = match currency {
            "USD" => "$",
            "INR" => "₹",
            "EUR" => "€",
            "GBP" => "£",
            other => other,
        };
        let interval = self.interval.as_deref().unwrap_or("yr");

        match (self.min_amount, self.max_amount) {
            (None, None) => "Not Disclosed".to_string(),
            (Some(min), Some(max)) if min == max => {
                format!("{symbol}{} / {interval}", thousands(min))
            }
            (Some(min), Some(max)) => {
                format!(
                    "{symbol}{} - {symbol}{} / {interval}",
                    thousands(min),
                    thousands(max)
                )
            }
            (Some(min), None) => format!("Min {symbol}{} / {interval}", thousands(min)),
            (None, Some(max)) => format!("Max {symbol}{} / {interval}", thousands(max)),
        }
    }
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Formats a salary amount with thousands separators ("120000" -> "120,000").
fn thousands(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if whole < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
