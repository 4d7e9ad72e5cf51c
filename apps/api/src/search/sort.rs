#![allow(dead_code)]

//! Sort stage: non-destructive, stable ordering over a fixed set of posting
//! fields. Null values sort as the empty string; string comparison is
//! case-insensitive.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::job::JobPosting;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Title,
    Company,
    Location,
    CrawledDate,
    JobType,
    JobLevel,
    Site,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        SortConfig { key, direction }
    }

    /// Header-click semantics: clicking the active key flips ascending to
    /// descending (and back); clicking a different key resets to ascending.
    pub fn toggle(current: Option<SortConfig>, key: SortKey) -> SortConfig {
        match current {
            Some(config) if config.key == key && config.direction == SortDirection::Asc => {
                SortConfig::new(key, SortDirection::Desc)
            }
            _ => SortConfig::new(key, SortDirection::Asc),
        }
    }
}

/// Returns a newly ordered copy; the input is left untouched. `Vec::sort_by`
/// is stable, so equal keys keep their relative input order.
pub fn sort_jobs(jobs: &[JobPosting], config: &SortConfig) -> Vec<JobPosting> {
    let mut sorted = jobs.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, config.key);
        match config.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

fn compare_by_key(a: &JobPosting, b: &JobPosting, key: SortKey) -> Ordering {
    match key {
        SortKey::Title => fold_cmp(&a.title, &b.title),
        SortKey::Company => fold_cmp(&a.company, &b.company),
        SortKey::Location => fold_cmp(&a.location, &b.location),
        SortKey::CrawledDate => a.crawled_date.cmp(&b.crawled_date),
        SortKey::JobType => opt_cmp(a.job_type.as_deref(), b.job_type.as_deref()),
        SortKey::JobLevel => opt_cmp(a.job_level.as_deref(), b.job_level.as_deref()),
        SortKey::Site => opt_cmp(a.site.as_deref(), b.site.as_deref()),
    }
}

fn fold_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn opt_cmp(a: Option<&str>, b: Option<&str>) -> Ordering {
    fold_cmp(a.unwrap_or(""), b.unwrap_or(""))
}
