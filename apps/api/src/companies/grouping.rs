//! Grouping/aggregation stage: collapses a flat posting list into per-company
//! groups.
//!
//! A company can carry duplicate rows for the same job_url across crawl
//! passes, so counts are always over distinct job_urls; a raw row count
//! would overstate open positions.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::job::JobPosting;
use crate::search::normalize::fold;

/// Postings aggregated under one company name (case-sensitive as stored),
/// de-duplicated by job_url.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyGroup {
    pub name: String,
    pub jobs: Vec<JobPosting>,
}

/// Per-company distinct-posting count for the directory summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyStats {
    pub name: String,
    pub job_count: usize,
}

/// Groups postings by company. Within a group the first row seen for a
/// job_url wins; groups come back ordered by case-insensitive name.
pub fn group_by_company(jobs: &[JobPosting]) -> Vec<CompanyGroup> {
    let mut members: HashMap<&str, Vec<JobPosting>> = HashMap::new();
    let mut seen_urls: HashMap<&str, HashSet<&str>> = HashMap::new();

    for job in jobs.iter().filter(|j| j.is_valid()) {
        let urls = seen_urls.entry(&job.company).or_default();
        if urls.insert(&job.job_url) {
            members.entry(&job.company).or_default().push(job.clone());
        }
    }

    let mut groups: Vec<CompanyGroup> = members
        .into_iter()
        .map(|(name, jobs)| CompanyGroup {
            name: name.to_string(),
            jobs,
        })
        .collect();
    sort_by_name(&mut groups, |g| &g.name);
    groups
}

/// Distinct job_url count per company, same ordering as `group_by_company`.
pub fn company_stats(jobs: &[JobPosting]) -> Vec<CompanyStats> {
    let mut urls_by_company: HashMap<&str, HashSet<&str>> = HashMap::new();
    for job in jobs.iter().filter(|j| j.is_valid()) {
        urls_by_company
            .entry(&job.company)
            .or_default()
            .insert(&job.job_url);
    }

    let mut stats: Vec<CompanyStats> = urls_by_company
        .into_iter()
        .map(|(name, urls)| CompanyStats {
            name: name.to_string(),
            job_count: urls.len(),
        })
        .collect();
    sort_by_name(&mut stats, |s| &s.name);
    stats
}

fn sort_by_name<T>(items: &mut [T], name: impl Fn(&T) -> &str) {
    // Case-insensitive primary order; exact name as a deterministic tiebreak.
    items.sort_by(|a, b| {
        fold(name(a))
            .cmp(&fold(name(b)))
            .then_with(|| name(a).cmp(name(b)))
    });
}
