//! Keyword match rank: wires extracted resume keywords into the job list.
//!
//! A keyword counts once per posting when its folded form appears in the
//! title or description. Postings with zero matches are dropped from the
//! ranked result rather than shown with an empty score.

use serde::{Deserialize, Serialize};

use crate::models::job::JobPosting;
use crate::search::normalize::fold;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatch {
    pub matched_keywords: usize,
    pub job: JobPosting,
}

/// Number of resume keywords appearing in the posting's title or
/// description (folded substring match, each keyword counted once).
pub fn keyword_match_count(job: &JobPosting, keywords: &[String]) -> usize {
    let title = fold(&job.title);
    let description = job
        .description
        .as_deref()
        .map(fold)
        .unwrap_or_default();

    keywords
        .iter()
        .map(|kw| fold(kw))
        .filter(|kw| !kw.is_empty() && (title.contains(kw.as_str()) || description.contains(kw.as_str())))
        .count()
}

/// Ranks postings by descending match count, omitting zero-match postings.
/// The sort is stable, so ties keep store order (newest crawl first).
pub fn rank_by_keywords(jobs: &[JobPosting], keywords: &[String]) -> Vec<JobMatch> {
    let mut matches: Vec<JobMatch> = jobs
        .iter()
        .filter_map(|job| {
            let matched_keywords = keyword_match_count(job, keywords);
            (matched_keywords > 0).then(|| JobMatch {
                matched_keywords,
                job: job.clone(),
            })
        })
        .collect();

    matches.sort_by(|a, b| b.matched_keywords.cmp(&a.matched_keywords));
    matches
}
