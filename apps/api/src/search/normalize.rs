//! Normalization stage: case-folded views of a posting used for matching.
//!
//! Display copies keep their original casing (see `models::job`); matching
//! always runs over folded text. Absent optional fields fold to the empty
//! string so absence never matches a non-empty filter term.

use crate::models::job::JobPosting;

/// Trims and lowercases a matching term. Idempotent.
pub fn fold(s: &str) -> String {
    s.trim().to_lowercase()
}

/// A posting with its matchable fields folded once, so a filter pass does
/// not re-lowercase per predicate.
#[derive(Debug)]
pub struct NormalizedJob<'a> {
    pub job: &'a JobPosting,
    pub title: String,
    pub location: String,
    pub job_type: String,
    pub job_level: String,
}

impl<'a> NormalizedJob<'a> {
    pub fn new(job: &'a JobPosting) -> Self {
        NormalizedJob {
            job,
            title: fold(&job.title),
            location: fold(&job.location),
            job_type: fold(job.job_type.as_deref().unwrap_or("")),
            job_level: fold(job.job_level.as_deref().unwrap_or("")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn posting(title: &str, job_type: Option<&str>) -> JobPosting {
        JobPosting {
            id: "j1".to_string(),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "  Pune, India ".to_string(),
            crawled_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            job_url: "https://jobs.example/j1".to_string(),
            job_url_direct: None,
            site: None,
            job_type: job_type.map(str::to_string),
            job_level: None,
            is_remote: None,
            description: None,
            min_amount: None,
            max_amount: None,
            currency: None,
            interval: None,
        }
    }

    #[test]
    fn test_fold_trims_and_lowercases() {
        assert_eq!(fold("  Software Engineer "), "software engineer");
    }

    #[test]
    fn test_fold_is_idempotent() {
        let once = fold("  MiXeD Case  ");
        assert_eq!(fold(&once), once);
    }

    #[test]
    fn test_absent_fields_fold_to_empty() {
        let job = posting("Engineer", None);
        let normalized = NormalizedJob::new(&job);
        assert_eq!(normalized.job_type, "");
        assert_eq!(normalized.job_level, "");
    }

    #[test]
    fn test_fields_folded_for_matching() {
        let job = posting("  Software Engineer ", Some("Fulltime"));
        let normalized = NormalizedJob::new(&job);
        assert_eq!(normalized.title, "software engineer");
        assert_eq!(normalized.location, "pune, india");
        assert_eq!(normalized.job_type, "fulltime");
    }
}
