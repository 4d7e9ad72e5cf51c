//! Filter predicate engine: one boolean predicate per posting, AND across
//! fields, OR within a multi-select field.

use serde::{Deserialize, Serialize};

use crate::search::normalize::{fold, NormalizedJob};

/// Ephemeral, UI-owned filter state. Empty/whitespace-only text means
/// "no filter" for that field, never "match nothing".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Free-text query matched against the title.
    pub query: String,
    /// Free-text query matched against the location.
    pub location: String,
    /// Selected job types (multi-select). When non-empty, takes precedence
    /// over `job_type_query`.
    pub job_types: Vec<String>,
    /// Selected experience levels (multi-select).
    pub job_levels: Vec<String>,
    /// Single-text fallback for interfaces without a job-type multi-select.
    pub job_type_query: String,
    /// Single-text fallback for the experience level.
    pub job_level_query: String,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        fold(&self.query).is_empty()
            && fold(&self.location).is_empty()
            && fold(&self.job_type_query).is_empty()
            && fold(&self.job_level_query).is_empty()
            && self.job_types.iter().all(|t| fold(t).is_empty())
            && self.job_levels.iter().all(|l| fold(l).is_empty())
    }

    /// True iff every active predicate passes. An all-empty filter is the
    /// identity: it accepts every record.
    pub fn matches(&self, job: &NormalizedJob<'_>) -> bool {
        contains_or_pass(&job.title, &self.query)
            && contains_or_pass(&job.location, &self.location)
            && multi_select_matches(&self.job_types, &self.job_type_query, &job.job_type)
            && multi_select_matches(&self.job_levels, &self.job_level_query, &job.job_level)
    }
}

/// Substring predicate over folded text; an empty query always passes.
fn contains_or_pass(value: &str, query: &str) -> bool {
    let query = fold(query);
    query.is_empty() || value.contains(&query)
}

/// Multi-select membership: if any selections are active, the value must
/// contain at least one of them (OR within the field). With no selections the
/// single-text fallback query applies; with neither the field passes.
fn multi_select_matches(selected: &[String], fallback: &str, value: &str) -> bool {
    let terms: Vec<String> = selected
        .iter()
        .map(|s| fold(s))
        .filter(|s| !s.is_empty())
        .collect();

    if !terms.is_empty() {
        return terms.iter().any(|t| value.contains(t.as_str()));
    }
    contains_or_pass(value, fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::JobPosting;
    use chrono::NaiveDate;

    fn posting(
        title: &str,
        location: &str,
        job_type: Option<&str>,
        job_level: Option<&str>,
    ) -> JobPosting {
        JobPosting {
            id: title.to_string(),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: location.to_string(),
            crawled_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            job_url: format!("https://jobs.example/{title}"),
            job_url_direct: None,
            site: None,
            job_type: job_type.map(str::to_string),
            job_level: job_level.map(str::to_string),
            is_remote: None,
            description: None,
            min_amount: None,
            max_amount: None,
            currency: None,
            interval: None,
        }
    }

    fn matches(filter: &FilterState, job: &JobPosting) -> bool {
        filter.matches(&NormalizedJob::new(job))
    }

    #[test]
    fn test_empty_filter_accepts_everything() {
        let filter = FilterState::default();
        let jobs = [
            posting("Software Engineer", "Pune", Some("Fulltime"), None),
            posting("Sales Rep", "Remote", None, Some("Entry level")),
        ];
        for job in &jobs {
            assert!(matches(&filter, job));
        }
    }

    #[test]
    fn test_title_query_filters_by_substring() {
        let filter = FilterState {
            query: "engineer".to_string(),
            ..Default::default()
        };
        assert!(matches(
            &filter,
            &posting("Software Engineer", "Pune", None, None)
        ));
        assert!(!matches(&filter, &posting("Sales Rep", "Pune", None, None)));
    }

    #[test]
    fn test_whitespace_only_query_is_no_filter() {
        let filter = FilterState {
            query: "   ".to_string(),
            location: " \t".to_string(),
            ..Default::default()
        };
        assert!(matches(&filter, &posting("Sales Rep", "Pune", None, None)));
    }

    #[test]
    fn test_multi_select_is_or_within_field() {
        let filter = FilterState {
            job_types: vec!["Contract".to_string(), "Internship".to_string()],
            ..Default::default()
        };
        assert!(matches(
            &filter,
            &posting("Engineer", "Pune", Some("contract"), None)
        ));
        assert!(matches(
            &filter,
            &posting("Engineer", "Pune", Some("internship"), None)
        ));
        assert!(!matches(
            &filter,
            &posting("Engineer", "Pune", Some("fulltime"), None)
        ));
    }

    #[test]
    fn test_selection_beats_fallback_query() {
        let filter = FilterState {
            job_types: vec!["Contract".to_string()],
            job_type_query: "fulltime".to_string(),
            ..Default::default()
        };
        assert!(!matches(
            &filter,
            &posting("Engineer", "Pune", Some("fulltime"), None)
        ));
    }

    #[test]
    fn test_fallback_query_applies_without_selections() {
        let filter = FilterState {
            job_level_query: "senior".to_string(),
            ..Default::default()
        };
        assert!(matches(
            &filter,
            &posting("Engineer", "Pune", None, Some("Mid-Senior level"))
        ));
        assert!(!matches(
            &filter,
            &posting("Engineer", "Pune", None, Some("Entry level"))
        ));
    }

    #[test]
    fn test_absent_field_never_matches_active_term() {
        let filter = FilterState {
            job_types: vec!["Fulltime".to_string()],
            ..Default::default()
        };
        assert!(!matches(&filter, &posting("Engineer", "Pune", None, None)));
    }

    #[test]
    fn test_fields_combine_with_and() {
        let filter = FilterState {
            query: "engineer".to_string(),
            location: "pune".to_string(),
            ..Default::default()
        };
        assert!(matches(
            &filter,
            &posting("Software Engineer", "Pune, India", None, None)
        ));
        assert!(!matches(
            &filter,
            &posting("Software Engineer", "Delhi", None, None)
        ));
    }

    #[test]
    fn test_is_empty_ignores_whitespace_selections() {
        let filter = FilterState {
            job_types: vec!["  ".to_string()],
            ..Default::default()
        };
        assert!(filter.is_empty());
    }
}
