//! Browsable job and internship lists with client-side filtering.

#[cfg(test)]
#[path = "listings_test.rs"]
mod listings_test;

use crate::net::types::{Internship, Job};

/// Job board state: the full backend list plus load status. Filtering
/// happens client-side over `items`.
#[derive(Clone, Debug, Default)]
pub struct JobsState {
    pub items: Vec<Job>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Internship board state, same shape as [`JobsState`].
#[derive(Clone, Debug, Default)]
pub struct InternshipsState {
    pub items: Vec<Internship>,
    pub loading: bool,
    pub error: Option<String>,
}

fn type_matches(actual: &str, wanted: &str) -> bool {
    wanted.is_empty() || wanted == "all" || actual.eq_ignore_ascii_case(wanted)
}

/// Filter jobs by free-text search, location substring, and work type.
///
/// Matching is case-insensitive; an empty filter (or `"all"` for the work
/// type) passes everything through.
pub fn filter_jobs(items: &[Job], search: &str, location: &str, work_type: &str) -> Vec<Job> {
    let search = search.trim().to_lowercase();
    let location = location.trim().to_lowercase();
    items
        .iter()
        .filter(|job| {
            (search.is_empty()
                || job.title.to_lowercase().contains(&search)
                || job.company.to_lowercase().contains(&search)
                || job.description.to_lowercase().contains(&search))
                && (location.is_empty() || job.location.to_lowercase().contains(&location))
                && type_matches(&job.job_type, work_type)
        })
        .cloned()
        .collect()
}

/// Filter internships with the same rules as [`filter_jobs`].
pub fn filter_internships(
    items: &[Internship],
    search: &str,
    location: &str,
    work_type: &str,
) -> Vec<Internship> {
    let search = search.trim().to_lowercase();
    let location = location.trim().to_lowercase();
    items
        .iter()
        .filter(|internship| {
            (search.is_empty()
                || internship.title.to_lowercase().contains(&search)
                || internship.company.to_lowercase().contains(&search)
                || internship.description.to_lowercase().contains(&search))
                && (location.is_empty()
                    || internship.location.to_lowercase().contains(&location))
                && type_matches(&internship.internship_type, work_type)
        })
        .cloned()
        .collect()
}
