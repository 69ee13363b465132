use super::*;

fn sample_jobs() -> Vec<Job> {
    vec![
        Job {
            id: "j1".to_owned(),
            title: "Backend Engineer".to_owned(),
            company: "Acme".to_owned(),
            description: "Rust services".to_owned(),
            location: "Berlin, Germany".to_owned(),
            job_type: "remote".to_owned(),
            ..Job::default()
        },
        Job {
            id: "j2".to_owned(),
            title: "Data Analyst".to_owned(),
            company: "Beta Corp".to_owned(),
            description: "SQL dashboards".to_owned(),
            location: "Munich, Germany".to_owned(),
            job_type: "onsite".to_owned(),
            ..Job::default()
        },
    ]
}

#[test]
fn listing_states_default_empty() {
    let jobs = JobsState::default();
    assert!(jobs.items.is_empty());
    assert!(!jobs.loading);
    assert!(jobs.error.is_none());

    let internships = InternshipsState::default();
    assert!(internships.items.is_empty());
    assert!(!internships.loading);
}

#[test]
fn empty_filters_pass_everything() {
    let jobs = sample_jobs();
    assert_eq!(filter_jobs(&jobs, "", "", "").len(), 2);
    assert_eq!(filter_jobs(&jobs, "  ", "", "all").len(), 2);
}

#[test]
fn search_matches_title_company_and_description() {
    let jobs = sample_jobs();
    assert_eq!(filter_jobs(&jobs, "backend", "", "")[0].id, "j1");
    assert_eq!(filter_jobs(&jobs, "BETA", "", "")[0].id, "j2");
    assert_eq!(filter_jobs(&jobs, "rust", "", "")[0].id, "j1");
    assert!(filter_jobs(&jobs, "kubernetes", "", "").is_empty());
}

#[test]
fn location_filter_is_substring_match() {
    let jobs = sample_jobs();
    assert_eq!(filter_jobs(&jobs, "", "berlin", "")[0].id, "j1");
    assert_eq!(filter_jobs(&jobs, "", "germany", "").len(), 2);
}

#[test]
fn work_type_filter_is_exact_unless_all() {
    let jobs = sample_jobs();
    assert_eq!(filter_jobs(&jobs, "", "", "remote")[0].id, "j1");
    assert_eq!(filter_jobs(&jobs, "", "", "all").len(), 2);
    assert!(filter_jobs(&jobs, "", "", "hybrid").is_empty());
}

#[test]
fn filters_combine_conjunctively() {
    let jobs = sample_jobs();
    assert_eq!(filter_jobs(&jobs, "engineer", "germany", "remote").len(), 1);
    assert!(filter_jobs(&jobs, "engineer", "germany", "onsite").is_empty());
}

#[test]
fn internship_filter_uses_internship_type() {
    let internships = vec![Internship {
        id: "i1".to_owned(),
        title: "ML Intern".to_owned(),
        company: "Acme".to_owned(),
        internship_type: "hybrid".to_owned(),
        location: "Remote".to_owned(),
        ..Internship::default()
    }];

    assert_eq!(filter_internships(&internships, "ml", "", "hybrid").len(), 1);
    assert!(filter_internships(&internships, "ml", "", "onsite").is_empty());
}
