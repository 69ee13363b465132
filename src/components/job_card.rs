//! Card rendering one job posting.

use leptos::prelude::*;

use crate::net::types::Job;

fn salary_range(min: Option<i64>, max: Option<i64>) -> Option<String> {
    match (min, max) {
        (Some(min), Some(max)) => Some(format!("${min} - ${max}")),
        (Some(min), None) => Some(format!("From ${min}")),
        (None, Some(max)) => Some(format!("Up to ${max}")),
        (None, None) => None,
    }
}

/// One job posting with skills, work type, and salary details.
#[component]
pub fn JobCard(job: Job) -> impl IntoView {
    let Job {
        title,
        company,
        description,
        required_skills,
        experience_required,
        location,
        job_type,
        salary_min,
        salary_max,
        external_url,
        source,
        ..
    } = job;

    let salary = salary_range(salary_min, salary_max);
    let meta = [location, job_type, experience_required]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" | ");

    let skill_chips = required_skills
        .into_iter()
        .map(|skill| view! { <span class="chip">{skill}</span> })
        .collect::<Vec<_>>();
    let has_skills = !skill_chips.is_empty();

    let description_row = (!description.is_empty())
        .then(move || view! { <p class="job-card__description">{description}</p> });
    let source_tag =
        (!source.is_empty()).then(move || view! { <span class="job-card__source">{source}</span> });
    let link_row = (!external_url.is_empty()).then(move || {
        view! {
            <a class="job-card__link" href=external_url target="_blank" rel="noreferrer">
                "View posting"
            </a>
        }
    });

    view! {
        <div class="job-card">
            <div class="job-card__header">
                <div>
                    <h3 class="job-card__title">{title}</h3>
                    <p class="job-card__company">{company}</p>
                </div>
                {salary.map(|salary| view! { <span class="job-card__salary">{salary}</span> })}
            </div>
            {(!meta.is_empty()).then(move || view! { <p class="job-card__meta">{meta}</p> })}
            {description_row}
            {has_skills
                .then(move || {
                    view! { <div class="job-card__skills">{skill_chips}</div> }
                })}
            <div class="job-card__footer">
                {source_tag}
                {link_row}
            </div>
        </div>
    }
}
