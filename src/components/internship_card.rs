//! Card rendering one internship posting.

use leptos::prelude::*;

use crate::net::types::Internship;

fn stipend_range(min: Option<i64>, max: Option<i64>) -> Option<String> {
    match (min, max) {
        (Some(min), Some(max)) => Some(format!("${min} - ${max} / month")),
        (Some(min), None) => Some(format!("From ${min} / month")),
        (None, Some(max)) => Some(format!("Up to ${max} / month")),
        (None, None) => None,
    }
}

/// One internship posting with duration, stipend, and eligibility details.
#[component]
pub fn InternshipCard(internship: Internship) -> impl IntoView {
    let Internship {
        title,
        company,
        description,
        required_skills,
        duration_months,
        stipend_min,
        stipend_max,
        location,
        internship_type,
        education_required,
        year_of_study,
        external_url,
        ..
    } = internship;

    let stipend = stipend_range(stipend_min, stipend_max);
    let duration = (duration_months > 0).then(|| format!("{duration_months} months"));
    let meta = [location, internship_type]
        .into_iter()
        .chain(duration)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" | ");
    let eligibility = [education_required, year_of_study]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    let skill_chips = required_skills
        .into_iter()
        .map(|skill| view! { <span class="chip">{skill}</span> })
        .collect::<Vec<_>>();
    let has_skills = !skill_chips.is_empty();

    let description_row = (!description.is_empty())
        .then(move || view! { <p class="internship-card__description">{description}</p> });
    let eligibility_row = (!eligibility.is_empty()).then(move || {
        view! {
            <p class="internship-card__eligibility">
                <span class="internship-card__eligibility-label">"Eligibility: "</span>
                {eligibility}
            </p>
        }
    });
    let link_row = (!external_url.is_empty()).then(move || {
        view! {
            <a class="internship-card__link" href=external_url target="_blank" rel="noreferrer">
                "View posting"
            </a>
        }
    });

    view! {
        <div class="internship-card">
            <div class="internship-card__header">
                <div>
                    <h3 class="internship-card__title">{title}</h3>
                    <p class="internship-card__company">{company}</p>
                </div>
                {stipend.map(|stipend| view! { <span class="internship-card__stipend">{stipend}</span> })}
            </div>
            {(!meta.is_empty()).then(move || view! { <p class="internship-card__meta">{meta}</p> })}
            {description_row}
            {eligibility_row}
            {has_skills
                .then(move || {
                    view! { <div class="internship-card__skills">{skill_chips}</div> }
                })}
            {link_row}
        </div>
    }
}
