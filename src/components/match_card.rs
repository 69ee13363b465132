//! Card rendering one backend-ranked match.

use leptos::prelude::*;

use crate::net::types::Match;

/// One ranked match: score, rejection risk, skill breakdown, and the
/// listing it ranks.
#[component]
pub fn MatchCard(hit: Match) -> impl IntoView {
    let (title, company, location, url) = match hit.listing() {
        Some(listing) => (
            listing.title().to_owned(),
            listing.company().to_owned(),
            listing.location().to_owned(),
            listing.external_url().to_owned(),
        ),
        None => (
            "Listing unavailable".to_owned(),
            String::new(),
            String::new(),
            String::new(),
        ),
    };

    let Match {
        match_score,
        rejection_probability,
        rejection_risk,
        skill_match,
        reasoning,
        recommended_action,
        ..
    } = hit;

    let score = format!("{match_score:.0}%");
    let risk_class = format!("match-card__risk match-card__risk--{rejection_risk}");
    let risk_text = format!("{rejection_probability:.0}% rejection risk");

    let matched_chips = skill_match
        .matched
        .into_iter()
        .map(|skill| view! { <span class="chip chip--matched">{skill}</span> })
        .collect::<Vec<_>>();
    let missing_chips = skill_match
        .missing
        .into_iter()
        .map(|skill| view! { <span class="chip chip--missing">{skill}</span> })
        .collect::<Vec<_>>();
    let has_matched = !matched_chips.is_empty();
    let has_missing = !missing_chips.is_empty();

    let company_row =
        (!company.is_empty()).then(move || view! { <p class="match-card__company">{company}</p> });
    let location_row = (!location.is_empty())
        .then(move || view! { <p class="match-card__location">{location}</p> });
    let reasoning_row = (!reasoning.is_empty())
        .then(move || view! { <p class="match-card__reasoning">{reasoning}</p> });
    let action_row = (!recommended_action.is_empty()).then(move || {
        view! {
            <p class="match-card__action">
                <span class="match-card__action-label">"Suggested: "</span>
                {recommended_action}
            </p>
        }
    });
    let link_row = (!url.is_empty()).then(move || {
        view! {
            <a class="match-card__link" href=url target="_blank" rel="noreferrer">
                "View posting"
            </a>
        }
    });

    view! {
        <div class="match-card">
            <div class="match-card__header">
                <div>
                    <h3 class="match-card__title">{title}</h3>
                    {company_row}
                </div>
                <span class="match-card__score">{score}</span>
            </div>
            {location_row}
            <p class=risk_class>{risk_text}</p>
            {has_matched
                .then(move || {
                    view! {
                        <div class="match-card__skills">
                            <span class="match-card__skills-label">"Matched skills"</span>
                            {matched_chips}
                        </div>
                    }
                })}
            {has_missing
                .then(move || {
                    view! {
                        <div class="match-card__skills">
                            <span class="match-card__skills-label">"Missing skills"</span>
                            {missing_chips}
                        </div>
                    }
                })}
            {reasoning_row}
            {action_row}
            {link_row}
        </div>
    }
}
