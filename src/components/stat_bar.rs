//! Labeled proportion bar for statistics displays.

use leptos::prelude::*;

/// A labeled count with a horizontal fill bar at `percent` width.
#[component]
pub fn StatBar(label: &'static str, value: u32, percent: u32) -> impl IntoView {
    let width = format!("{percent}%");

    view! {
        <div class="stat-bar">
            <span class="stat-bar__label">{label}</span>
            <div class="stat-bar__track">
                <div class="stat-bar__fill" style:width=width></div>
            </div>
            <span class="stat-bar__value">{value}</span>
        </div>
    }
}
