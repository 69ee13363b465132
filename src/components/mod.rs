//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and listing cards while reading/writing
//! shared state from Leptos context providers.

pub mod chat_widget;
pub mod internship_card;
pub mod job_card;
pub mod match_card;
pub mod navbar;
pub mod stat_bar;
