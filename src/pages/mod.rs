//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, fetches, form state)
//! and delegates rendering details to `components`.

pub mod dashboard;
pub mod forgot_password;
pub mod internships;
pub mod jobs;
pub mod landing;
pub mod login;
pub mod profile;
pub mod register;
pub mod statistics;
