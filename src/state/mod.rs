//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `matches`, `listings`, etc.) so
//! individual pages and components can depend on small focused models.
//! `session`, `chat`, and `ui` are provided app-wide via context; the other
//! slices are page-instantiated signals.

pub mod chat;
pub mod listings;
pub mod matches;
pub mod session;
pub mod stats;
pub mod ui;
