//! Networking modules for the backend REST contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and classifies failures; `types` defines
//! the wire schema both the calls and the UI state share.

pub mod api;
pub mod types;
