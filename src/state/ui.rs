//! Cross-page UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of domain state (`session`, `chat`) so
//! chrome controls can evolve independently of backend data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared by the navbar across pages.
#[derive(Clone, Copy, Debug, Default)]
pub struct UiState {
    /// Whether the dark theme is active; mirrored onto the document's
    /// `data-theme` attribute.
    pub dark_mode: bool,
}
