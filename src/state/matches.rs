#[cfg(test)]
#[path = "matches_test.rs"]
mod matches_test;

use crate::net::types::{Match, MatchKind, MatchResponse};

/// Ranked matches for one listing kind, as shown on the dashboard.
#[derive(Clone, Debug, Default)]
pub struct MatchesState {
    pub items: Vec<Match>,
    pub kind: MatchKind,
    pub loading: bool,
    pub error: Option<String>,
    /// Advisory note from the matcher, e.g. profile has no skills yet.
    pub note: Option<String>,
}

impl MatchesState {
    /// Start a fetch for `kind`, dropping results of the previous kind.
    pub fn begin(&mut self, kind: MatchKind) {
        self.kind = kind;
        self.items.clear();
        self.loading = true;
        self.error = None;
    }

    /// Land a successful response.
    pub fn absorb(&mut self, response: MatchResponse) {
        self.items = response.matches;
        self.note = response.message;
        self.loading = false;
        self.error = None;
    }

    /// Land a failure.
    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}
