//! What the presentation layer renders.

use catalog::Movie;
use serde::Serialize;

/// Top-level screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// A required list is still in flight
    Loading,
    /// Every required list failed; `refresh` retries
    Error,
    /// Lists loaded but nothing matches the filters
    Empty,
    /// A candidate is on screen awaiting a decision
    Presenting,
    /// The on-screen candidate was accepted
    Matched,
}

/// Snapshot of the session for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub phase: Phase,
    pub current: Option<Movie>,
    /// Genre names of the current candidate
    pub genres: Vec<String>,
    pub cursor: Option<usize>,
    pub total: usize,
    pub loading: bool,
    /// Aggregate fetch error; also set alongside data when only some lists failed
    pub error: Option<String>,
    pub matched: bool,
    /// True when some lists failed and the candidates come from the rest
    pub partial: bool,
    pub region: String,
}

impl SessionView {
    /// One-line status for logs and the terminal front end
    pub fn summary(&self) -> String {
        match self.phase {
            Phase::Loading => "Loading movies...".to_string(),
            Phase::Error => self
                .error
                .clone()
                .unwrap_or_else(|| "Failed to load movies".to_string()),
            Phase::Empty => "No movies match your filters".to_string(),
            Phase::Presenting | Phase::Matched => match (&self.current, self.cursor) {
                (Some(movie), Some(cursor)) => {
                    format!("{} ({}/{})", movie.title, cursor + 1, self.total)
                }
                _ => String::new(),
            },
        }
    }
}
