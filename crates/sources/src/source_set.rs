//! Load state of each movie list.
//!
//! Fetches settle independently. A list that has not answered yet is
//! `Loading`, which is never the same thing as an empty page.

use crate::types::ListKind;
use catalog::RawMoviePage;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Why a list failed to load
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFailure {
    pub kind: ListKind,
    /// HTTP status, when the API answered at all
    pub status: Option<u16>,
    pub message: String,
}

impl fmt::Display for SourceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} list failed ({}): {}", self.kind, status, self.message),
            None => write!(f, "{} list failed: {}", self.kind, self.message),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SourceState {
    Loading,
    Ready(RawMoviePage),
    Failed(SourceFailure),
}

/// Outcome of waiting on a group of lists
#[derive(Debug, Clone, PartialEq)]
pub enum Settlement<'a> {
    /// At least one list has not answered yet
    Pending(Vec<ListKind>),
    /// Every list answered; pages are in the requested order
    Settled {
        pages: Vec<(ListKind, &'a RawMoviePage)>,
        failures: Vec<&'a SourceFailure>,
    },
}

/// Per-list load state for one region.
#[derive(Debug, Clone, Default)]
pub struct SourceSet {
    states: BTreeMap<ListKind, SourceState>,
}

impl SourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of a list; `None` if it was never requested
    pub fn state(&self, kind: ListKind) -> Option<&SourceState> {
        self.states.get(&kind)
    }

    /// Mark lists as in flight, discarding whatever they held
    pub fn mark_loading(&mut self, kinds: &[ListKind]) {
        for kind in kinds {
            self.states.insert(*kind, SourceState::Loading);
        }
    }

    pub fn set_ready(&mut self, kind: ListKind, page: RawMoviePage) {
        debug!("{} list ready with {} results", kind, page.results.len());
        self.states.insert(kind, SourceState::Ready(page));
    }

    pub fn set_failed(&mut self, failure: SourceFailure) {
        debug!("{}", failure);
        self.states.insert(failure.kind, SourceState::Failed(failure));
    }

    /// True if any of `kinds` is still loading or was never requested
    pub fn is_pending(&self, kinds: &[ListKind]) -> bool {
        kinds
            .iter()
            .any(|k| !matches!(self.states.get(k), Some(SourceState::Ready(_) | SourceState::Failed(_))))
    }

    /// Settle the given lists in order.
    ///
    /// A list that was never requested counts as pending.
    pub fn settle(&self, kinds: &[ListKind]) -> Settlement<'_> {
        let mut pending = Vec::new();
        let mut pages = Vec::new();
        let mut failures = Vec::new();

        for kind in kinds {
            match self.states.get(kind) {
                None | Some(SourceState::Loading) => pending.push(*kind),
                Some(SourceState::Ready(page)) => pages.push((*kind, page)),
                Some(SourceState::Failed(failure)) => failures.push(failure),
            }
        }

        if pending.is_empty() {
            Settlement::Settled { pages, failures }
        } else {
            Settlement::Pending(pending)
        }
    }

    /// Forget every list
    pub fn clear(&mut self) {
        self.states.clear();
    }
}
