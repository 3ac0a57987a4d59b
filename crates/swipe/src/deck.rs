//! Swipe deck state machine.
//!
//! ```text
//! Idle ──non-empty list──▶ Presenting(0)
//! Presenting(i) ──reject──▶ Presenting(i + 1), or Presenting(0) past the end
//! Presenting(i) ──accept──▶ Matched(i)
//! Matched(i) ──continue | close──▶ Presenting((i + 1) mod len)
//! any ──replace──▶ Presenting(0), or Idle for an empty list
//! ```
//!
//! Whenever the deck is non-empty the cursor stays in `0..len`.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// A user's verdict on the presented candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Accept,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckState {
    /// No candidates to show
    Idle,
    /// Showing the candidate at this index
    Presenting(usize),
    /// The candidate at this index was accepted; the match overlay is up
    Matched(usize),
}

/// Cursor over an ordered candidate list.
#[derive(Debug, Clone)]
pub struct SwipeDeck<T> {
    items: Vec<T>,
    state: DeckState,
}

impl<T> SwipeDeck<T> {
    pub fn new(items: Vec<T>) -> Self {
        let state = Self::initial_state(&items);
        Self { items, state }
    }

    fn initial_state(items: &[T]) -> DeckState {
        if items.is_empty() {
            DeckState::Idle
        } else {
            DeckState::Presenting(0)
        }
    }

    /// Replace the whole candidate list, resetting the cursor.
    pub fn replace(&mut self, items: Vec<T>) {
        self.state = Self::initial_state(&items);
        self.items = items;
        debug!("Deck replaced: {} candidates, state={:?}", self.items.len(), self.state);
    }

    /// Apply a decision to the presented candidate.
    ///
    /// Returns the new state, or `None` when there was nothing to decide on
    /// (idle, or a match is already showing).
    pub fn decide(&mut self, decision: Decision) -> Option<DeckState> {
        let DeckState::Presenting(index) = self.state else {
            debug!("Ignoring {:?} in state {:?}", decision, self.state);
            return None;
        };

        self.state = match decision {
            Decision::Accept => DeckState::Matched(index),
            Decision::Reject => DeckState::Presenting(self.next_index(index)),
        };
        Some(self.state)
    }

    pub fn accept(&mut self) -> Option<DeckState> {
        self.decide(Decision::Accept)
    }

    pub fn reject(&mut self) -> Option<DeckState> {
        self.decide(Decision::Reject)
    }

    /// Dismiss the match and move on to the next candidate
    pub fn continue_swiping(&mut self) -> Option<DeckState> {
        let DeckState::Matched(index) = self.state else {
            return None;
        };
        self.state = DeckState::Presenting(self.next_index(index));
        Some(self.state)
    }

    /// Closing the match overlay behaves like continuing.
    pub fn close_match(&mut self) -> Option<DeckState> {
        self.continue_swiping()
    }

    fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.items.len()
    }

    /// The candidate on screen, presented or matched
    pub fn current(&self) -> Option<&T> {
        self.cursor().and_then(|i| self.items.get(i))
    }

    pub fn cursor(&self) -> Option<usize> {
        match self.state {
            DeckState::Idle => None,
            DeckState::Presenting(i) | DeckState::Matched(i) => Some(i),
        }
    }

    pub fn state(&self) -> DeckState {
        self.state
    }

    pub fn is_matched(&self) -> bool {
        matches!(self.state, DeckState::Matched(_))
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for SwipeDeck<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
