//! # Swipe Crate
//!
//! The decision side of the discovery flow: one candidate at a time,
//! accepted or rejected by button or by drag.
//!
//! ## Components
//!
//! - **deck**: `SwipeDeck`, the `Idle` / `Presenting` / `Matched` state
//!   machine over a cursor into the candidate list
//! - **gesture**: `DragTracker`, which turns drag offsets into card
//!   feedback and, on release, into a decision
//!
//! ## Example Usage
//!
//! ```ignore
//! use swipe::{DragTracker, SwipeDeck};
//!
//! let mut deck = SwipeDeck::new(candidates);
//! let tracker = DragTracker::new(400.0);
//!
//! if let Some(decision) = tracker.on_drag_end(180.0, 12.0) {
//!     deck.decide(decision);
//! }
//! if deck.is_matched() {
//!     println!("It's a match: {:?}", deck.current());
//!     deck.continue_swiping();
//! }
//! ```

pub mod deck;
pub mod gesture;

pub use deck::{Decision, DeckState, SwipeDeck};
pub use gesture::{DragFrame, DragRelease, DragTracker};
