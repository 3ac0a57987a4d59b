//! Session crate for the swipe-match discovery engine.
//!
//! This crate ties the pieces together: it owns the filter state, the
//! per-list load state, the candidate list and the swipe deck, and it
//! discards fetch results that a newer load has superseded.
//!
//! ## Example Usage
//! ```ignore
//! use session::{DiscoveryOrchestrator, SessionSettings, SwipeSession};
//!
//! let session = SwipeSession::new(filters, SessionSettings::default());
//! let mut orchestrator = DiscoveryOrchestrator::new(api, session);
//! orchestrator.load().await;
//!
//! let view = orchestrator.session().view();
//! println!("{}", view.summary());
//! ```

pub mod fetch;
pub mod orchestrator;
pub mod session;
pub mod view;

pub use fetch::{fetch_sources, FetchOutcome, SESSION_LISTS};
pub use orchestrator::DiscoveryOrchestrator;
pub use session::{Clock, FetchTicket, SessionSettings, SwipeSession};
pub use view::{Phase, SessionView};
