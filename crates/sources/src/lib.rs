//! # Sources Crate
//!
//! Describes where candidate movies come from and what the user asked for.
//!
//! ## Components
//!
//! - **types**: `ListKind` (now playing, popular, upcoming, top rated),
//!   `MovieFilters` and partial `FilterPatch` updates
//! - **source_set**: per-list load state (`Loading`, `Ready`, `Failed`)
//!   and settlement of a group of lists
//! - **navigation**: parsing of the flat navigation parameters handed over
//!   by the filter screen
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{ListKind, NavigationParams, Settlement, SourceSet};
//!
//! let filters = NavigationParams::from_selection(&[], &[28], Some("GB")).to_filters()?;
//!
//! let mut set = SourceSet::new();
//! set.mark_loading(filters.required_sources());
//! set.set_ready(ListKind::NowPlaying, now_playing_page);
//!
//! if let Settlement::Pending(waiting) = set.settle(filters.required_sources()) {
//!     println!("still waiting on {:?}", waiting);
//! }
//! ```

pub mod error;
pub mod navigation;
pub mod source_set;
pub mod types;

// Re-export commonly used types
pub use error::NavigationError;
pub use navigation::NavigationParams;
pub use source_set::{Settlement, SourceFailure, SourceSet, SourceState};
pub use types::{FilterChange, FilterPatch, ListKind, MovieFilters, YearRange};
