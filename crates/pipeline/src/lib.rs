//! Pipeline for aggregating and filtering movie candidates.
//!
//! This crate provides:
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - CandidateBuilder, which turns fetched list pages into the ordered,
//!   deduplicated candidate list
//!
//! ## Architecture
//! The pipeline processes candidates in stages:
//! 1. Source selection picks the lists for the filter mode
//! 2. Raw records are mapped to movies
//! 3. Duplicates are removed, first occurrence wins
//! 4. Content filters remove unwanted movies (genre, rating, year)
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{build_candidates, BuildError};
//!
//! match build_candidates(&source_set, &filters, today) {
//!     Ok(list) if list.is_empty() => println!("no movies match your filters"),
//!     Ok(list) => println!("{} candidates", list.len()),
//!     Err(BuildError::Loading(_)) => println!("loading..."),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

pub mod candidates;
pub mod filter_pipeline;
pub mod filters;
pub mod traits;

// Re-export main types
pub use candidates::{build_candidates, dedup_by_id, BuildError, CandidateBuilder, CandidateList};
pub use filter_pipeline::FilterPipeline;
pub use traits::Filter;
