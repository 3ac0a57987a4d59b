//! Filter implementations for the candidate pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod genre;
pub mod minimum_rating;
pub mod platform;
pub mod upcoming;
pub mod year_range;

// Re-export for convenience
pub use genre::GenreFilter;
pub use minimum_rating::MinimumRatingFilter;
pub use platform::PlatformFilter;
pub use upcoming::UpcomingReleaseFilter;
pub use year_range::YearRangeFilter;
