//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate movies.

use anyhow::Result;
use catalog::Movie;
use sources::MovieFilters;

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
/// Filters must keep the relative order of the movies they retain.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of movies.
    ///
    /// # Arguments
    /// * `movies` - The movies to filter (takes ownership)
    /// * `filters` - The user's active filter configuration
    fn apply(&self, movies: Vec<Movie>, filters: &MovieFilters) -> Result<Vec<Movie>>;
}
