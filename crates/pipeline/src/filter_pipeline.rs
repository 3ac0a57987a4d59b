//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{GenreFilter, MinimumRatingFilter, PlatformFilter, YearRangeFilter};
use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;
use sources::MovieFilters;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter)
///     .add_filter(MinimumRatingFilter);
///
/// let filtered = pipeline.apply(movies, &filters)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The content filters applied outside latest-only mode:
    /// genre, minimum rating, year range and platform.
    pub fn content() -> Self {
        Self::new()
            .add_filter(GenreFilter)
            .add_filter(MinimumRatingFilter)
            .add_filter(YearRangeFilter)
            .add_filter(PlatformFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the movies.
    ///
    /// # Returns
    /// * `Ok(Vec<Movie>)` - The movies kept by every filter, in input order
    /// * `Err` - If any filter fails
    pub fn apply(&self, movies: Vec<Movie>, filters: &MovieFilters) -> Result<Vec<Movie>> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, filters)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
