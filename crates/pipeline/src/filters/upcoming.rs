//! Filter for latest-only mode.
//!
//! Keeps movies that have not been released yet.

use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;
use chrono::NaiveDate;
use sources::MovieFilters;

/// Keeps movies whose release date is strictly after `today`.
///
/// Dates are compared as ISO-8601 strings, which orders well-formed dates
/// by calendar. Movies without a release date are dropped.
pub struct UpcomingReleaseFilter {
    today: String,
}

impl UpcomingReleaseFilter {
    /// Create a new UpcomingReleaseFilter anchored at `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: today.format("%Y-%m-%d").to_string(),
        }
    }
}

impl Filter for UpcomingReleaseFilter {
    fn name(&self) -> &str {
        "UpcomingReleaseFilter"
    }

    fn apply(&self, movies: Vec<Movie>, _filters: &MovieFilters) -> Result<Vec<Movie>> {
        let filtered: Vec<Movie> = movies
            .into_iter()
            .filter(|movie| movie.releases_after(&self.today))
            .collect();
        Ok(filtered)
    }
}
