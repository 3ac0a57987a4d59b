//! Filter to enforce the user's minimum rating.

use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;
use sources::MovieFilters;

/// Removes movies rated below the selected minimum.
///
/// The bound is inclusive: a movie rated exactly at the minimum is kept.
pub struct MinimumRatingFilter;

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply(&self, movies: Vec<Movie>, filters: &MovieFilters) -> Result<Vec<Movie>> {
        let Some(min_rating) = filters.rating else {
            return Ok(movies);
        };
        let filtered: Vec<Movie> = movies
            .into_iter()
            .filter(|movie| movie.rating >= min_rating)
            .collect();

        Ok(filtered)
    }
}
