//! Filter to keep only movies in the selected genres.

use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;
use sources::MovieFilters;

/// Keeps movies sharing at least one genre with the selected set.
///
/// An empty genre selection keeps everything.
pub struct GenreFilter;

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply(&self, movies: Vec<Movie>, filters: &MovieFilters) -> Result<Vec<Movie>> {
        if filters.genres.is_empty() {
            return Ok(movies);
        }
        let filtered: Vec<Movie> = movies
            .into_iter()
            .filter(|movie| movie.has_any_genre(&filters.genres))
            .collect();
        Ok(filtered)
    }
}
