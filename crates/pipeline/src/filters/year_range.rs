//! Filter on release year.

use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;
use sources::MovieFilters;

/// Keeps movies released within the selected year range.
///
/// ## Algorithm
/// 1. If no range is selected, keep all movies
/// 2. Keep movies whose year lies in `[start, end]`, both ends inclusive
/// 3. Movies with an unknown year (0) are kept
pub struct YearRangeFilter;

impl Filter for YearRangeFilter {
    fn name(&self) -> &str {
        "YearRangeFilter"
    }

    fn apply(&self, movies: Vec<Movie>, filters: &MovieFilters) -> Result<Vec<Movie>> {
        let Some(range) = filters.years else {
            return Ok(movies);
        };
        let filtered: Vec<Movie> = movies
            .into_iter()
            .filter(|movie| match movie.known_year() {
                Some(year) => range.contains(year),
                None => true,
            })
            .collect();

        Ok(filtered)
    }
}
