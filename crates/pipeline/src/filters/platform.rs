//! Platform filter.
//!
//! List endpoints carry no per-movie platform data, so a platform
//! selection is accepted but does not remove anything.

use crate::traits::Filter;
use anyhow::Result;
use catalog::Movie;
use sources::MovieFilters;

/// Accepts the platform selection without narrowing the candidates.
pub struct PlatformFilter;

impl Filter for PlatformFilter {
    fn name(&self) -> &str {
        "PlatformFilter"
    }

    fn apply(&self, movies: Vec<Movie>, filters: &MovieFilters) -> Result<Vec<Movie>> {
        if !filters.platforms.is_empty() {
            tracing::debug!(
                "Platform selection {:?} not enforced: no per-movie availability",
                filters.platforms
            );
        }
        Ok(movies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::movie;

    #[test]
    fn test_platform_filter_is_pass_through() {
        let filters = MovieFilters {
            platforms: ["8".to_string()].into(),
            ..MovieFilters::default()
        };

        let movies = vec![
            movie(1, &[], 4.0, 2000),
            movie(2, &[], 4.0, 2000).with_platforms(vec!["Hulu".to_string()]),
        ];

        let filtered = PlatformFilter.apply(movies, &filters).unwrap();
        assert_eq!(filtered.len(), 2);
    }
}
