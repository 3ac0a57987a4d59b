//! Core domain types for the movie catalog.
//!
//! Movies here are immutable value objects built from TMDB list records.
//! They are never edited in place; a refetch replaces them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// Type Aliases
// =============================================================================

/// TMDB movie identifier, stable across fetches
pub type MovieId = u64;

/// TMDB genre identifier (e.g. 28 = Action)
pub type GenreId = u32;

/// TMDB watch-provider identifier
pub type ProviderId = u32;

/// Region used when no region has been selected
pub const DEFAULT_REGION: &str = "US";

/// Image shown when a movie has no backdrop
pub const PLACEHOLDER_IMAGE_URL: &str = "https://images.unsplash.com/photo-1536440136628-849c177e76a1?q=80&w=1925&auto=format&fit=crop";

/// Base URL prepended to TMDB image paths
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/original";

// =============================================================================
// Movie
// =============================================================================

/// A movie as presented to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Display image: full backdrop URL, or the placeholder
    pub image: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    /// Rating on a 0-5 scale (TMDB vote average halved)
    pub rating: f32,
    /// Release year, 0 when the release date is missing or unparsable
    pub year: u16,
    pub description: String,
    /// References into the session's genre table
    pub genre_ids: Vec<GenreId>,
    /// ISO-8601 release date as sent by the API
    pub release_date: Option<String>,
    /// Platforms the movie streams on; `None` until a provider lookup succeeds
    pub platforms: Option<Vec<String>>,
}

impl Movie {
    /// True if at least one of the movie's genres is in `genres`
    pub fn has_any_genre(&self, genres: &BTreeSet<GenreId>) -> bool {
        self.genre_ids.iter().any(|id| genres.contains(id))
    }

    /// Year as an option, `None` for the unknown-year sentinel
    pub fn known_year(&self) -> Option<u16> {
        (self.year != 0).then_some(self.year)
    }

    /// True if the movie releases strictly after `date` (ISO `YYYY-MM-DD`).
    ///
    /// Well-formed ISO dates compare lexically in calendar order.
    pub fn releases_after(&self, date: &str) -> bool {
        match self.release_date.as_deref() {
            Some(release) if !release.is_empty() => release > date,
            _ => false,
        }
    }

    /// Returns the movie with platform availability attached
    pub fn with_platforms(mut self, platforms: Vec<String>) -> Self {
        self.platforms = Some(platforms);
        self
    }
}

// =============================================================================
// Lookup types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

/// A streaming/rental provider as returned by the watch-provider endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub provider_id: ProviderId,
    pub provider_name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub display_priority: Option<u32>,
}

/// A region the app can be browsed in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub code: &'static str,
    pub name: &'static str,
}

// =============================================================================
// Details
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    pub character: Option<String>,
    pub profile_path: Option<String>,
}

/// Full details for a single movie, assembled from the detail endpoint
/// with credits and videos appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub movie: Movie,
    pub genres: Vec<Genre>,
    pub director: Option<String>,
    /// Top-billed cast, at most ten entries
    pub cast: Vec<CastMember>,
    /// YouTube watch URL of the first trailer
    pub trailer: Option<String>,
    /// Runtime formatted as "2h 5m" or "45m"
    pub duration: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(release_date: Option<&str>) -> Movie {
        Movie {
            id: 1,
            title: "Test".to_string(),
            image: PLACEHOLDER_IMAGE_URL.to_string(),
            poster_path: None,
            backdrop_path: None,
            rating: 3.5,
            year: 0,
            description: String::new(),
            genre_ids: vec![28, 12],
            release_date: release_date.map(str::to_string),
            platforms: None,
        }
    }

    #[test]
    fn test_has_any_genre() {
        let m = movie(None);
        assert!(m.has_any_genre(&BTreeSet::from([12, 99])));
        assert!(!m.has_any_genre(&BTreeSet::from([35])));
        assert!(!m.has_any_genre(&BTreeSet::new()));
    }

    #[test]
    fn test_releases_after_is_strict() {
        let m = movie(Some("2026-10-16"));
        assert!(m.releases_after("2026-10-15"));
        assert!(!m.releases_after("2026-10-16"));
        assert!(!m.releases_after("2026-10-17"));
    }

    #[test]
    fn test_releases_after_without_date() {
        assert!(!movie(None).releases_after("2000-01-01"));
        assert!(!movie(Some("")).releases_after("2000-01-01"));
    }

    #[test]
    fn test_with_platforms() {
        let m = movie(None).with_platforms(vec!["Netflix".to_string()]);
        assert_eq!(m.platforms, Some(vec!["Netflix".to_string()]));
    }
}
