//! Raw TMDB wire records.
//!
//! These mirror the JSON bodies of the list, genre, provider and detail
//! endpoints. Every optional field defaults so that a sparse record still
//! deserializes; the mapper turns them into domain types.

use crate::types::{Genre, GenreId, MovieId, Provider};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One movie record from a paginated list endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMovie {
    pub id: MovieId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    /// 0-10 vote average
    #[serde(default)]
    pub vote_average: f64,
    /// List endpoints send bare ids
    #[serde(default)]
    pub genre_ids: Vec<GenreId>,
    /// The detail endpoint sends full genre objects instead
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// A page of results from `/movie/{list}` or `/search/movie`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMoviePage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<RawMovie>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

/// Body of `/genre/movie/list`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenreList {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// Body of `/watch/providers/movie`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderList {
    #[serde(default)]
    pub results: Vec<Provider>,
}

/// Body of `/movie/{id}/watch/providers`, keyed by region code
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieProviders {
    #[serde(default)]
    pub results: HashMap<String, RegionProviders>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionProviders {
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub flatrate: Vec<Provider>,
    #[serde(default)]
    pub rent: Vec<Provider>,
    #[serde(default)]
    pub buy: Vec<Provider>,
}

impl MovieProviders {
    /// Names of subscription (flatrate) providers in `region`, in priority order
    pub fn flatrate_names(&self, region: &str) -> Vec<String> {
        let Some(providers) = self.results.get(region) else {
            return Vec::new();
        };
        let mut flatrate: Vec<&Provider> = providers.flatrate.iter().collect();
        flatrate.sort_by_key(|p| p.display_priority.unwrap_or(u32::MAX));
        flatrate.iter().map(|p| p.provider_name.clone()).collect()
    }
}

// =============================================================================
// Detail endpoint with appended credits and videos
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMovieDetails {
    #[serde(flatten)]
    pub movie: RawMovie,
    /// Runtime in minutes
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub credits: Option<RawCredits>,
    #[serde(default)]
    pub videos: Option<RawVideos>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCredits {
    #[serde(default)]
    pub cast: Vec<RawCastMember>,
    #[serde(default)]
    pub crew: Vec<RawCrewMember>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCastMember {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCrewMember {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub job: String,
    #[serde(default)]
    pub department: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawVideos {
    #[serde(default)]
    pub results: Vec<RawVideo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawVideo {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub site: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_list_record_deserializes() {
        let page: RawMoviePage = serde_json::from_str(
            r#"{"page":1,"results":[{"id":42,"title":"Sparse","vote_average":7.0}],"total_pages":3}"#,
        )
        .unwrap();

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.results.len(), 1);
        let movie = &page.results[0];
        assert_eq!(movie.id, 42);
        assert!(movie.backdrop_path.is_none());
        assert!(movie.genre_ids.is_empty());
    }

    #[test]
    fn test_details_flatten_keeps_movie_fields() {
        let details: RawMovieDetails = serde_json::from_str(
            r#"{
                "id": 7,
                "title": "Detailed",
                "release_date": "2001-05-04",
                "genres": [{"id": 18, "name": "Drama"}],
                "runtime": 125,
                "videos": {"results": [{"key": "abc", "site": "YouTube", "type": "Trailer", "name": "T"}]}
            }"#,
        )
        .unwrap();

        assert_eq!(details.movie.id, 7);
        assert_eq!(details.movie.genres.len(), 1);
        assert_eq!(details.runtime, Some(125));
        assert_eq!(details.videos.unwrap().results[0].kind, "Trailer");
        assert!(details.credits.is_none());
    }

    #[test]
    fn test_flatrate_names_sorted_by_priority() {
        let providers: MovieProviders = serde_json::from_str(
            r#"{"results": {"US": {"flatrate": [
                {"provider_id": 9, "provider_name": "Prime Video", "display_priority": 3},
                {"provider_id": 8, "provider_name": "Netflix", "display_priority": 1}
            ]}}}"#,
        )
        .unwrap();

        assert_eq!(providers.flatrate_names("US"), vec!["Netflix", "Prime Video"]);
        assert!(providers.flatrate_names("GB").is_empty());
    }
}
