//! Mapping from raw TMDB records to domain types.
//!
//! `MovieMapper::map` is total: every raw record produces a `Movie`.
//! Missing fields fall back to empty values, a missing backdrop falls back
//! to the placeholder image, and an unparsable release date yields year 0.

use crate::raw::{RawMovie, RawMovieDetails, RawMoviePage};
use crate::types::*;
use chrono::{Datelike, NaiveDate};
use rayon::prelude::*;

/// Number of cast members kept on a details record
const MAX_CAST: usize = 10;

/// Converts raw API records into `Movie` values.
#[derive(Debug, Clone)]
pub struct MovieMapper {
    image_base_url: String,
}

impl MovieMapper {
    /// Create a mapper that prefixes image paths with `image_base_url`
    pub fn new(image_base_url: impl Into<String>) -> Self {
        Self {
            image_base_url: image_base_url.into(),
        }
    }

    pub fn image_base_url(&self) -> &str {
        &self.image_base_url
    }

    /// Map a single raw record.
    pub fn map(&self, raw: &RawMovie) -> Movie {
        let image = match raw.backdrop_path.as_deref() {
            Some(path) if !path.is_empty() => format!("{}{}", self.image_base_url, path),
            _ => PLACEHOLDER_IMAGE_URL.to_string(),
        };

        // List endpoints carry `genre_ids`, the detail endpoint carries `genres`
        let genre_ids = if raw.genre_ids.is_empty() {
            raw.genres.iter().map(|g| g.id).collect()
        } else {
            raw.genre_ids.clone()
        };

        Movie {
            id: raw.id,
            title: raw.title.clone(),
            image,
            poster_path: raw.poster_path.clone(),
            backdrop_path: raw.backdrop_path.clone(),
            rating: (raw.vote_average / 2.0) as f32,
            year: parse_release_year(raw.release_date.as_deref()),
            description: raw.overview.clone(),
            genre_ids,
            release_date: raw.release_date.clone(),
            platforms: None,
        }
    }

    /// Map every record of a page, preserving page order.
    ///
    /// Uses Rayon; an indexed parallel iterator collects in input order.
    pub fn map_page(&self, page: &RawMoviePage) -> Vec<Movie> {
        page.results.par_iter().map(|raw| self.map(raw)).collect()
    }

    /// Map a detail response (credits and videos appended).
    pub fn map_details(&self, raw: &RawMovieDetails) -> MovieDetails {
        let movie = self.map(&raw.movie);

        let (director, cast) = match &raw.credits {
            Some(credits) => {
                let director = credits
                    .crew
                    .iter()
                    .find(|person| person.job == "Director")
                    .map(|person| person.name.clone());
                let cast = credits
                    .cast
                    .iter()
                    .take(MAX_CAST)
                    .map(|actor| CastMember {
                        id: actor.id,
                        name: actor.name.clone(),
                        character: actor.character.clone(),
                        profile_path: actor.profile_path.clone(),
                    })
                    .collect();
                (director, cast)
            }
            None => (None, Vec::new()),
        };

        let trailer = raw.videos.as_ref().and_then(|videos| {
            videos
                .results
                .iter()
                .find(|v| v.kind == "Trailer" && v.site == "YouTube")
                .map(|v| format!("https://www.youtube.com/watch?v={}", v.key))
        });

        MovieDetails {
            movie,
            genres: raw.movie.genres.clone(),
            director,
            cast,
            trailer,
            duration: raw.runtime.filter(|m| *m > 0).map(format_runtime),
        }
    }
}

impl Default for MovieMapper {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_BASE_URL)
    }
}

/// Extract the calendar year from an ISO release date; 0 when absent or invalid.
pub fn parse_release_year(release_date: Option<&str>) -> u16 {
    release_date
        .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
        .and_then(|date| u16::try_from(date.year()).ok())
        .unwrap_or(0)
}

/// Format a runtime in minutes as "2h 5m", or "45m" under an hour.
pub fn format_runtime(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, rest)
    } else {
        format!("{}m", rest)
    }
}
