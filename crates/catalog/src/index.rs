//! Session lookup tables: genres and supported regions.
//!
//! The genre list is fetched once per session and kept here; movies only
//! hold genre ids and resolve names through the table.

use crate::error::{CatalogError, Result};
use crate::types::*;
use std::collections::HashMap;

/// Genres used when the genre endpoint cannot be reached
const FALLBACK_GENRES: &[(GenreId, &str)] = &[
    (28, "Action"),
    (35, "Comedy"),
    (18, "Drama"),
    (27, "Horror"),
    (10749, "Romance"),
    (878, "Sci-Fi"),
    (53, "Thriller"),
    (99, "Documentary"),
    (16, "Animation"),
    (14, "Fantasy"),
];

/// Regions the discovery flow can be browsed in
pub const SUPPORTED_REGIONS: &[Region] = &[
    Region { code: "US", name: "United States" },
    Region { code: "GB", name: "United Kingdom" },
    Region { code: "CA", name: "Canada" },
    Region { code: "ES", name: "Spain" },
    Region { code: "MX", name: "Mexico" },
    Region { code: "FR", name: "France" },
    Region { code: "DE", name: "Germany" },
    Region { code: "IT", name: "Italy" },
    Region { code: "BR", name: "Brazil" },
    Region { code: "AU", name: "Australia" },
];

/// Look up a supported region by its ISO code (case-insensitive)
pub fn find_region(code: &str) -> Result<&'static Region> {
    SUPPORTED_REGIONS
        .iter()
        .find(|r| r.code.eq_ignore_ascii_case(code))
        .ok_or_else(|| CatalogError::UnknownRegion(code.to_string()))
}

/// Genre lookup table keyed by id, remembering the API's ordering.
#[derive(Debug, Clone, Default)]
pub struct GenreTable {
    by_id: HashMap<GenreId, Genre>,
    order: Vec<GenreId>,
}

impl GenreTable {
    /// Build a table from the genre endpoint's list. Later duplicates are ignored.
    pub fn from_genres(genres: Vec<Genre>) -> Self {
        let mut table = Self::default();
        for genre in genres {
            if table.by_id.contains_key(&genre.id) {
                continue;
            }
            table.order.push(genre.id);
            table.by_id.insert(genre.id, genre);
        }
        table
    }

    /// The built-in table used when the genre fetch fails
    pub fn fallback() -> Self {
        Self::from_genres(
            FALLBACK_GENRES
                .iter()
                .map(|(id, name)| Genre {
                    id: *id,
                    name: name.to_string(),
                })
                .collect(),
        )
    }

    pub fn get(&self, id: GenreId) -> Option<&Genre> {
        self.by_id.get(&id)
    }

    /// Like `get`, but an unknown id is an error
    pub fn require(&self, id: GenreId) -> Result<&Genre> {
        self.get(id).ok_or(CatalogError::UnknownGenre(id))
    }

    /// Display names of a movie's genres; unknown ids are skipped
    pub fn names_for(&self, movie: &Movie) -> Vec<&str> {
        movie
            .genre_ids
            .iter()
            .filter_map(|id| self.get(*id))
            .map(|g| g.name.as_str())
            .collect()
    }

    /// Genres in the order the API returned them
    pub fn iter(&self) -> impl Iterator<Item = &Genre> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
