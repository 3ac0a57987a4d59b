//! Build `MovieFilters` from navigation parameters.
//!
//! The filter screen hands the swipe screen a flat set of string
//! parameters: comma-joined platform ids, comma-joined genre ids, a country
//! code and a `latest` flag. This module turns them into a typed
//! `MovieFilters`, the way the swipe screen reads them.

use crate::error::{NavigationError, Result};
use crate::types::{MovieFilters, YearRange};
use catalog::{GenreId, DEFAULT_REGION};
use serde::{Deserialize, Serialize};

/// Raw parameters as passed between screens
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationParams {
    /// Comma-joined platform ids, empty for none
    pub platforms: String,
    /// Comma-joined numeric genre ids, empty for none
    pub genres: String,
    pub country: Option<String>,
    pub latest: bool,
    pub year_start: Option<String>,
    pub year_end: Option<String>,
    pub rating: Option<String>,
}

impl NavigationParams {
    /// Parameters for a confirmed filter selection.
    ///
    /// `latest` is set exactly when no platform and no genre was picked.
    pub fn from_selection(platforms: &[String], genres: &[GenreId], country: Option<&str>) -> Self {
        Self {
            platforms: platforms.join(","),
            genres: genres
                .iter()
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(","),
            country: Some(country.unwrap_or(DEFAULT_REGION).to_string()),
            latest: platforms.is_empty() && genres.is_empty(),
            ..Self::default()
        }
    }

    /// Parse into filters.
    ///
    /// In latest mode only the region is read; every content parameter is
    /// ignored, even if malformed.
    pub fn to_filters(&self) -> Result<MovieFilters> {
        let mut filters = MovieFilters {
            region: self
                .country
                .as_deref()
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            ..MovieFilters::default()
        };

        if self.latest {
            filters.latest = true;
            return Ok(filters);
        }

        filters.platforms = split_list(&self.platforms).map(str::to_string).collect();

        filters.genres = split_list(&self.genres)
            .map(|id| {
                id.parse::<GenreId>()
                    .map_err(|_| NavigationError::InvalidGenreId(id.to_string()))
            })
            .collect::<Result<_>>()?;

        if let (Some(start), Some(end)) = (&self.year_start, &self.year_end) {
            let start = parse_number::<u16>("yearStart", start)?;
            let end = parse_number::<u16>("yearEnd", end)?;
            if start > end {
                return Err(NavigationError::InvertedYearRange { start, end });
            }
            filters.years = Some(YearRange::new(start, end));
        }

        if let Some(rating) = &self.rating {
            let rating = parse_number::<f32>("rating", rating)?;
            if !(0.0..=5.0).contains(&rating) {
                return Err(NavigationError::RatingOutOfRange(rating));
            }
            filters.rating = Some(rating);
        }

        Ok(filters)
    }
}

fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|item| !item.is_empty())
}

fn parse_number<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| NavigationError::InvalidValue {
            field,
            value: value.to_string(),
        })
}
