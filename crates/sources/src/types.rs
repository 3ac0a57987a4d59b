//! Source kinds and the user's filter configuration.

use catalog::{GenreId, DEFAULT_REGION};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// The paginated movie lists the discovery flow draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ListKind {
    NowPlaying,
    Popular,
    Upcoming,
    TopRated,
}

impl ListKind {
    /// Every list, in source precedence order
    pub const ALL: [ListKind; 4] = [
        ListKind::NowPlaying,
        ListKind::Popular,
        ListKind::Upcoming,
        ListKind::TopRated,
    ];

    /// TMDB endpoint path for this list
    pub fn path(&self) -> &'static str {
        match self {
            ListKind::NowPlaying => "/movie/now_playing",
            ListKind::Popular => "/movie/popular",
            ListKind::Upcoming => "/movie/upcoming",
            ListKind::TopRated => "/movie/top_rated",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ListKind::NowPlaying => "now playing",
            ListKind::Popular => "popular",
            ListKind::Upcoming => "upcoming",
            ListKind::TopRated => "top rated",
        };
        f.write_str(label)
    }
}

/// Inclusive release-year range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub start: u16,
    pub end: u16,
}

impl YearRange {
    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, year: u16) -> bool {
        year >= self.start && year <= self.end
    }
}

/// The user's filter configuration.
///
/// When `latest` is set, aggregation ignores every content filter
/// (platforms, genres, years, rating); only `region` still applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieFilters {
    pub platforms: BTreeSet<String>,
    pub genres: BTreeSet<GenreId>,
    pub years: Option<YearRange>,
    /// Minimum rating on the 0-5 scale, inclusive
    pub rating: Option<f32>,
    pub latest: bool,
    pub region: Option<String>,
}

impl MovieFilters {
    /// Filters showing only upcoming releases
    pub fn latest() -> Self {
        Self {
            latest: true,
            ..Self::default()
        }
    }

    /// Region code, falling back to the default region
    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or(DEFAULT_REGION)
    }

    /// Lists that must settle before candidates can be built, in precedence order
    pub fn required_sources(&self) -> &'static [ListKind] {
        if self.latest {
            &[ListKind::Upcoming]
        } else {
            &[ListKind::NowPlaying, ListKind::Popular]
        }
    }

    /// Merge a partial update into these filters.
    pub fn apply_patch(&mut self, patch: FilterPatch) -> FilterChange {
        let region_before = self.region().to_string();

        if let Some(platforms) = patch.platforms {
            self.platforms = platforms;
        }
        if let Some(genres) = patch.genres {
            self.genres = genres;
        }
        if let Some(years) = patch.years {
            self.years = years;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(latest) = patch.latest {
            self.latest = latest;
        }
        if let Some(region) = patch.region {
            self.region = region;
        }

        FilterChange {
            region_changed: self.region() != region_before,
        }
    }
}

/// A partial filter update. `None` leaves a field untouched; for optional
/// fields `Some(None)` clears them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPatch {
    pub platforms: Option<BTreeSet<String>>,
    pub genres: Option<BTreeSet<GenreId>>,
    pub years: Option<Option<YearRange>>,
    pub rating: Option<Option<f32>>,
    pub latest: Option<bool>,
    pub region: Option<Option<String>>,
}

impl FilterPatch {
    pub fn genres(mut self, genres: impl IntoIterator<Item = GenreId>) -> Self {
        self.genres = Some(genres.into_iter().collect());
        self
    }

    pub fn platforms<S: Into<String>>(mut self, platforms: impl IntoIterator<Item = S>) -> Self {
        self.platforms = Some(platforms.into_iter().map(Into::into).collect());
        self
    }

    pub fn years(mut self, years: Option<YearRange>) -> Self {
        self.years = Some(years);
        self
    }

    pub fn rating(mut self, rating: Option<f32>) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn latest(mut self, latest: bool) -> Self {
        self.latest = Some(latest);
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(Some(region.into()));
        self
    }
}

/// What a patch changed that matters to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterChange {
    /// The effective region differs, so fetched pages are stale
    pub region_changed: bool,
}
