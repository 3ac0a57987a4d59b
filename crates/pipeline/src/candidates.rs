//! # Candidate aggregation
//!
//! Builds the ordered candidate list shown to the user:
//! 1. Select sources (upcoming only in latest mode, else now playing ++ popular)
//! 2. Map raw records to movies
//! 3. In latest mode, keep only releases strictly after today
//! 4. Deduplicate by movie id, first occurrence wins
//! 5. Apply the content filters (skipped in latest mode)
//!
//! The output keeps source order; it is never re-sorted.

use std::collections::HashSet;

use catalog::{Movie, MovieId, MovieMapper};
use chrono::NaiveDate;
use sources::{ListKind, MovieFilters, Settlement, SourceFailure, SourceSet};
use thiserror::Error;
use tracing::{info, warn};

use crate::filter_pipeline::FilterPipeline;
use crate::filters::UpcomingReleaseFilter;
use crate::traits::Filter;

/// Why no candidate list could be produced
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BuildError {
    /// Some required list has not answered yet
    #[error("Still loading: {0:?}")]
    Loading(Vec<ListKind>),

    /// Every required list failed
    #[error("Failed to load movies: {}", describe_failures(.0))]
    AllSourcesFailed(Vec<SourceFailure>),

    #[error("Filter stage failed: {0}")]
    Filter(String),
}

fn describe_failures(failures: &[SourceFailure]) -> String {
    failures
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// An ordered, deduplicated candidate list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateList {
    pub movies: Vec<Movie>,
    /// Required lists that failed while others succeeded
    pub failures: Vec<SourceFailure>,
}

impl CandidateList {
    /// True if some, but not all, required lists failed
    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// One aggregate message for the failed lists, if any
    pub fn failure_message(&self) -> Option<String> {
        self.is_partial()
            .then(|| format!("Failed to load movies: {}", describe_failures(&self.failures)))
    }
}

/// Turns settled source pages into a candidate list.
pub struct CandidateBuilder {
    mapper: MovieMapper,
    content_filters: FilterPipeline,
}

impl CandidateBuilder {
    pub fn new(mapper: MovieMapper) -> Self {
        Self {
            mapper,
            content_filters: FilterPipeline::content(),
        }
    }

    /// Replace the content filter pipeline (builder pattern)
    pub fn with_content_filters(mut self, pipeline: FilterPipeline) -> Self {
        self.content_filters = pipeline;
        self
    }

    pub fn mapper(&self) -> &MovieMapper {
        &self.mapper
    }

    /// Build the candidate list for `filters` from the current source states.
    ///
    /// # Returns
    /// * `Ok(CandidateList)` - possibly empty, possibly partial
    /// * `Err(BuildError::Loading)` - a required list is still in flight
    /// * `Err(BuildError::AllSourcesFailed)` - no required list loaded
    pub fn build(
        &self,
        sources: &SourceSet,
        filters: &MovieFilters,
        today: NaiveDate,
    ) -> Result<CandidateList, BuildError> {
        let required = filters.required_sources();

        let (pages, failures) = match sources.settle(required) {
            Settlement::Pending(waiting) => return Err(BuildError::Loading(waiting)),
            Settlement::Settled { pages, failures } => (pages, failures),
        };
        let failures: Vec<SourceFailure> = failures.into_iter().cloned().collect();

        if pages.is_empty() {
            return Err(BuildError::AllSourcesFailed(failures));
        }
        if !failures.is_empty() {
            warn!(
                "Partial source failure: {} of {} lists failed",
                failures.len(),
                required.len()
            );
        }

        let mut movies: Vec<Movie> = Vec::new();
        for (_, page) in &pages {
            movies.extend(self.mapper.map_page(page));
        }
        let fetched = movies.len();

        if filters.latest {
            movies = UpcomingReleaseFilter::new(today)
                .apply(movies, filters)
                .map_err(|e| BuildError::Filter(format!("{:#}", e)))?;
        }

        let movies = dedup_by_id(movies);
        let unique = movies.len();

        let movies = if filters.latest {
            movies
        } else {
            self.content_filters
                .apply(movies, filters)
                .map_err(|e| BuildError::Filter(format!("{:#}", e)))?
        };

        info!(
            "Built candidates: fetched={}, unique={}, kept={}, latest={}",
            fetched,
            unique,
            movies.len(),
            filters.latest
        );

        Ok(CandidateList { movies, failures })
    }
}

impl Default for CandidateBuilder {
    fn default() -> Self {
        Self::new(MovieMapper::default())
    }
}

/// Build candidates with the default mapper and content filters.
pub fn build_candidates(
    sources: &SourceSet,
    filters: &MovieFilters,
    today: NaiveDate,
) -> Result<CandidateList, BuildError> {
    CandidateBuilder::default().build(sources, filters, today)
}

/// Remove repeated ids, keeping the first occurrence and the input order.
pub fn dedup_by_id(movies: Vec<Movie>) -> Vec<Movie> {
    let mut seen: HashSet<MovieId> = HashSet::with_capacity(movies.len());
    movies
        .into_iter()
        .filter(|movie| seen.insert(movie.id))
        .collect()
}
