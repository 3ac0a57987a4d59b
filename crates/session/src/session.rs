//! # Swipe session
//!
//! Owns every piece of discovery state and performs all transitions
//! synchronously:
//! 1. `begin_fetch` marks the lists loading and hands out a `FetchTicket`
//! 2. The caller runs the fetch and returns the outcome with `apply_fetch`
//! 3. Outcomes from a superseded ticket, or after `close`, are discarded
//! 4. Any change to pages or filters rebuilds the candidate list and
//!    replaces the deck

use std::sync::Arc;

use catalog::{Genre, GenreTable, Movie, MovieMapper, DEFAULT_IMAGE_BASE_URL};
use chrono::{Local, NaiveDate};
use pipeline::{BuildError, CandidateBuilder};
use sources::{FilterPatch, MovieFilters, SourceSet};
use swipe::{DeckState, DragFrame, DragTracker, SwipeDeck};
use tracing::{debug, info, warn};

use crate::fetch::{FetchOutcome, SESSION_LISTS};
use crate::view::{Phase, SessionView};

/// Source of "today" for latest-only filtering
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub image_base_url: String,
    pub viewport_width: f32,
    /// Page requested from every list
    pub page: u32,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            viewport_width: 400.0,
            page: 1,
        }
    }
}

/// Permission to apply one fetch round. Only the newest ticket is honoured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub region: String,
    pub page: u32,
    pub include_genres: bool,
}

#[derive(Debug, Clone, PartialEq)]
enum BuildStatus {
    Loading,
    Ready { partial: Option<String> },
    Failed(String),
}

pub struct SwipeSession {
    filters: MovieFilters,
    sources: SourceSet,
    genres: Option<GenreTable>,
    builder: CandidateBuilder,
    deck: SwipeDeck<Movie>,
    drag: DragTracker,
    settings: SessionSettings,
    status: BuildStatus,
    generation: u64,
    closed: bool,
    clock: Clock,
}

impl SwipeSession {
    pub fn new(filters: MovieFilters, settings: SessionSettings) -> Self {
        let builder = CandidateBuilder::new(MovieMapper::new(settings.image_base_url.clone()));
        Self {
            filters,
            sources: SourceSet::new(),
            genres: None,
            builder,
            deck: SwipeDeck::default(),
            drag: DragTracker::new(settings.viewport_width),
            settings,
            status: BuildStatus::Loading,
            generation: 0,
            closed: false,
            clock: Arc::new(|| Local::now().date_naive()),
        }
    }

    /// Replace the clock (builder pattern)
    pub fn with_clock(mut self, clock: impl Fn() -> NaiveDate + Send + Sync + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    // ------------------------------------------------------------------
    // Fetch lifecycle
    // ------------------------------------------------------------------

    /// Start a new fetch round, superseding any round still in flight.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.sources.clear();
        self.sources.mark_loading(&SESSION_LISTS);
        self.status = BuildStatus::Loading;
        self.deck.replace(Vec::new());

        let ticket = FetchTicket {
            generation: self.generation,
            region: self.filters.region().to_string(),
            page: self.settings.page,
            include_genres: self.genres.is_none(),
        };
        debug!("Issued fetch ticket {:?}", ticket);
        ticket
    }

    /// Apply a finished fetch round.
    ///
    /// Returns false, changing nothing, if the ticket was superseded or
    /// the session is closed.
    pub fn apply_fetch(&mut self, ticket: FetchTicket, outcome: FetchOutcome) -> bool {
        if self.closed || ticket.generation != self.generation {
            debug!(
                "Discarding stale fetch (generation {}, current {}, closed={})",
                ticket.generation, self.generation, self.closed
            );
            return false;
        }

        for (kind, result) in outcome.pages {
            match result {
                Ok(page) => self.sources.set_ready(kind, page),
                Err(failure) => self.sources.set_failed(failure),
            }
        }

        match outcome.genres {
            Some(Ok(genres)) if !genres.is_empty() => self.set_genres(genres),
            Some(Ok(_)) => self.set_fallback_genres("empty genre list"),
            Some(Err(message)) => self.set_fallback_genres(&message),
            None => {}
        }

        self.recompute();
        true
    }

    /// Re-fetch every list for the current region.
    pub fn refresh(&mut self) -> Option<FetchTicket> {
        if self.closed {
            return None;
        }
        Some(self.begin_fetch())
    }

    /// Merge a filter change. A region change invalidates the fetched pages
    /// and returns a ticket for the refetch; anything else recomputes in place.
    /// A patch that leaves the filters as they were changes nothing.
    pub fn update_filters(&mut self, patch: FilterPatch) -> Option<FetchTicket> {
        if self.closed {
            return None;
        }
        let previous = self.filters.clone();
        let change = self.filters.apply_patch(patch);
        if self.filters == previous {
            debug!("Filter patch left filters unchanged");
            return None;
        }
        if change.region_changed {
            info!("Region changed to {}, refetching", self.filters.region());
            return Some(self.begin_fetch());
        }
        self.recompute();
        None
    }

    /// Tear down: every outstanding ticket becomes stale.
    pub fn close(&mut self) {
        self.closed = true;
        self.generation += 1;
        debug!("Session closed at generation {}", self.generation);
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn set_genres(&mut self, genres: Vec<Genre>) {
        let table = GenreTable::from_genres(genres);
        info!("Loaded {} genres", table.len());
        self.genres = Some(table);
    }

    fn set_fallback_genres(&mut self, reason: &str) {
        warn!("Using built-in genres: {}", reason);
        self.genres = Some(GenreTable::fallback());
    }

    fn recompute(&mut self) {
        let today = (self.clock)();
        match self.builder.build(&self.sources, &self.filters, today) {
            Ok(list) => {
                let partial = list.failure_message();
                self.deck.replace(list.movies);
                self.status = BuildStatus::Ready { partial };
            }
            Err(BuildError::Loading(waiting)) => {
                debug!("Waiting on {:?}", waiting);
                self.deck.replace(Vec::new());
                self.status = BuildStatus::Loading;
            }
            Err(e) => {
                warn!("{}", e);
                self.deck.replace(Vec::new());
                self.status = BuildStatus::Failed(e.to_string());
            }
        }
    }

    // ------------------------------------------------------------------
    // Decisions
    // ------------------------------------------------------------------

    pub fn accept(&mut self) -> Option<DeckState> {
        let state = self.deck.accept();
        if let Some(movie) = state.and(self.deck.current()) {
            info!("Matched with {} ({})", movie.title, movie.id);
        }
        state
    }

    pub fn reject(&mut self) -> Option<DeckState> {
        self.deck.reject()
    }

    pub fn continue_swiping(&mut self) -> Option<DeckState> {
        self.deck.continue_swiping()
    }

    pub fn close_match(&mut self) -> Option<DeckState> {
        self.deck.close_match()
    }

    pub fn drag_update(&self, dx: f32, dy: f32) -> DragFrame {
        self.drag.on_drag_update(dx, dy)
    }

    /// Release the card; a drag past the threshold decides.
    pub fn drag_end(&mut self, dx: f32, dy: f32) -> Option<DeckState> {
        let decision = self.drag.on_drag_end(dx, dy)?;
        match decision {
            swipe::Decision::Accept => self.accept(),
            swipe::Decision::Reject => self.reject(),
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn filters(&self) -> &MovieFilters {
        &self.filters
    }

    pub fn genres(&self) -> Option<&GenreTable> {
        self.genres.as_ref()
    }

    pub fn mapper(&self) -> &MovieMapper {
        self.builder.mapper()
    }

    pub fn candidates(&self) -> &[Movie] {
        self.deck.items()
    }

    pub fn current(&self) -> Option<&Movie> {
        self.deck.current()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn view(&self) -> SessionView {
        let (phase, error, partial) = match &self.status {
            BuildStatus::Loading => (Phase::Loading, None, false),
            BuildStatus::Failed(message) => (Phase::Error, Some(message.clone()), false),
            BuildStatus::Ready { partial } => {
                let phase = if self.deck.is_empty() {
                    Phase::Empty
                } else if self.deck.is_matched() {
                    Phase::Matched
                } else {
                    Phase::Presenting
                };
                (phase, partial.clone(), partial.is_some())
            }
        };

        let current = self.deck.current().cloned();
        let genres = match (&current, &self.genres) {
            (Some(movie), Some(table)) => {
                table.names_for(movie).into_iter().map(str::to_string).collect()
            }
            _ => Vec::new(),
        };

        SessionView {
            phase,
            current,
            genres,
            cursor: self.deck.cursor(),
            total: self.deck.len(),
            loading: phase == Phase::Loading,
            error,
            matched: self.deck.is_matched(),
            partial,
            region: self.filters.region().to_string(),
        }
    }
}
