//! # Discovery Orchestrator
//!
//! Drives a `SwipeSession` against a `MovieApi`:
//! 1. Take a fetch ticket from the session
//! 2. Fetch the lists and genres concurrently
//! 3. Hand the outcome back; the session rebuilds candidates
//!
//! Lookups outside the swipe flow (details, providers, search) go straight
//! to the API and are mapped with the session's mapper.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use catalog::{Movie, MovieDetails, MovieId, Provider};
use sources::FilterPatch;
use tmdb_client::MovieApi;
use tracing::info;

use crate::fetch::fetch_sources;
use crate::session::{FetchTicket, SwipeSession};

pub struct DiscoveryOrchestrator {
    api: Arc<dyn MovieApi>,
    session: SwipeSession,
}

impl DiscoveryOrchestrator {
    pub fn new(api: Arc<dyn MovieApi>, session: SwipeSession) -> Self {
        Self { api, session }
    }

    /// Initial load. Returns true if the results were applied.
    pub async fn load(&mut self) -> bool {
        let ticket = self.session.begin_fetch();
        self.run(ticket).await
    }

    /// Manual retry after an error, or a plain reload.
    pub async fn refresh(&mut self) -> bool {
        match self.session.refresh() {
            Some(ticket) => self.run(ticket).await,
            None => false,
        }
    }

    /// Apply a filter change, refetching only when the region moved.
    pub async fn update_filters(&mut self, patch: FilterPatch) -> bool {
        match self.session.update_filters(patch) {
            Some(ticket) => self.run(ticket).await,
            None => !self.session.is_closed(),
        }
    }

    async fn run(&mut self, ticket: FetchTicket) -> bool {
        let start_time = Instant::now();
        let region = ticket.region.clone();

        let outcome = fetch_sources(self.api.as_ref(), &ticket).await;
        let applied = self.session.apply_fetch(ticket, outcome);

        let view = self.session.view();
        info!(
            "Load for region {} finished in {:.2?}: phase={:?}, candidates={}, applied={}",
            region,
            start_time.elapsed(),
            view.phase,
            view.total,
            applied
        );
        applied
    }

    /// Full details for one movie
    pub async fn details(&self, movie_id: MovieId) -> Result<MovieDetails> {
        let raw = self
            .api
            .fetch_details(movie_id)
            .await
            .with_context(|| format!("Failed to fetch details for movie {}", movie_id))?;
        Ok(self.session.mapper().map_details(&raw))
    }

    /// Attach the subscription platforms available in the session's region
    pub async fn with_platforms(&self, movie: Movie) -> Result<Movie> {
        let providers = self
            .api
            .fetch_movie_providers(movie.id)
            .await
            .with_context(|| format!("Failed to fetch providers for movie {}", movie.id))?;
        let names = providers.flatrate_names(self.session.filters().region());
        Ok(movie.with_platforms(names))
    }

    /// Streaming providers in the session's region
    pub async fn providers(&self) -> Result<Vec<Provider>> {
        let region = self.session.filters().region();
        self.api
            .fetch_providers(region)
            .await
            .with_context(|| format!("Failed to fetch providers for region {}", region))
    }

    pub async fn search(&self, query: &str, page: u32) -> Result<Vec<Movie>> {
        let results = self
            .api
            .search_movies(query, page)
            .await
            .with_context(|| format!("Search for {:?} failed", query))?;
        Ok(self.session.mapper().map_page(&results))
    }

    pub fn session(&self) -> &SwipeSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SwipeSession {
        &mut self.session
    }

    pub fn into_session(self) -> SwipeSession {
        self.session
    }
}
