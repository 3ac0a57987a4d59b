//! The seam between the discovery session and the movie database.

use async_trait::async_trait;
use catalog::{Genre, MovieId, MovieProviders, Provider, RawMovieDetails, RawMoviePage};
use sources::ListKind;

use crate::client::TmdbClient;
use crate::error::Result;

/// Everything the discovery flow asks of the movie database.
///
/// Implemented by [`TmdbClient`]; tests substitute canned data.
#[async_trait]
pub trait MovieApi: Send + Sync {
    async fn fetch_page(&self, kind: ListKind, page: u32, region: &str) -> Result<RawMoviePage>;

    async fn fetch_genres(&self) -> Result<Vec<Genre>>;

    async fn fetch_providers(&self, region: &str) -> Result<Vec<Provider>>;

    async fn fetch_movie_providers(&self, movie_id: MovieId) -> Result<MovieProviders>;

    async fn fetch_details(&self, movie_id: MovieId) -> Result<RawMovieDetails>;

    async fn search_movies(&self, query: &str, page: u32) -> Result<RawMoviePage>;
}

#[async_trait]
impl MovieApi for TmdbClient {
    async fn fetch_page(&self, kind: ListKind, page: u32, region: &str) -> Result<RawMoviePage> {
        TmdbClient::fetch_page(self, kind, page, region).await
    }

    async fn fetch_genres(&self) -> Result<Vec<Genre>> {
        TmdbClient::fetch_genres(self).await
    }

    async fn fetch_providers(&self, region: &str) -> Result<Vec<Provider>> {
        TmdbClient::fetch_providers(self, region).await
    }

    async fn fetch_movie_providers(&self, movie_id: MovieId) -> Result<MovieProviders> {
        TmdbClient::fetch_movie_providers(self, movie_id).await
    }

    async fn fetch_details(&self, movie_id: MovieId) -> Result<RawMovieDetails> {
        TmdbClient::fetch_details(self, movie_id).await
    }

    async fn search_movies(&self, query: &str, page: u32) -> Result<RawMoviePage> {
        TmdbClient::search_movies(self, query, page).await
    }
}
