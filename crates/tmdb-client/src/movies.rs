//! Movie list, lookup and detail endpoints.

use catalog::{Genre, GenreList, MovieId, MovieProviders, Provider, ProviderList, RawMovieDetails, RawMoviePage};
use sources::ListKind;
use tracing::{info, instrument};

use crate::client::TmdbClient;
use crate::error::Result;

impl TmdbClient {
    /// Fetch one page of a movie list for a region.
    ///
    /// GET /movie/{now_playing|popular|upcoming|top_rated}
    #[instrument(skip(self))]
    pub async fn fetch_page(&self, kind: ListKind, page: u32, region: &str) -> Result<RawMoviePage> {
        let page_param = page.max(1).to_string();
        let result: RawMoviePage = self
            .get_json(kind.path(), &[("page", page_param.as_str()), ("region", region)])
            .await?;
        info!(
            "Fetched {} list page {}/{}: {} results",
            kind,
            result.page,
            result.total_pages,
            result.results.len()
        );
        Ok(result)
    }

    /// GET /genre/movie/list
    #[instrument(skip(self))]
    pub async fn fetch_genres(&self) -> Result<Vec<Genre>> {
        let list: GenreList = self.get_json("/genre/movie/list", &[]).await?;
        Ok(list.genres)
    }

    /// Streaming providers available in a region.
    ///
    /// GET /watch/providers/movie
    #[instrument(skip(self))]
    pub async fn fetch_providers(&self, region: &str) -> Result<Vec<Provider>> {
        let list: ProviderList = self
            .get_json("/watch/providers/movie", &[("watch_region", region)])
            .await?;
        Ok(list.results)
    }

    /// Where one movie can be watched, for every region.
    ///
    /// GET /movie/{movie_id}/watch/providers
    #[instrument(skip(self))]
    pub async fn fetch_movie_providers(&self, movie_id: MovieId) -> Result<MovieProviders> {
        self.get_json(&format!("/movie/{}/watch/providers", movie_id), &[])
            .await
    }

    /// Movie details with credits and videos appended.
    ///
    /// GET /movie/{movie_id}
    #[instrument(skip(self))]
    pub async fn fetch_details(&self, movie_id: MovieId) -> Result<RawMovieDetails> {
        self.get_json(
            &format!("/movie/{}", movie_id),
            &[("append_to_response", "videos,credits")],
        )
        .await
    }

    /// GET /search/movie
    #[instrument(skip(self))]
    pub async fn search_movies(&self, query: &str, page: u32) -> Result<RawMoviePage> {
        let page_param = page.max(1).to_string();
        self.get_json(
            "/search/movie",
            &[
                ("query", query),
                ("page", page_param.as_str()),
                ("include_adult", "false"),
            ],
        )
        .await
    }
}
