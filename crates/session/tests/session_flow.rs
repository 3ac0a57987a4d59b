//! End-to-end session tests against a stub movie API.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use catalog::{
    Genre, MovieId, MovieProviders, Provider, RawMovie, RawMovieDetails, RawMoviePage,
};
use chrono::NaiveDate;
use session::{DiscoveryOrchestrator, Phase, SessionSettings, SwipeSession};
use sources::{FilterPatch, ListKind, MovieFilters, YearRange};
use swipe::DeckState;
use tmdb_client::{FetchError, MovieApi, Result};

// ============================================================================
// Stub API
// ============================================================================

/// Canned list pages keyed by list, with injectable failures.
#[derive(Default)]
struct StubApi {
    lists: HashMap<ListKind, Vec<RawMovie>>,
    failing: Vec<ListKind>,
    genres_fail: bool,
    page_calls: AtomicUsize,
    genre_calls: AtomicUsize,
    regions: Mutex<Vec<String>>,
}

impl StubApi {
    fn with_list(mut self, kind: ListKind, movies: Vec<RawMovie>) -> Self {
        self.lists.insert(kind, movies);
        self
    }

    fn failing(mut self, kind: ListKind) -> Self {
        self.failing.push(kind);
        self
    }
}

#[async_trait]
impl MovieApi for StubApi {
    async fn fetch_page(&self, kind: ListKind, page: u32, region: &str) -> Result<RawMoviePage> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        self.regions.lock().unwrap().push(region.to_string());
        if self.failing.contains(&kind) {
            return Err(FetchError::Http {
                status: 500,
                message: format!("{} unavailable", kind),
            });
        }
        let results: Vec<RawMovie> = self
            .lists
            .get(&kind)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(|mut m| {
                m.title = format!("{} [{}]", m.title, region);
                m
            })
            .collect();
        Ok(RawMoviePage {
            page,
            total_results: results.len() as u32,
            results,
            total_pages: 1,
        })
    }

    async fn fetch_genres(&self) -> Result<Vec<Genre>> {
        self.genre_calls.fetch_add(1, Ordering::SeqCst);
        if self.genres_fail {
            return Err(FetchError::Http {
                status: 503,
                message: "genres unavailable".to_string(),
            });
        }
        Ok(vec![
            Genre { id: 28, name: "Action".to_string() },
            Genre { id: 35, name: "Comedy".to_string() },
        ])
    }

    async fn fetch_providers(&self, _region: &str) -> Result<Vec<Provider>> {
        Ok(vec![Provider {
            provider_id: 8,
            provider_name: "Netflix".to_string(),
            logo_path: None,
            display_priority: Some(1),
        }])
    }

    async fn fetch_movie_providers(&self, _movie_id: MovieId) -> Result<MovieProviders> {
        let body = r#"{"results":{"GB":{"flatrate":[
            {"provider_id":337,"provider_name":"Disney Plus","display_priority":2},
            {"provider_id":8,"provider_name":"Netflix","display_priority":1}
        ]}}}"#;
        Ok(serde_json::from_str(body).unwrap())
    }

    async fn fetch_details(&self, movie_id: MovieId) -> Result<RawMovieDetails> {
        Ok(RawMovieDetails {
            movie: movie(movie_id, &[28], 8.0, "2001-01-01"),
            runtime: Some(45),
            ..RawMovieDetails::default()
        })
    }

    async fn search_movies(&self, query: &str, page: u32) -> Result<RawMoviePage> {
        Ok(RawMoviePage {
            page,
            results: vec![RawMovie {
                title: query.to_string(),
                ..movie(77, &[], 6.0, "2010-10-10")
            }],
            total_pages: 1,
            total_results: 1,
        })
    }
}

// ============================================================================
// Fixtures
// ============================================================================

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn movie(id: MovieId, genres: &[u32], vote_average: f64, release_date: &str) -> RawMovie {
    RawMovie {
        id,
        title: format!("Movie {}", id),
        backdrop_path: Some(format!("/{}.jpg", id)),
        release_date: Some(release_date.to_string()),
        vote_average,
        genre_ids: genres.to_vec(),
        ..RawMovie::default()
    }
}

fn default_api() -> StubApi {
    StubApi::default()
        .with_list(
            ListKind::NowPlaying,
            vec![
                movie(1, &[28], 8.0, "2024-03-01"),
                movie(2, &[35], 6.0, "1998-07-01"),
            ],
        )
        .with_list(
            ListKind::Popular,
            vec![
                movie(2, &[35], 6.0, "1998-07-01"),
                movie(3, &[28, 35], 7.0, "2010-01-01"),
            ],
        )
        .with_list(
            ListKind::Upcoming,
            vec![
                movie(10, &[18], 0.0, "2026-10-10"),
                movie(11, &[18], 0.0, "2026-12-24"),
            ],
        )
}

fn orchestrator(api: StubApi, filters: MovieFilters) -> (DiscoveryOrchestrator, Arc<StubApi>) {
    let api = Arc::new(api);
    let session = SwipeSession::new(filters, SessionSettings::default()).with_clock(today);
    (DiscoveryOrchestrator::new(api.clone(), session), api)
}

fn candidate_ids(orchestrator: &DiscoveryOrchestrator) -> Vec<MovieId> {
    orchestrator
        .session()
        .candidates()
        .iter()
        .map(|m| m.id)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_load_presents_deduplicated_candidates() {
    let (mut orchestrator, api) = orchestrator(default_api(), MovieFilters::default());

    assert!(orchestrator.load().await);
    assert_eq!(candidate_ids(&orchestrator), vec![1, 2, 3]);
    assert_eq!(api.page_calls.load(Ordering::SeqCst), 3);
    assert_eq!(api.genre_calls.load(Ordering::SeqCst), 1);

    let view = orchestrator.session().view();
    assert_eq!(view.phase, Phase::Presenting);
    assert!(!view.loading);
    assert_eq!(view.error, None);
    assert_eq!(view.genres, vec!["Action".to_string()]);
    assert_eq!(view.current.unwrap().title, "Movie 1 [US]");
}

#[tokio::test]
async fn test_every_request_carries_region() {
    let filters = MovieFilters {
        region: Some("FR".to_string()),
        ..MovieFilters::default()
    };
    let (mut orchestrator, api) = orchestrator(default_api(), filters);
    orchestrator.load().await;

    let regions = api.regions.lock().unwrap().clone();
    assert_eq!(regions.len(), 3);
    assert!(regions.iter().all(|r| r == "FR"));
}

#[tokio::test]
async fn test_filter_change_recomputes_without_refetch() {
    let (mut orchestrator, api) = orchestrator(default_api(), MovieFilters::default());
    orchestrator.load().await;
    orchestrator.session_mut().reject();

    assert!(
        orchestrator
            .update_filters(FilterPatch::default().genres([28]))
            .await
    );
    assert_eq!(candidate_ids(&orchestrator), vec![1, 3]);
    assert_eq!(orchestrator.session().view().cursor, Some(0));
    assert_eq!(api.page_calls.load(Ordering::SeqCst), 3);

    orchestrator
        .update_filters(
            FilterPatch::default()
                .genres(Vec::new())
                .years(Some(YearRange::new(2000, 2020)))
                .rating(Some(3.5)),
        )
        .await;
    assert_eq!(candidate_ids(&orchestrator), vec![3]);
}

#[tokio::test]
async fn test_region_change_refetches() {
    let (mut orchestrator, api) = orchestrator(default_api(), MovieFilters::default());
    orchestrator.load().await;

    assert!(orchestrator.update_filters(FilterPatch::default().region("GB")).await);
    assert_eq!(api.page_calls.load(Ordering::SeqCst), 6);
    // Genres are fetched once per session
    assert_eq!(api.genre_calls.load(Ordering::SeqCst), 1);

    let view = orchestrator.session().view();
    assert_eq!(view.region, "GB");
    assert_eq!(view.current.unwrap().title, "Movie 1 [GB]");
}

#[tokio::test]
async fn test_latest_toggle_shows_only_future_upcoming() {
    let (mut orchestrator, api) = orchestrator(default_api(), MovieFilters::default());
    orchestrator.load().await;

    orchestrator
        .update_filters(FilterPatch::default().latest(true).genres([28]).rating(Some(5.0)))
        .await;
    assert_eq!(candidate_ids(&orchestrator), vec![11]);
    assert_eq!(api.page_calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_partial_failure_keeps_data_and_reports() {
    let api = default_api().failing(ListKind::Popular);
    let (mut orchestrator, _) = orchestrator(api, MovieFilters::default());
    orchestrator.load().await;

    let view = orchestrator.session().view();
    assert_eq!(view.phase, Phase::Presenting);
    assert!(view.partial);
    assert!(view.error.unwrap().contains("popular unavailable"));
    assert_eq!(candidate_ids(&orchestrator), vec![1, 2]);
}

#[tokio::test]
async fn test_total_failure_is_an_error_and_refresh_retries() {
    let api = default_api()
        .failing(ListKind::NowPlaying)
        .failing(ListKind::Popular);
    let (mut orchestrator, api) = orchestrator(api, MovieFilters::default());
    orchestrator.load().await;

    let view = orchestrator.session().view();
    assert_eq!(view.phase, Phase::Error);
    assert_eq!(view.current, None);
    assert!(view.error.is_some());

    // Decisions without a candidate do nothing
    assert_eq!(orchestrator.session_mut().accept(), None);
    assert_eq!(orchestrator.session_mut().reject(), None);

    assert!(orchestrator.refresh().await);
    assert_eq!(api.page_calls.load(Ordering::SeqCst), 6);
    assert_eq!(orchestrator.session().view().phase, Phase::Error);
}

#[tokio::test]
async fn test_no_match_is_empty_not_error() {
    let (mut orchestrator, _) = orchestrator(default_api(), MovieFilters::default());
    orchestrator.load().await;
    orchestrator
        .update_filters(FilterPatch::default().genres([99]))
        .await;

    let view = orchestrator.session().view();
    assert_eq!(view.phase, Phase::Empty);
    assert_eq!(view.error, None);
    assert_eq!(view.summary(), "No movies match your filters");
}

#[tokio::test]
async fn test_genre_failure_uses_fallback_table() {
    let api = StubApi {
        genres_fail: true,
        ..default_api()
    };
    let (mut orchestrator, _) = orchestrator(api, MovieFilters::default());
    orchestrator.load().await;

    let genres = orchestrator.session().genres().unwrap();
    assert_eq!(genres.get(28).map(|g| g.name.as_str()), Some("Action"));
    assert_eq!(orchestrator.session().view().phase, Phase::Presenting);
}

#[tokio::test]
async fn test_accept_then_continue_advances_by_one() {
    let (mut orchestrator, _) = orchestrator(default_api(), MovieFilters::default());
    orchestrator.load().await;
    let session = orchestrator.session_mut();

    assert_eq!(session.reject(), Some(DeckState::Presenting(1)));
    assert_eq!(session.accept(), Some(DeckState::Matched(1)));
    let view = session.view();
    assert_eq!(view.phase, Phase::Matched);
    assert!(view.matched);

    assert_eq!(session.continue_swiping(), Some(DeckState::Presenting(2)));
    assert!(!session.view().matched);

    // Wraps back to the first candidate
    assert_eq!(session.reject(), Some(DeckState::Presenting(0)));
}

#[tokio::test]
async fn test_closed_session_ignores_refresh() {
    let (mut orchestrator, api) = orchestrator(default_api(), MovieFilters::default());
    orchestrator.load().await;
    orchestrator.session_mut().close();

    assert!(!orchestrator.refresh().await);
    assert!(!orchestrator.update_filters(FilterPatch::default().genres([28])).await);
    assert_eq!(api.page_calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_lookups_use_session_region_and_mapper() {
    let filters = MovieFilters {
        region: Some("GB".to_string()),
        ..MovieFilters::default()
    };
    let (mut orchestrator, _) = orchestrator(default_api(), filters);
    orchestrator.load().await;

    let current = orchestrator.session().current().cloned().unwrap();
    let with_platforms = orchestrator.with_platforms(current).await.unwrap();
    assert_eq!(
        with_platforms.platforms,
        Some(vec!["Netflix".to_string(), "Disney Plus".to_string()])
    );

    let details = orchestrator.details(42).await.unwrap();
    assert_eq!(details.duration.as_deref(), Some("45m"));
    assert!((details.movie.rating - 4.0).abs() < f32::EPSILON);

    let found = orchestrator.search("heat", 1).await.unwrap();
    assert_eq!(found[0].title, "heat");
    assert_eq!(found[0].year, 2010);
}
