//! Concurrent fetch of everything a session load needs.

use catalog::{Genre, RawMoviePage};
use sources::{ListKind, SourceFailure};
use tmdb_client::MovieApi;
use tracing::{debug, warn};

use crate::session::FetchTicket;

/// Lists fetched on every load. Keeping all three lets the latest-only
/// toggle recompute without another round trip.
pub const SESSION_LISTS: [ListKind; 3] = [ListKind::NowPlaying, ListKind::Popular, ListKind::Upcoming];

/// Everything one fetch round produced, successes and failures alike
#[derive(Debug, Clone, Default)]
pub struct FetchOutcome {
    pub pages: Vec<(ListKind, Result<RawMoviePage, SourceFailure>)>,
    /// `None` when genres were already loaded and not requested
    pub genres: Option<Result<Vec<Genre>, String>>,
}

/// Fetch the session lists (and genres, if the ticket asks) concurrently.
///
/// Never fails as a whole: each list settles on its own.
pub async fn fetch_sources(api: &dyn MovieApi, ticket: &FetchTicket) -> FetchOutcome {
    let region = ticket.region.as_str();
    let page = ticket.page;
    debug!("Fetching page {} for region {} (generation {})", page, region, ticket.generation);

    let (now_playing, popular, upcoming, genres) = tokio::join!(
        api.fetch_page(ListKind::NowPlaying, page, region),
        api.fetch_page(ListKind::Popular, page, region),
        api.fetch_page(ListKind::Upcoming, page, region),
        async {
            if ticket.include_genres {
                Some(api.fetch_genres().await)
            } else {
                None
            }
        }
    );

    let pages = SESSION_LISTS
        .into_iter()
        .zip([now_playing, popular, upcoming])
        .map(|(kind, result)| {
            let settled = result.map_err(|e| {
                warn!("Failed to fetch {} list: {}", kind, e);
                e.to_failure(kind)
            });
            (kind, settled)
        })
        .collect();

    FetchOutcome {
        pages,
        genres: genres.map(|result| result.map_err(|e| e.to_string())),
    }
}
