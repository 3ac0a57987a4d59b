//! # Catalog Crate
//!
//! Domain types for the movie-discovery engine and the mapping from raw
//! TMDB records into them.
//!
//! ## Main Components
//!
//! - **types**: `Movie`, `Genre`, `Provider`, `MovieDetails` and id aliases
//! - **raw**: serde mirrors of the TMDB JSON bodies
//! - **mapper**: total conversion from raw records to `Movie`
//! - **index**: the per-session genre table and supported regions
//! - **error**: lookup errors
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{MovieMapper, RawMoviePage};
//!
//! let page: RawMoviePage = serde_json::from_str(body)?;
//! let movies = MovieMapper::default().map_page(&page);
//! ```

pub mod error;
pub mod index;
pub mod mapper;
pub mod raw;
pub mod types;

pub use error::{CatalogError, Result};
pub use index::{find_region, GenreTable, SUPPORTED_REGIONS};
pub use mapper::{format_runtime, parse_release_year, MovieMapper};
pub use raw::{GenreList, MovieProviders, ProviderList, RawMovie, RawMovieDetails, RawMoviePage};
pub use types::{
    // Type aliases
    GenreId,
    MovieId,
    ProviderId,
    // Core types
    CastMember,
    Genre,
    Movie,
    MovieDetails,
    Provider,
    Region,
    // Constants
    DEFAULT_IMAGE_BASE_URL,
    DEFAULT_REGION,
    PLACEHOLDER_IMAGE_URL,
};
