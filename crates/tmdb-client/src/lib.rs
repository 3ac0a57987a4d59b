//! Async client for The Movie Database (TMDB) v3 API.
//!
//! This crate provides:
//! - `TmdbClient`, a reqwest-based client that sends the API key and
//!   language with every request
//! - Bounded retry with linear backoff for transient failures
//! - Path-aware JSON decoding errors via serde_path_to_error
//! - The `MovieApi` trait the discovery session is written against
//!
//! ## Example Usage
//! ```ignore
//! use tmdb_client::{ClientSettings, MovieApi, TmdbClient};
//! use sources::ListKind;
//!
//! let client = TmdbClient::new(ClientSettings::new(api_key))?;
//! let page = client.fetch_page(ListKind::Popular, 1, "US").await?;
//! ```

pub mod api;
pub mod client;
pub mod error;
mod movies;

pub use api::MovieApi;
pub use client::{ClientSettings, TmdbClient, DEFAULT_BASE_URL, DEFAULT_LANGUAGE};
pub use error::{FetchError, Result};
