//! Error types for the catalog crate.
//!
//! Mapping raw API records into domain values never fails; these errors
//! only come from lookups against the fixed tables (genres, regions).

use crate::types::GenreId;
use thiserror::Error;

/// Errors raised by catalog lookups
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Genre id is not present in the session's genre table
    #[error("Unknown genre id: {0}")]
    UnknownGenre(GenreId),

    /// Region code is not one of the supported regions
    #[error("Unsupported region code: {0}")]
    UnknownRegion(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
