//! Error types for skinview

use thiserror::Error;

/// Main error type for skinview operations
///
/// No-match outcomes (a name pattern or tag matching zero nodes) are not
/// errors; they are signalled through zero counts so callers can decide
/// whether an absent sub-mesh is acceptable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no asset is loaded")]
    NotLoaded,

    #[error("unknown material variant: {0}")]
    UnknownVariant(String),
}

/// Result type alias for skinview operations
pub type Result<T> = std::result::Result<T, Error>;
