//! Error types surfaced by holiday lookups.

use thiserror::Error;

use feriados_core::date::DateError;

/// Result type alias for lookup operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during a holiday lookup.
///
/// No recovery is attempted anywhere in this crate; every failure is
/// surfaced directly to the caller.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    InvalidDate(#[from] DateError),

    #[error("Year out of range: {0}")]
    InvalidYear(i32),

    #[error("{0}")]
    Api(#[from] ApiError),
}

/// Errors from the remote holiday provider.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Provider returned {status}: {message}")]
    Status { status: u16, message: String },
}
