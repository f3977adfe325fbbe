//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant where they need to surface parse or configuration failures.

use thiserror::Error;

/// The top-level error type for `st-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown transport mode: {0:?}")]
    UnknownMode(String),

    #[error("unknown priority: {0:?}")]
    UnknownPriority(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `st-core`.
pub type CoreResult<T> = Result<T, CoreError>;
