//! Spatial-subsystem error type.

use serde::Deserialize;
use thiserror::Error;

/// Errors produced by `st-spatial` collaborators.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("a route needs at least two waypoints, got {0}")]
    TooFewWaypoints(usize),

    /// Structured error payload returned by the directions provider.
    #[error("directions API error (code {code}): {message}")]
    Api { code: u32, message: String },

    /// Non-success response whose body was not the expected error JSON.
    #[error("unstructured directions API error: {0}")]
    RawApi(String),

    #[error("provider response contained no route")]
    EmptyRoute,

    #[error("invalid coordinate in provider response: {0}")]
    BadCoordinate(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to parse provider response: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type SpatialResult<T> = Result<T, SpatialError>;

// OpenRouteService error body: `{"error": {"code": 2010, "message": "..."}}`.
#[derive(Deserialize, Debug)]
pub(crate) struct OrsErrorDetail {
    pub code: u32,
    pub message: String,
}

#[derive(Deserialize, Debug)]
pub(crate) struct OrsErrorPayload {
    pub error: OrsErrorDetail,
}

impl SpatialError {
    /// Classify a non-success provider body.
    pub(crate) fn from_error_body(body: &str) -> SpatialError {
        match serde_json::from_str::<OrsErrorPayload>(body) {
            Ok(payload) => SpatialError::Api {
                code:    payload.error.code,
                message: payload.error.message,
            },
            Err(_) => SpatialError::RawApi(body.to_string()),
        }
    }
}
