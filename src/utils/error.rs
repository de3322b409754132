//! Error handling for the backend client

use thiserror::Error;

/// Failures produced by the analyze/download endpoints.
///
/// Local input validation never reaches this type; it is reported before any
/// network call is made.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with `success: false` and a message of its own.
    #[error("{0}")]
    Backend(String),

    /// The backend answered with `success: false` but gave no message.
    #[error("backend reported failure without a message")]
    BackendUnspecified,

    /// Non-2xx status whose body carried no decodable error envelope.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The envelope decoded as successful but the expected payload was missing.
    #[error("response envelope missing payload")]
    MissingPayload,

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}
