//! Error types for content loading and contact submission.

use thiserror::Error;

/// Why a slot or partial could not be loaded.
///
/// Every variant is recovered locally: slots fall back to their static
/// markup, partials are logged and left empty.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The request never produced a response.
    #[error("request for {path} failed: {reason}")]
    Transport { path: String, reason: String },

    /// The server answered with a non-success status.
    #[error("request for {path} returned status {status}")]
    Status { path: String, status: u16 },

    /// No response within the configured timeout.
    #[error("request for {path} timed out after {ms}ms")]
    Timeout { path: String, ms: u32 },

    /// The body was not valid JSON, or an item did not match its template.
    #[error("invalid payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// The items field exists but is not a list.
    #[error("malformed payload: {0}")]
    Malformed(String),
}

/// Failure reported by a contact sink.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("could not reach contact endpoint: {0}")]
    Transport(String),

    #[error("contact endpoint rejected the message with status {0}")]
    Rejected(u16),

    #[error("could not encode message: {0}")]
    Encode(String),
}
