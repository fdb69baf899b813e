use thiserror::Error;

/// Failure taxonomy for the submit flow.
///
/// The advisory input validator never produces one of these; it only moves
/// the per-field indicator. Everything on the authoritative submit path is
/// reported through this enum and shown to the user as a single alert.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Malformed structured-text input or malformed time string.
    #[error("invalid format: {0}")]
    Format(String),

    /// The requested window is empty or inverted.
    #[error("End time must be after start time")]
    Range,

    /// Network failure or non-2xx HTTP status. The message carries the
    /// numeric status code when one was received.
    #[error("{0}")]
    Transport(String),

    /// The service answered 2xx but the body was not parsable JSON.
    #[error("invalid response payload: {0}")]
    Protocol(String),
}
