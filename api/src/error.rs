use thiserror::Error;

/// Errors surfaced by the API client.
///
/// `Network` and `Application` display only the user-facing message;
/// transport details are logged where the error is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response or transport failure.
    #[error("{0}")]
    Network(String),

    /// Structured failure reported in a response body.
    #[error("{0}")]
    Application(String),

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("invalid API configuration: {0}")]
    Config(String),
}
