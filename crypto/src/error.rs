use thiserror::Error;

/// Failures from the signing capability.
///
/// `Rejected` and `Failed` carry the capability's own message, which is
/// shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SigningError {
    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Failed(String),

    #[error("invalid private key: {0}")]
    Key(String),

    #[error("keystore error: {0}")]
    Keystore(String),
}
