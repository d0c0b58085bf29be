use thiserror::Error;
use vouch_api::ApiError;
use vouch_crypto::SigningError;

/// Any failure inside a signed flow. `Display` is the user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Signing(#[from] SigningError),
}
