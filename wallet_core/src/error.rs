use thiserror::Error;
use vouch_crypto::SigningError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("unknown wallet connector: {0}")]
    UnknownConnector(String),

    #[error("wallet connector {0} is not available")]
    Unavailable(String),

    #[error("no wallet connected")]
    NotConnected,

    #[error(transparent)]
    Signing(#[from] SigningError),
}
