//! Errors raised while constructing or normalizing data model values.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    #[error("invalid wallet address: {0}")]
    InvalidAddress(String),

    #[error("timestamp out of range: {0}")]
    InvalidTimestamp(i64),

    #[error("unknown provider: {0}")]
    UnknownProvider(String),
}
