//! Wallet message signing for vouch.
//!
//! - [`MessageSigner`] is the seam every signed flow goes through
//! - [`LocalSigner`] signs EIP-191 personal messages with a secp256k1 key
//!   loaded from hex or from an encrypted JSON keystore
//! - [`verify_signature`] recovers the signing address for a message

pub mod error;
pub mod local;
pub mod sign;
pub mod signer;

pub use error::SigningError;
pub use local::LocalSigner;
pub use sign::{encode_signature, verify_signature};
pub use signer::MessageSigner;
