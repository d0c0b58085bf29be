//! The signing seam.

use async_trait::async_trait;
use vouch_types::Address;

use crate::error::SigningError;

/// Something that can sign a text message on behalf of a wallet address.
///
/// Implementations may prompt a user; a refusal surfaces as
/// [`SigningError::Rejected`].
#[async_trait]
pub trait MessageSigner: Send + Sync {
    /// The address whose key produces the signatures.
    fn address(&self) -> Address;

    /// Sign `message` exactly as given, returning a `0x`-prefixed hex signature.
    async fn sign_message(&self, message: &str) -> Result<String, SigningError>;
}
