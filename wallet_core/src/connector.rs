//! The wallet connector seam.

use std::sync::Arc;

use async_trait::async_trait;
use vouch_crypto::MessageSigner;

use crate::error::WalletError;

/// A way of reaching a wallet (browser extension, local key, remote signer).
#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Stable identifier, unique among the configured connectors.
    fn uid(&self) -> &str;

    /// Display name.
    fn name(&self) -> &str;

    /// Whether the underlying provider can be reached right now.
    async fn is_available(&self) -> bool;

    /// Open the wallet and return its signer.
    async fn connect(&self) -> Result<Arc<dyn MessageSigner>, WalletError>;
}
