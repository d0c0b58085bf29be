//! Nullable wallet connector.

use std::sync::Arc;

use async_trait::async_trait;
use vouch_crypto::MessageSigner;
use vouch_wallet_core::{WalletConnector, WalletError};

use crate::signer::NullSigner;

/// A connector that hands out a shared [`NullSigner`].
pub struct NullConnector {
    uid: String,
    name: String,
    available: bool,
    signer: Arc<NullSigner>,
}

impl NullConnector {
    pub fn new(uid: impl Into<String>, signer: Arc<NullSigner>) -> Self {
        let uid = uid.into();
        Self {
            name: format!("Null wallet ({uid})"),
            uid,
            available: true,
            signer,
        }
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }
}

#[async_trait]
impl WalletConnector for NullConnector {
    fn uid(&self) -> &str {
        &self.uid
    }

    fn name(&self) -> &str {
        &self.name
    }

    async fn is_available(&self) -> bool {
        self.available
    }

    async fn connect(&self) -> Result<Arc<dyn MessageSigner>, WalletError> {
        Ok(self.signer.clone())
    }
}
