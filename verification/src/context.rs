//! Explicit connection context shared by the signed flows.

use std::sync::Arc;

use vouch_api::VerificationApi;
use vouch_crypto::MessageSigner;
use vouch_types::{Address, Clock, SignatureData, Timestamp};

use crate::error::FlowError;

/// Everything a flow needs about the connected wallet and its backend.
#[derive(Clone)]
pub struct FlowContext {
    pub address: Address,
    pub api: Arc<dyn VerificationApi>,
    pub signer: Arc<dyn MessageSigner>,
    pub clock: Arc<dyn Clock>,
}

impl FlowContext {
    pub fn new(
        address: Address,
        api: Arc<dyn VerificationApi>,
        signer: Arc<dyn MessageSigner>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            address,
            api,
            signer,
            clock,
        }
    }

    /// Stamp a message with the current time and sign exactly that string.
    pub async fn sign(
        &self,
        build: impl FnOnce(&Address, Timestamp) -> String,
    ) -> Result<SignatureData, FlowError> {
        let timestamp = self.clock.now();
        let message = build(&self.address, timestamp);
        let signature = self.signer.sign_message(&message).await?;
        Ok(SignatureData {
            message,
            signature,
            timestamp,
        })
    }
}

impl std::fmt::Debug for FlowContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowContext")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
