//! Sign an arbitrary message with the connected wallet.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{info, warn};
use vouch_crypto::{verify_signature, MessageSigner, SigningError};

use crate::views::SignMessageView;

const SIGN_FAILED: &str = "Failed to sign message";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct SignState {
    loading: bool,
    signature: Option<String>,
    /// Whether `signature` recovers to the signer's address.
    recovered: bool,
    error: Option<String>,
}

pub struct SignMessage {
    signer: Arc<dyn MessageSigner>,
    message: String,
    state: Mutex<SignState>,
}

impl SignMessage {
    pub fn new(signer: Arc<dyn MessageSigner>, message: impl Into<String>) -> Self {
        Self {
            signer,
            message: message.into(),
            state: Mutex::new(SignState::default()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Sign the message. A failure keeps the previous signature and is
    /// stored for inline display.
    pub async fn sign(&self) -> Result<String, SigningError> {
        {
            let mut state = self.lock();
            state.loading = true;
            state.error = None;
        }

        let result = self.signer.sign_message(&self.message).await;

        let mut state = self.lock();
        state.loading = false;
        match &result {
            Ok(signature) => {
                let address = self.signer.address();
                let recovered = verify_signature(&self.message, signature, &address);
                info!(%address, recovered, "message signed");
                state.signature = Some(signature.clone());
                state.recovered = recovered;
            }
            Err(e) => {
                warn!(error = %e, "message signing failed");
                let message = e.to_string();
                state.error = Some(if message.is_empty() {
                    SIGN_FAILED.to_string()
                } else {
                    message
                });
            }
        }
        result
    }

    pub fn view(&self) -> SignMessageView {
        let state = self.lock().clone();
        SignMessageView {
            message: self.message.clone(),
            button: if state.loading { "Signing..." } else { "Sign Message" },
            busy: state.loading,
            signature: state.signature,
            recovered: state.recovered,
            error: state.error,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SignState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
