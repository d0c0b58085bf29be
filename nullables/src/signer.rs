//! Nullable signer: records messages and returns predictable signatures.

use std::sync::Mutex;

use async_trait::async_trait;
use vouch_crypto::{MessageSigner, SigningError};
use vouch_types::Address;

/// A signer that "signs" by hex-encoding the message.
///
/// Can be told to reject, as a user declining the wallet prompt would.
pub struct NullSigner {
    address: Address,
    rejection: Mutex<Option<String>>,
    signed: Mutex<Vec<String>>,
}

impl NullSigner {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            rejection: Mutex::new(None),
            signed: Mutex::new(Vec::new()),
        }
    }

    /// The signature this signer produces for `message`.
    pub fn signature_for(message: &str) -> String {
        format!("0x{}", hex::encode(message.as_bytes()))
    }

    /// Reject every following request with `message`.
    pub fn reject_with(&self, message: impl Into<String>) {
        *self.rejection.lock().unwrap() = Some(message.into());
    }

    /// Resume signing.
    pub fn accept(&self) {
        *self.rejection.lock().unwrap() = None;
    }

    /// Messages signed so far, in order.
    pub fn signed_messages(&self) -> Vec<String> {
        self.signed.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageSigner for NullSigner {
    fn address(&self) -> Address {
        self.address.clone()
    }

    async fn sign_message(&self, message: &str) -> Result<String, SigningError> {
        if let Some(reason) = self.rejection.lock().unwrap().clone() {
            return Err(SigningError::Rejected(reason));
        }
        self.signed.lock().unwrap().push(message.to_string());
        Ok(Self::signature_for(message))
    }
}
