//! Local key signer backed by `alloy-signer-local`.

use std::path::Path;

use alloy_primitives::B256;
use alloy_signer::Signer as _;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use tracing::debug;
use vouch_types::Address;

use crate::error::SigningError;
use crate::sign::encode_signature;
use crate::signer::MessageSigner;

/// Signs personal messages with a secp256k1 key held in memory.
#[derive(Clone)]
pub struct LocalSigner {
    inner: PrivateKeySigner,
    address: Address,
}

impl LocalSigner {
    fn wrap(inner: PrivateKeySigner) -> Result<Self, SigningError> {
        let address = Address::parse(inner.address().to_checksum(None))
            .map_err(|e| SigningError::Key(e.to_string()))?;
        Ok(Self { inner, address })
    }

    /// Build from a raw 32-byte secret.
    pub fn from_bytes(secret: &[u8; 32]) -> Result<Self, SigningError> {
        let inner = PrivateKeySigner::from_bytes(&B256::from(*secret))
            .map_err(|e| SigningError::Key(e.to_string()))?;
        Self::wrap(inner)
    }

    /// Build from a hex private key, with or without `0x`.
    pub fn from_hex(key: &str) -> Result<Self, SigningError> {
        let inner = key
            .trim()
            .parse::<PrivateKeySigner>()
            .map_err(|e| SigningError::Key(e.to_string()))?;
        Self::wrap(inner)
    }

    /// Decrypt a JSON keystore file.
    pub fn from_keystore(path: impl AsRef<Path>, password: &str) -> Result<Self, SigningError> {
        let path = path.as_ref();
        let inner = PrivateKeySigner::decrypt_keystore(path, password)
            .map_err(|e| SigningError::Keystore(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "decrypted keystore");
        Self::wrap(inner)
    }
}

impl std::fmt::Debug for LocalSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl MessageSigner for LocalSigner {
    fn address(&self) -> Address {
        self.address.clone()
    }

    async fn sign_message(&self, message: &str) -> Result<String, SigningError> {
        let signature = self
            .inner
            .sign_message(message.as_bytes())
            .await
            .map_err(|e| SigningError::Failed(e.to_string()))?;
        Ok(encode_signature(&signature))
    }
}
