//! Connector backed by a locally held secp256k1 key.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use vouch_crypto::{LocalSigner, MessageSigner, SigningError};

use crate::connector::WalletConnector;
use crate::error::WalletError;

/// Where the key comes from.
#[derive(Clone)]
pub enum KeySource {
    /// Hex-encoded private key.
    PrivateKey(String),
    /// Encrypted JSON keystore and its password.
    Keystore { path: PathBuf, password: String },
}

impl std::fmt::Debug for KeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeySource::PrivateKey(_) => f.write_str("PrivateKey(..)"),
            KeySource::Keystore { path, .. } => {
                f.debug_struct("Keystore").field("path", path).finish_non_exhaustive()
            }
        }
    }
}

#[derive(Clone, Debug)]
pub struct LocalKeyConnector {
    uid: String,
    name: String,
    source: KeySource,
}

impl LocalKeyConnector {
    pub fn new(uid: impl Into<String>, name: impl Into<String>, source: KeySource) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
            source,
        }
    }

    pub fn private_key(key: impl Into<String>) -> Self {
        Self::new("local-key", "Local key", KeySource::PrivateKey(key.into()))
    }

    pub fn keystore(path: impl Into<PathBuf>, password: impl Into<String>) -> Self {
        let path = path.into();
        let name = match path.file_name() {
            Some(file) => format!("Keystore ({})", file.to_string_lossy()),
            None => "Keystore".to_string(),
        };
        Self::new(
            "keystore",
            name,
            KeySource::Keystore {
                path,
                password: password.into(),
            },
        )
    }

    fn load(&self) -> Result<LocalSigner, SigningError> {
        match &self.source {
            KeySource::PrivateKey(key) => LocalSigner::from_hex(key),
            KeySource::Keystore { path, password } => LocalSigner::from_keystore(path, password),
        }
    }
}

#[async_trait]
impl WalletConnector for LocalKeyConnector {
    fn uid(&self) -> &str {
        &self.uid
    }

    fn name(&self) -> &str {
        &self.name
    }

    async fn is_available(&self) -> bool {
        match &self.source {
            KeySource::PrivateKey(key) => LocalSigner::from_hex(key).is_ok(),
            KeySource::Keystore { path, .. } => path.is_file(),
        }
    }

    async fn connect(&self) -> Result<Arc<dyn MessageSigner>, WalletError> {
        let signer = self.load()?;
        info!(connector = %self.uid, address = %signer.address(), "wallet connected");
        Ok(Arc::new(signer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[tokio::test]
    async fn private_key_connector_yields_signer() {
        let connector = LocalKeyConnector::private_key(DEV_KEY);
        assert!(connector.is_available().await);
        let signer = connector.connect().await.unwrap();
        assert_eq!(
            signer.address().as_str(),
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        );
    }

    #[tokio::test]
    async fn bad_private_key_is_unavailable() {
        let connector = LocalKeyConnector::private_key("0xnope");
        assert!(!connector.is_available().await);
        assert!(matches!(
            connector.connect().await,
            Err(WalletError::Signing(SigningError::Key(_)))
        ));
    }

    #[tokio::test]
    async fn keystore_connector_decrypts_and_connects() {
        let dir = tempfile::tempdir().unwrap();
        let secret = hex::decode(&DEV_KEY[2..]).unwrap();
        alloy_signer_local::PrivateKeySigner::encrypt_keystore(
            dir.path(),
            &mut rand::thread_rng(),
            secret,
            "pw",
            Some("wallet.json"),
        )
        .unwrap();
        let path = dir.path().join("wallet.json");

        let connector = LocalKeyConnector::keystore(&path, "pw");
        assert!(connector.is_available().await);
        let signer = connector.connect().await.unwrap();
        assert_eq!(
            signer.address().as_str(),
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        );

        let wrong = LocalKeyConnector::keystore(&path, "not-pw");
        assert!(matches!(
            wrong.connect().await,
            Err(WalletError::Signing(SigningError::Keystore(_)))
        ));
    }

    #[tokio::test]
    async fn missing_keystore_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let connector = LocalKeyConnector::keystore(dir.path().join("wallet.json"), "pw");
        assert_eq!(connector.name(), "Keystore (wallet.json)");
        assert!(!connector.is_available().await);
    }

    #[test]
    fn debug_hides_secrets() {
        let rendered = format!("{:?}", LocalKeyConnector::private_key(DEV_KEY));
        assert!(!rendered.contains("ac0974"));
        let rendered = format!("{:?}", LocalKeyConnector::keystore("/tmp/k.json", "hunter2"));
        assert!(!rendered.contains("hunter2"));
    }
}
