//! The explicit connection context.

use std::sync::Arc;

use tracing::info;
use vouch_crypto::MessageSigner;
use vouch_types::Address;

use crate::connector::WalletConnector;
use crate::error::WalletError;

/// An open wallet.
#[derive(Clone)]
pub struct Connection {
    pub address: Address,
    pub connector_uid: String,
    pub signer: Arc<dyn MessageSigner>,
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("address", &self.address)
            .field("connector_uid", &self.connector_uid)
            .finish_non_exhaustive()
    }
}

/// One entry of the connect-wallet list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalletOption {
    pub uid: String,
    pub name: String,
    /// Connect is only offered when the provider is reachable.
    pub ready: bool,
}

/// Wallet connection state, owned by the caller and passed to components.
#[derive(Default)]
pub struct ConnectionContext {
    connectors: Vec<Arc<dyn WalletConnector>>,
    connection: Option<Connection>,
}

impl ConnectionContext {
    pub fn new(connectors: Vec<Arc<dyn WalletConnector>>) -> Self {
        Self {
            connectors,
            connection: None,
        }
    }

    pub fn add_connector(&mut self, connector: Arc<dyn WalletConnector>) {
        self.connectors.push(connector);
    }

    /// Connectors with their current readiness.
    pub async fn options(&self) -> Vec<WalletOption> {
        let mut options = Vec::with_capacity(self.connectors.len());
        for connector in &self.connectors {
            options.push(WalletOption {
                uid: connector.uid().to_string(),
                name: connector.name().to_string(),
                ready: connector.is_available().await,
            });
        }
        options
    }

    /// Connect through the connector with `uid`, replacing any open connection.
    pub async fn connect(&mut self, uid: &str) -> Result<&Connection, WalletError> {
        let connector = self
            .connectors
            .iter()
            .find(|c| c.uid() == uid)
            .cloned()
            .ok_or_else(|| WalletError::UnknownConnector(uid.to_string()))?;
        if !connector.is_available().await {
            return Err(WalletError::Unavailable(connector.name().to_string()));
        }

        let signer = connector.connect().await?;
        let connection = Connection {
            address: signer.address(),
            connector_uid: uid.to_string(),
            signer,
        };
        Ok(&*self.connection.insert(connection))
    }

    /// Close the open connection, if any.
    pub fn disconnect(&mut self) -> Option<Connection> {
        let closed = self.connection.take();
        if let Some(connection) = &closed {
            info!(address = %connection.address, "wallet disconnected");
        }
        closed
    }

    pub fn connection(&self) -> Option<&Connection> {
        self.connection.as_ref()
    }

    /// The open connection, or [`WalletError::NotConnected`].
    pub fn require(&self) -> Result<&Connection, WalletError> {
        self.connection.as_ref().ok_or(WalletError::NotConnected)
    }

    pub fn address(&self) -> Option<&Address> {
        self.connection.as_ref().map(|c| &c.address)
    }

    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local::LocalKeyConnector;

    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn context() -> ConnectionContext {
        ConnectionContext::new(vec![
            Arc::new(LocalKeyConnector::private_key(DEV_KEY)),
            Arc::new(LocalKeyConnector::keystore("/nonexistent/wallet.json", "")),
        ])
    }

    #[tokio::test]
    async fn options_report_readiness() {
        let options = context().options().await;
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].uid, "local-key");
        assert!(options[0].ready);
        assert!(!options[1].ready);
    }

    #[tokio::test]
    async fn connect_and_disconnect() {
        let mut ctx = context();
        assert!(!ctx.is_connected());
        assert_eq!(ctx.require().unwrap_err(), WalletError::NotConnected);

        let address = ctx.connect("local-key").await.unwrap().address.clone();
        assert!(ctx.is_connected());
        assert_eq!(ctx.require().unwrap().connector_uid, "local-key");
        assert_eq!(ctx.address(), Some(&address));

        let closed = ctx.disconnect().unwrap();
        assert_eq!(closed.address, address);
        assert!(ctx.connection().is_none());
        assert!(ctx.disconnect().is_none());
    }

    #[tokio::test]
    async fn connect_rejects_unknown_and_unavailable() {
        let mut ctx = context();
        assert_eq!(
            ctx.connect("metamask").await.unwrap_err(),
            WalletError::UnknownConnector("metamask".into())
        );
        assert_eq!(
            ctx.connect("keystore").await.unwrap_err(),
            WalletError::Unavailable("Keystore (wallet.json)".into())
        );
        assert!(!ctx.is_connected());
    }
}
