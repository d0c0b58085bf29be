//! Wallet connection for vouch.
//!
//! Provides everything the page needs about the user's wallet:
//! - Connectors and their readiness (the "wallet options" list)
//! - A local-key connector backed by a hex key or a JSON keystore
//! - The [`ConnectionContext`] passed explicitly to components instead of
//!   ambient global wallet state
//! - The mini-app host readiness seam

pub mod connection;
pub mod connector;
pub mod error;
pub mod host;
pub mod local;

pub use connection::{Connection, ConnectionContext, WalletOption};
pub use connector::WalletConnector;
pub use error::WalletError;
pub use host::{HostError, MiniAppHost, StandaloneHost};
pub use local::{KeySource, LocalKeyConnector};
