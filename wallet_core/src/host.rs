//! Mini-app host readiness.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("host error: {0}")]
pub struct HostError(pub String);

/// The runtime that embeds the app. The page signals readiness once mounted.
#[async_trait]
pub trait MiniAppHost: Send + Sync {
    async fn ready(&self) -> Result<(), HostError>;
}

/// Running on its own, e.g. in a terminal: always ready.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandaloneHost;

#[async_trait]
impl MiniAppHost for StandaloneHost {
    async fn ready(&self) -> Result<(), HostError> {
        Ok(())
    }
}
