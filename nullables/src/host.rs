//! Nullable mini-app host.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use vouch_wallet_core::{HostError, MiniAppHost};

/// A host whose readiness answer is fixed up front.
#[derive(Default)]
pub struct NullHost {
    failure: Option<String>,
    calls: AtomicUsize,
}

impl NullHost {
    pub fn ready() -> Self {
        Self::default()
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// How many times readiness was signalled.
    pub fn ready_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MiniAppHost for NullHost {
    async fn ready(&self) -> Result<(), HostError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(reason) => Err(HostError(reason.clone())),
            None => Ok(()),
        }
    }
}
