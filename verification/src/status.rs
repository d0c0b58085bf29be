//! Verification status tracking for one address.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, error};
use vouch_api::VerificationApi;
use vouch_types::{Address, VerificationStatus};

use crate::lock;

/// What a view needs to render status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusSnapshot {
    /// `None` until the first fetch completes.
    pub status: Option<VerificationStatus>,
    pub loading: bool,
}

struct TrackerState {
    status: Option<VerificationStatus>,
    loading: bool,
    /// Generation of the response currently held in `status`.
    applied: u64,
}

/// Fetches and holds the normalized verification status of an address.
///
/// Fetch failures never escape: they are logged and replaced by
/// [`VerificationStatus::unverified`]. Every fetch is numbered; a response
/// older than the one already applied is discarded, so overlapping refetches
/// cannot roll the status back.
pub struct StatusTracker {
    api: Arc<dyn VerificationApi>,
    address: Option<Address>,
    issued: AtomicU64,
    state: Mutex<TrackerState>,
}

impl StatusTracker {
    pub fn new(api: Arc<dyn VerificationApi>, address: Option<Address>) -> Self {
        Self {
            api,
            address,
            issued: AtomicU64::new(0),
            state: Mutex::new(TrackerState {
                status: None,
                loading: false,
                applied: 0,
            }),
        }
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// Fetch status again. Does nothing without an address.
    pub async fn refetch(&self) {
        let Some(address) = &self.address else {
            return;
        };

        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        lock(&self.state).loading = true;
        let _settle = Settle {
            tracker: self,
            generation,
        };

        let fetched = match self.api.verification_status(address).await {
            Ok(raw) => raw.normalize().map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        let status = fetched.unwrap_or_else(|e| {
            error!(%address, error = %e, "Error fetching verification status");
            VerificationStatus::unverified()
        });

        let mut state = lock(&self.state);
        if generation > state.applied {
            state.status = Some(status);
            state.applied = generation;
        } else {
            debug!(%address, generation, applied = state.applied, "discarding stale status response");
        }
    }

    fn settle(&self, generation: u64) {
        let mut state = lock(&self.state);
        if generation == self.issued.load(Ordering::SeqCst) {
            state.loading = false;
        }
    }

    pub fn snapshot(&self) -> StatusSnapshot {
        let state = lock(&self.state);
        StatusSnapshot {
            status: state.status.clone(),
            loading: state.loading,
        }
    }

    pub fn status(&self) -> Option<VerificationStatus> {
        lock(&self.state).status.clone()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.state).loading
    }
}

/// Clears `loading` when a fetch ends, including when its future is dropped
/// mid-flight.
struct Settle<'a> {
    tracker: &'a StatusTracker,
    generation: u64,
}

impl Drop for Settle<'_> {
    fn drop(&mut self) {
        self.tracker.settle(self.generation);
    }
}
