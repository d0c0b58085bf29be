//! Nullable verification API: scripted responses, recorded requests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;
use vouch_api::{ApiError, VerificationApi};
use vouch_types::{
    Address, RawVerificationStatus, RevokeAttestationRequest, RevokeResponse,
    SelfVerificationStart, SignatureData,
};

/// Base URL used by the redirect builders.
pub const NULL_BASE_URL: &str = "https://backend.test";

type Scripted<T> = (Result<T, ApiError>, Option<Arc<Notify>>);

/// A queue of scripted results with a sticky fallback once it runs dry.
struct Script<T> {
    queue: VecDeque<Scripted<T>>,
    fallback: Result<T, ApiError>,
}

impl<T: Clone> Script<T> {
    fn new(fallback: Result<T, ApiError>) -> Self {
        Self {
            queue: VecDeque::new(),
            fallback,
        }
    }

    fn next(&mut self) -> Scripted<T> {
        self.queue
            .pop_front()
            .unwrap_or_else(|| (self.fallback.clone(), None))
    }
}

/// A test backend.
///
/// Each call pops the next scripted result for its endpoint, or repeats the
/// endpoint's fallback. A result can be *gated*: the call then waits until
/// the returned [`Notify`] is signalled, which lets tests hold one request
/// in flight while others complete.
pub struct NullApi {
    status: Mutex<Script<RawVerificationStatus>>,
    start: Mutex<Script<SelfVerificationStart>>,
    revoke: Mutex<Script<RevokeResponse>>,
    status_calls: AtomicUsize,
    start_requests: Mutex<Vec<(Address, SignatureData)>>,
    revoke_requests: Mutex<Vec<RevokeAttestationRequest>>,
}

impl NullApi {
    /// Unverified status, a fixed Self.xyz URL, and successful revocations.
    pub fn new() -> Self {
        Self {
            status: Mutex::new(Script::new(Ok(RawVerificationStatus {
                is_verified: false,
                verifications: Vec::new(),
            }))),
            start: Mutex::new(Script::new(Ok(SelfVerificationStart {
                url: "https://self.xyz/verify/null".into(),
            }))),
            revoke: Mutex::new(Script::new(Ok(RevokeResponse::success("revoked")))),
            status_calls: AtomicUsize::new(0),
            start_requests: Mutex::new(Vec::new()),
            revoke_requests: Mutex::new(Vec::new()),
        }
    }

    // ── Status ──────────────────────────────────────────────────────────

    /// Result of every status fetch once the queue is empty.
    pub fn set_status(&self, result: Result<RawVerificationStatus, ApiError>) {
        self.status.lock().unwrap().fallback = result;
    }

    /// Result of the next status fetch.
    pub fn push_status(&self, result: Result<RawVerificationStatus, ApiError>) {
        self.status.lock().unwrap().queue.push_back((result, None));
    }

    /// Result of the next status fetch, released only when the gate is notified.
    pub fn push_status_gated(&self, result: Result<RawVerificationStatus, ApiError>) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.status
            .lock()
            .unwrap()
            .queue
            .push_back((result, Some(gate.clone())));
        gate
    }

    pub fn status_calls(&self) -> usize {
        self.status_calls.load(Ordering::SeqCst)
    }

    // ── Self.xyz start ──────────────────────────────────────────────────

    pub fn set_self_start(&self, result: Result<SelfVerificationStart, ApiError>) {
        self.start.lock().unwrap().fallback = result;
    }

    pub fn start_requests(&self) -> Vec<(Address, SignatureData)> {
        self.start_requests.lock().unwrap().clone()
    }

    // ── Revoke ──────────────────────────────────────────────────────────

    pub fn set_revoke(&self, result: Result<RevokeResponse, ApiError>) {
        self.revoke.lock().unwrap().fallback = result;
    }

    pub fn push_revoke(&self, result: Result<RevokeResponse, ApiError>) {
        self.revoke.lock().unwrap().queue.push_back((result, None));
    }

    pub fn push_revoke_gated(&self, result: Result<RevokeResponse, ApiError>) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.revoke
            .lock()
            .unwrap()
            .queue
            .push_back((result, Some(gate.clone())));
        gate
    }

    pub fn revoke_requests(&self) -> Vec<RevokeAttestationRequest> {
        self.revoke_requests.lock().unwrap().clone()
    }
}

impl Default for NullApi {
    fn default() -> Self {
        Self::new()
    }
}

async fn release<T>((result, gate): Scripted<T>) -> Result<T, ApiError> {
    if let Some(gate) = gate {
        gate.notified().await;
    }
    result
}

#[async_trait]
impl VerificationApi for NullApi {
    async fn verification_status(
        &self,
        _address: &Address,
    ) -> Result<RawVerificationStatus, ApiError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        let scripted = self.status.lock().unwrap().next();
        release(scripted).await
    }

    async fn start_self_verification(
        &self,
        address: &Address,
        signature: &SignatureData,
    ) -> Result<SelfVerificationStart, ApiError> {
        self.start_requests
            .lock()
            .unwrap()
            .push((address.clone(), signature.clone()));
        let scripted = self.start.lock().unwrap().next();
        release(scripted).await
    }

    async fn revoke_attestation(
        &self,
        request: &RevokeAttestationRequest,
    ) -> Result<RevokeResponse, ApiError> {
        self.revoke_requests.lock().unwrap().push(request.clone());
        let scripted = self.revoke.lock().unwrap().next();
        release(scripted).await
    }

    fn coinbase_verification_url(&self, address: &Address) -> String {
        format!("{NULL_BASE_URL}/verify/cb/start?address={address}")
    }

    fn x_verification_url(&self, address: &Address) -> String {
        format!("{NULL_BASE_URL}/verify/x/start?address={address}")
    }
}
