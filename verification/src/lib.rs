//! Verification flows.
//!
//! Each flow is a small state machine driven by user actions:
//! 1. **Status tracking**: fetch and normalize an address's attestations,
//!    falling back to "unverified" on failure.
//! 2. **Revocation**: sign a revocation message, submit it, and refetch on
//!    success. Progress is tracked per attestation id.
//! 3. **Self.xyz start**: sign an ownership message and obtain the provider
//!    URL to scan or open.
//! 4. **Redirect providers** (Coinbase, X): static links, no client state.
//!
//! All flows share a [`FlowContext`] carrying the address, API, signer and
//! clock explicitly.

pub mod context;
pub mod error;
pub mod links;
pub mod messages;
pub mod revocation;
pub mod self_xyz;
pub mod status;

pub use context::FlowContext;
pub use error::FlowError;
pub use links::{provider_description, redirect_links, ProviderLink};
pub use messages::{revoke_message, self_verification_message};
pub use revocation::{Notification, NotificationKind, Revoker};
pub use self_xyz::{SelfVerification, SelfVerificationState};
pub use status::{StatusSnapshot, StatusTracker};

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock component state. Critical sections never await, so a poisoned lock
/// only means a panic elsewhere; the state itself is still consistent.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
