//! Data model for vouch.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! wallet addresses, millisecond timestamps and the clock seam, verification
//! records, and the request/response payloads exchanged with the verification
//! backend.

pub mod address;
pub mod error;
pub mod provider;
pub mod request;
pub mod time;
pub mod verification;
pub mod wire;

pub use address::Address;
pub use error::TypesError;
pub use provider::Provider;
pub use request::{
    RevokeAttestationRequest, RevokeResponse, SelfVerificationStart, SignatureData,
    StartVerificationRequest,
};
pub use time::{Clock, SystemClock, Timestamp};
pub use verification::{active_verifications, Verification, VerificationStatus};
pub use wire::{RawTimestamp, RawVerification, RawVerificationStatus, StatusEnvelope};
