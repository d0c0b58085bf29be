//! The API seam consumed by the verification flows.

use async_trait::async_trait;
use vouch_types::{
    Address, RawVerificationStatus, RevokeAttestationRequest, RevokeResponse,
    SelfVerificationStart, SignatureData,
};

use crate::error::ApiError;

/// Operations of the verification backend.
#[async_trait]
pub trait VerificationApi: Send + Sync {
    /// `GET /verify/status/:address`. Timestamps are returned un-normalized.
    async fn verification_status(
        &self,
        address: &Address,
    ) -> Result<RawVerificationStatus, ApiError>;

    /// `POST /verify/start` with a signed ownership message.
    async fn start_self_verification(
        &self,
        address: &Address,
        signature: &SignatureData,
    ) -> Result<SelfVerificationStart, ApiError>;

    /// `POST /verify/revoke`.
    async fn revoke_attestation(
        &self,
        request: &RevokeAttestationRequest,
    ) -> Result<RevokeResponse, ApiError>;

    /// Redirect target that starts Coinbase verification. No request is made.
    fn coinbase_verification_url(&self, address: &Address) -> String;

    /// Redirect target that starts X verification. No request is made.
    fn x_verification_url(&self, address: &Address) -> String;
}
