//! Signed request payloads and their responses.

use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::time::Timestamp;

/// A message, the wallet's signature over it, and the timestamp it embeds.
///
/// Built fresh for every signing operation and never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureData {
    pub message: String,
    pub signature: String,
    pub timestamp: Timestamp,
}

/// Body of `POST /verify/start`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartVerificationRequest {
    pub address: Address,
    #[serde(flatten)]
    pub signature: SignatureData,
}

/// Response of `POST /verify/start`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfVerificationStart {
    pub url: String,
}

/// Body of `POST /verify/revoke`: a signed, single-use revocation command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokeAttestationRequest {
    pub address: Address,
    pub provider: String,
    pub signature: String,
    pub message: String,
    pub timestamp: Timestamp,
}

/// Response of `POST /verify/revoke`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokeResponse {
    /// Absent counts as a declared failure.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl RevokeResponse {
    pub const SUCCESS: &'static str = "success";

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: Self::SUCCESS.into(),
            message: Some(message.into()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".into(),
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Self::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn address() -> Address {
        Address::parse("0xAbC0000000000000000000000000000000000123").unwrap()
    }

    #[test]
    fn start_request_flattens_signature_data() {
        let request = StartVerificationRequest {
            address: address(),
            signature: SignatureData {
                message: "m".into(),
                signature: "0x01".into(),
                timestamp: Timestamp::from_millis(42),
            },
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "address": "0xAbC0000000000000000000000000000000000123",
                "message": "m",
                "signature": "0x01",
                "timestamp": 42
            })
        );
    }

    #[test]
    fn revoke_response_tolerates_missing_message() {
        let response: RevokeResponse = serde_json::from_value(json!({ "status": "success" })).unwrap();
        assert!(response.is_success());
        assert_eq!(response.message, None);
        assert!(!RevokeResponse::error("already revoked").is_success());
    }

    #[test]
    fn revoke_response_without_status_is_a_declared_failure() {
        let response: RevokeResponse = serde_json::from_value(json!({ "message": "queued" })).unwrap();
        assert!(!response.is_success());
        assert_eq!(response.message.as_deref(), Some("queued"));
    }
}
