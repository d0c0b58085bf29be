//! Normalized verification records.

use serde::{Deserialize, Serialize};

/// A server-recorded attestation that an address was verified by a provider.
///
/// Timestamps are in canonical string form (see [`crate::wire`]). The client
/// never flips `revoked_at` itself; revocation shows up on the next fetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    pub id: String,
    pub provider: String,
    pub created_at: String,
    pub revoked_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_info: Option<serde_json::Value>,
}

impl Verification {
    /// Active iff not revoked.
    pub fn is_active(&self) -> bool {
        self.revoked_at.is_none()
    }
}

/// Verification status of one address as reported by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerificationStatus {
    /// Server-computed aggregate; never recomputed locally.
    #[serde(rename = "isVerified")]
    pub is_verified: bool,
    pub verifications: Vec<Verification>,
}

impl VerificationStatus {
    /// The value used when status cannot be fetched.
    pub fn unverified() -> Self {
        Self {
            is_verified: false,
            verifications: Vec::new(),
        }
    }

    /// Verifications that have not been revoked, in server order.
    pub fn active(&self) -> Vec<&Verification> {
        active_verifications(&self.verifications)
    }

    /// Look up a verification by id.
    pub fn find(&self, id: &str) -> Option<&Verification> {
        self.verifications.iter().find(|v| v.id == id)
    }
}

impl Default for VerificationStatus {
    fn default() -> Self {
        Self::unverified()
    }
}

/// Filter a list down to its active entries.
pub fn active_verifications(verifications: &[Verification]) -> Vec<&Verification> {
    verifications.iter().filter(|v| v.is_active()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, revoked_at: Option<&str>) -> Verification {
        Verification {
            id: id.into(),
            provider: "self".into(),
            created_at: "2024-01-01T00:00:00.000Z".into(),
            revoked_at: revoked_at.map(Into::into),
            provider_info: None,
        }
    }

    #[test]
    fn unverified_has_no_active_entries() {
        let status = VerificationStatus::unverified();
        assert!(!status.is_verified);
        assert!(status.active().is_empty());
    }

    #[test]
    fn active_skips_revoked_and_keeps_order() {
        let status = VerificationStatus {
            is_verified: true,
            verifications: vec![
                record("a", None),
                record("b", Some("2024-02-01T00:00:00.000Z")),
                record("c", None),
            ],
        };
        let ids: Vec<_> = status.active().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
        assert!(status.find("b").is_some());
        assert!(status.find("zz").is_none());
    }

    #[test]
    fn json_uses_camel_case_aggregate_key() {
        let status = VerificationStatus {
            is_verified: true,
            verifications: vec![record("v1", None)],
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["isVerified"], true);
        assert_eq!(json["verifications"][0]["revoked_at"], serde_json::Value::Null);
        assert!(json["verifications"][0].get("provider_info").is_none());
    }
}
