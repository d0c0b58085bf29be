//! Builders for common test data.

use vouch_types::{Address, RawTimestamp, RawVerification, RawVerificationStatus};

/// A fixed, valid wallet address.
pub fn address() -> Address {
    Address::parse("0xAbC0000000000000000000000000000000000123").expect("fixture address is valid")
}

/// An active attestation created 2024-01-01.
pub fn active(id: &str, provider: &str) -> RawVerification {
    RawVerification {
        id: id.into(),
        provider: provider.into(),
        created_at: Some(RawTimestamp::Text("2024-01-01T00:00:00.000Z".into())),
        revoked_at: None,
        provider_info: None,
    }
}

/// A revoked attestation created 2024-01-01 and revoked 2024-02-01.
pub fn revoked(id: &str, provider: &str) -> RawVerification {
    RawVerification {
        revoked_at: Some(RawTimestamp::Text("2024-02-01T00:00:00.000Z".into())),
        ..active(id, provider)
    }
}

pub fn status(is_verified: bool, verifications: Vec<RawVerification>) -> RawVerificationStatus {
    RawVerificationStatus {
        is_verified,
        verifications,
    }
}
