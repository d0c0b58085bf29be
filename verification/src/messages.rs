//! Messages the wallet signs. The backend rebuilds these strings to verify
//! signatures, so the wording must not drift.

use vouch_types::{Address, Timestamp};

/// Authorizes revoking the `provider` attestation of `address`.
///
/// The address is lower-cased.
pub fn revoke_message(address: &Address, provider: &str, timestamp: Timestamp) -> String {
    format!(
        "Revoke attestation for {} on {provider} at {timestamp}",
        address.to_lowercase()
    )
}

/// Proves ownership of `address` before starting Self.xyz verification.
///
/// The address keeps the wallet's casing.
pub fn self_verification_message(address: &Address, timestamp: Timestamp) -> String {
    format!("Verify ownership of {address} for Self.xyz verification at {timestamp}")
}
