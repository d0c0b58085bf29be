//! Wallet address type with `0x` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// An EVM wallet address: `0x` followed by 40 hex digits.
///
/// The casing the wallet reported is preserved; signed messages that must be
/// case-insensitive use [`Address::to_lowercase`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// The standard prefix for all wallet addresses.
    pub const PREFIX: &'static str = "0x";

    /// Number of hex digits after the prefix.
    pub const HEX_LEN: usize = 40;

    /// Parse and validate a wallet address.
    pub fn parse(raw: impl Into<String>) -> Result<Self, TypesError> {
        let s = raw.into();
        let digits = s
            .strip_prefix(Self::PREFIX)
            .ok_or_else(|| TypesError::InvalidAddress(s.clone()))?;
        if digits.len() != Self::HEX_LEN || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(TypesError::InvalidAddress(s));
        }
        Ok(Self(s))
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lower-cased form used in revocation messages.
    pub fn to_lowercase(&self) -> String {
        self.0.to_ascii_lowercase()
    }

    /// Abbreviated form for display, e.g. `0xAbCd...1234`.
    pub fn short(&self) -> String {
        // Validated addresses are ASCII, so byte slicing is on char boundaries.
        format!("{}...{}", &self.0[..6], &self.0[self.0.len() - 4..])
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Address {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = TypesError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECKSUMMED: &str = "0xAbC0000000000000000000000000000000000123";

    #[test]
    fn parse_accepts_mixed_case_hex() {
        let address = Address::parse(CHECKSUMMED).unwrap();
        assert_eq!(address.as_str(), CHECKSUMMED);
        assert_eq!(
            address.to_lowercase(),
            "0xabc0000000000000000000000000000000000123"
        );
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for bad in [
            "",
            "0x",
            "abc0000000000000000000000000000000000123",
            "0xabc",
            "0xZZZ0000000000000000000000000000000000123",
            "0xabc00000000000000000000000000000000001234",
        ] {
            assert!(Address::parse(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn short_form_keeps_prefix_and_tail() {
        let address = Address::parse(CHECKSUMMED).unwrap();
        assert_eq!(address.short(), "0xAbC0...0123");
    }

    #[test]
    fn serde_uses_plain_string() {
        let address = Address::parse(CHECKSUMMED).unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{CHECKSUMMED}\""));
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, address);
        assert!(serde_json::from_str::<Address>("\"0x12\"").is_err());
    }
}
