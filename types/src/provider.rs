//! Identity providers that issue attestations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypesError;

/// A known attestation provider.
///
/// Verification records keep the provider as a raw string so that records
/// from providers this client does not know about still display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[serde(rename = "self")]
    SelfXyz,
    Coinbase,
    X,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::SelfXyz, Provider::Coinbase, Provider::X];

    /// Identifier used by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::SelfXyz => "self",
            Provider::Coinbase => "coinbase",
            Provider::X => "x",
        }
    }

    /// Human-readable name.
    pub fn title(&self) -> &'static str {
        match self {
            Provider::SelfXyz => "Self.xyz",
            Provider::Coinbase => "Coinbase",
            Provider::X => "X (Twitter)",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "self" | "self.xyz" => Ok(Provider::SelfXyz),
            "coinbase" | "cb" => Ok(Provider::Coinbase),
            "x" | "twitter" => Ok(Provider::X),
            other => Err(TypesError::UnknownProvider(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        assert_eq!("Self.xyz".parse::<Provider>().unwrap(), Provider::SelfXyz);
        assert_eq!("cb".parse::<Provider>().unwrap(), Provider::Coinbase);
        assert_eq!("twitter".parse::<Provider>().unwrap(), Provider::X);
        assert!("github".parse::<Provider>().is_err());
    }

    #[test]
    fn serde_matches_backend_ids() {
        for provider in Provider::ALL {
            let json = serde_json::to_string(&provider).unwrap();
            assert_eq!(json, format!("\"{}\"", provider.as_str()));
        }
    }
}
