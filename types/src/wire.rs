//! Wire representation of verification status and its normalization.
//!
//! The backend is loose about timestamp encoding: `created_at` and
//! `revoked_at` arrive either as strings or as epoch-millisecond numbers.
//! [`RawVerificationStatus::normalize`] turns both into the canonical string
//! form carried by [`VerificationStatus`].

use serde::{Deserialize, Serialize};

use crate::error::TypesError;
use crate::time::millis_to_rfc3339;
use crate::verification::{Verification, VerificationStatus};

/// `{ data: T }` response envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusEnvelope<T> {
    pub data: T,
}

/// A timestamp as sent by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    Millis(serde_json::Number),
    Text(String),
}

impl RawTimestamp {
    /// Canonical string form: text is kept verbatim, numbers become RFC 3339.
    pub fn canonical(&self) -> Result<String, TypesError> {
        match self {
            Self::Text(s) => Ok(s.clone()),
            Self::Millis(n) => millis_to_rfc3339(number_to_millis(n)),
        }
    }

    /// Whether the value counts as "unset" (empty string or zero).
    fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Millis(n) => n.as_f64() == Some(0.0),
        }
    }
}

fn number_to_millis(n: &serde_json::Number) -> i64 {
    n.as_i64()
        .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
        .or_else(|| n.as_f64().map(|f| f as i64))
        .unwrap_or_default()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawVerification {
    pub id: String,
    pub provider: String,
    /// Missing or `null` renders as the Unix epoch rather than failing the
    /// whole status.
    #[serde(default)]
    pub created_at: Option<RawTimestamp>,
    #[serde(default)]
    pub revoked_at: Option<RawTimestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_info: Option<serde_json::Value>,
}

impl RawVerification {
    pub fn normalize(self) -> Result<Verification, TypesError> {
        let created_at = match self.created_at {
            Some(raw) => raw.canonical()?,
            None => millis_to_rfc3339(0)?,
        };
        let revoked_at = match self.revoked_at {
            Some(raw) if !raw.is_blank() => Some(raw.canonical()?),
            _ => None,
        };
        Ok(Verification {
            id: self.id,
            provider: self.provider,
            created_at,
            revoked_at,
            provider_info: self.provider_info,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawVerificationStatus {
    #[serde(rename = "isVerified")]
    pub is_verified: bool,
    #[serde(default)]
    pub verifications: Vec<RawVerification>,
}

impl RawVerificationStatus {
    /// Normalize every timestamp; fails if any numeric timestamp is out of range.
    pub fn normalize(self) -> Result<VerificationStatus, TypesError> {
        let verifications = self
            .verifications
            .into_iter()
            .map(RawVerification::normalize)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(VerificationStatus {
            is_verified: self.is_verified,
            verifications,
        })
    }
}

impl From<VerificationStatus> for RawVerificationStatus {
    fn from(status: VerificationStatus) -> Self {
        Self {
            is_verified: status.is_verified,
            verifications: status
                .verifications
                .into_iter()
                .map(|v| RawVerification {
                    id: v.id,
                    provider: v.provider,
                    created_at: Some(RawTimestamp::Text(v.created_at)),
                    revoked_at: v.revoked_at.map(RawTimestamp::Text),
                    provider_info: v.provider_info,
                })
                .collect(),
        }
    }
}
