//! Signed attestation revocation.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::{error, info};
use vouch_types::RevokeAttestationRequest;

use crate::context::FlowContext;
use crate::error::FlowError;
use crate::lock;
use crate::messages::revoke_message;
use crate::status::StatusTracker;

pub const REVOKED: &str = "Attestation revoked successfully!";
pub const REVOKE_FAILED: &str = "Failed to revoke attestation";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A dismissible message about the last revocation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Revokes attestations of the connected address.
///
/// Progress is kept per attestation id, so several revocations can be in
/// flight at once. The attestation list itself is never edited here; it
/// changes only through the tracker's refetch after the backend confirms.
pub struct Revoker {
    ctx: FlowContext,
    revoking: Mutex<HashMap<String, bool>>,
    notification: Mutex<Option<Notification>>,
}

impl Revoker {
    pub fn new(ctx: FlowContext) -> Self {
        Self {
            ctx,
            revoking: Mutex::new(HashMap::new()),
            notification: Mutex::new(None),
        }
    }

    /// Revoke one attestation and refresh `tracker` if the backend accepts.
    ///
    /// Returns the notification that was shown.
    pub async fn revoke(
        &self,
        verification_id: &str,
        provider: &str,
        tracker: &StatusTracker,
    ) -> Notification {
        lock(&self.revoking).insert(verification_id.to_string(), true);
        self.dismiss();

        let notification = match self.submit(provider).await {
            Ok(response) if response.is_success() => {
                info!(id = verification_id, provider, "attestation revoked");
                self.show(Notification::success(REVOKED));
                tracker.refetch().await;
                Notification::success(REVOKED)
            }
            Ok(response) => {
                let message = response
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| REVOKE_FAILED.to_string());
                self.show(Notification::error(message.clone()));
                Notification::error(message)
            }
            Err(e) => {
                error!(id = verification_id, provider, error = %e, "Error revoking attestation");
                self.show(Notification::error(e.to_string()));
                Notification::error(e.to_string())
            }
        };

        lock(&self.revoking).insert(verification_id.to_string(), false);
        notification
    }

    async fn submit(&self, provider: &str) -> Result<vouch_types::RevokeResponse, FlowError> {
        let signed = self
            .ctx
            .sign(|address, timestamp| revoke_message(address, provider, timestamp))
            .await?;
        let request = RevokeAttestationRequest {
            address: self.ctx.address.clone(),
            provider: provider.to_string(),
            signature: signed.signature,
            message: signed.message,
            timestamp: signed.timestamp,
        };
        Ok(self.ctx.api.revoke_attestation(&request).await?)
    }

    pub fn is_revoking(&self, verification_id: &str) -> bool {
        lock(&self.revoking)
            .get(verification_id)
            .copied()
            .unwrap_or(false)
    }

    pub fn notification(&self) -> Option<Notification> {
        lock(&self.notification).clone()
    }

    /// Replace the current notification.
    pub fn show(&self, notification: Notification) {
        *lock(&self.notification) = Some(notification);
    }

    pub fn dismiss(&self) {
        *lock(&self.notification) = None;
    }
}
