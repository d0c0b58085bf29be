//! Verification status card.

use std::sync::Arc;

use tracing::warn;
use vouch_types::Address;
use vouch_utils::format_date;
use vouch_verification::{FlowContext, Notification, Revoker, StatusTracker};

use crate::views::{RowAction, StatusCardView, StatusSummary, VerificationRow};

/// Verification state of one address plus per-row revoke actions.
pub struct StatusCard {
    address: Address,
    tracker: StatusTracker,
    revoker: Revoker,
}

impl StatusCard {
    pub fn new(ctx: FlowContext) -> Self {
        let tracker = StatusTracker::new(Arc::clone(&ctx.api), Some(ctx.address.clone()));
        Self {
            address: ctx.address.clone(),
            tracker,
            revoker: Revoker::new(ctx),
        }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Initial fetch.
    pub async fn load(&self) {
        self.tracker.refetch().await;
    }

    pub async fn refresh(&self) {
        self.tracker.refetch().await;
    }

    /// Revoke the active verification `id`.
    pub async fn revoke(&self, id: &str) -> Notification {
        let provider = self.tracker.status().and_then(|status| {
            status
                .active()
                .into_iter()
                .find(|v| v.id == id)
                .map(|v| v.provider.clone())
        });

        match provider {
            Some(provider) => self.revoker.revoke(id, &provider, &self.tracker).await,
            None => {
                warn!(address = %self.address, id, "revoke requested for inactive verification");
                let notification = Notification::error(format!("Verification {id} is not active"));
                self.revoker.show(notification.clone());
                notification
            }
        }
    }

    pub fn dismiss(&self) {
        self.revoker.dismiss();
    }

    pub fn tracker(&self) -> &StatusTracker {
        &self.tracker
    }

    pub fn view(&self) -> StatusCardView {
        let snapshot = self.tracker.snapshot();
        if snapshot.loading {
            return StatusCardView::Loading;
        }

        let status = snapshot.status.unwrap_or_default();
        let rows = if status.is_verified {
            status
                .active()
                .into_iter()
                .map(|v| VerificationRow {
                    id: v.id.clone(),
                    provider: v.provider.clone(),
                    created: format_date(&v.created_at),
                    action: if self.revoker.is_revoking(&v.id) {
                        RowAction::Revoking
                    } else {
                        RowAction::Revoke
                    },
                })
                .collect()
        } else {
            Vec::new()
        };

        StatusCardView::Loaded(StatusSummary {
            verified: status.is_verified,
            short_address: self.address.short(),
            notification: self.revoker.notification(),
            rows,
        })
    }
}
