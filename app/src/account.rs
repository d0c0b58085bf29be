//! Connected-account panel.

use std::sync::Arc;

use vouch_api::VerificationApi;
use vouch_types::{Address, Clock};
use vouch_verification::FlowContext;
use vouch_wallet_core::Connection;

use crate::provider_actions::ProviderActions;
use crate::status_card::StatusCard;
use crate::views::AccountView;

/// Everything shown once a wallet is connected.
pub struct AccountPanel {
    address: Address,
    connector_uid: String,
    card: StatusCard,
    actions: ProviderActions,
}

impl AccountPanel {
    pub fn new(
        connection: &Connection,
        api: Arc<dyn VerificationApi>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let ctx = FlowContext::new(
            connection.address.clone(),
            api,
            Arc::clone(&connection.signer),
            clock,
        );
        Self {
            address: connection.address.clone(),
            connector_uid: connection.connector_uid.clone(),
            card: StatusCard::new(ctx.clone()),
            actions: ProviderActions::new(ctx),
        }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Connector the panel's signer came from.
    pub fn connector_uid(&self) -> &str {
        &self.connector_uid
    }

    /// Whether this panel was built for `connection`.
    pub fn serves(&self, connection: &Connection) -> bool {
        self.address == connection.address && self.connector_uid == connection.connector_uid
    }

    pub fn status_card(&self) -> &StatusCard {
        &self.card
    }

    pub fn provider_actions(&self) -> &ProviderActions {
        &self.actions
    }

    pub fn view(&self) -> AccountView {
        AccountView {
            address: self.address.to_string(),
            status: self.card.view(),
            providers: self.actions.view(),
        }
    }
}
