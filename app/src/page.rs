//! Top-level page.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{info, warn};
use vouch_api::VerificationApi;
use vouch_types::Clock;
use vouch_wallet_core::{ConnectionContext, MiniAppHost};

use crate::account::AccountPanel;
use crate::views::{PageBody, PageView};

/// Signals host readiness and switches between connect-wallet and the
/// account panel as the connection changes.
pub struct Page {
    host: Arc<dyn MiniAppHost>,
    api: Arc<dyn VerificationApi>,
    clock: Arc<dyn Clock>,
    ready: AtomicBool,
    panel: Option<AccountPanel>,
}

impl Page {
    pub fn new(
        host: Arc<dyn MiniAppHost>,
        api: Arc<dyn VerificationApi>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            host,
            api,
            clock,
            ready: AtomicBool::new(false),
            panel: None,
        }
    }

    /// Tell the host the page is ready. A refusal is logged and leaves the
    /// page usable but marked not ready.
    pub async fn mount(&self) -> bool {
        match self.host.ready().await {
            Ok(()) => {
                info!("ready");
                self.ready.store(true, Ordering::SeqCst);
                true
            }
            Err(e) => {
                warn!(error = %e, "host did not acknowledge readiness");
                false
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    /// Rebuild the account panel if the connected address or wallet changed,
    /// and load its status. Drops the panel when disconnected.
    pub async fn sync(&mut self, ctx: &ConnectionContext) {
        let Some(connection) = ctx.connection() else {
            self.panel = None;
            return;
        };
        if self.panel.as_ref().is_some_and(|panel| panel.serves(connection)) {
            return;
        }

        let panel = AccountPanel::new(connection, Arc::clone(&self.api), Arc::clone(&self.clock));
        panel.status_card().load().await;
        self.panel = Some(panel);
    }

    /// Disconnect the wallet and return to the connect-wallet list.
    pub async fn disconnect(&mut self, ctx: &mut ConnectionContext) {
        ctx.disconnect();
        self.sync(ctx).await;
    }

    pub fn panel(&self) -> Option<&AccountPanel> {
        self.panel.as_ref()
    }

    pub async fn view(&self, ctx: &ConnectionContext) -> PageView {
        let panel = self
            .panel
            .as_ref()
            .filter(|panel| ctx.connection().is_some_and(|c| panel.serves(c)));
        let body = match panel {
            Some(panel) => PageBody::Account(panel.view()),
            None => PageBody::ConnectWallet(ctx.options().await),
        };
        PageView {
            ready: self.is_ready(),
            body,
        }
    }
}
