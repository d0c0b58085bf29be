//! Self.xyz verification start.

use std::sync::Mutex;

use tracing::{info, warn};
use vouch_types::SelfVerificationStart;

use crate::context::FlowContext;
use crate::error::FlowError;
use crate::lock;
use crate::messages::self_verification_message;

/// Render state of the Self.xyz action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelfVerificationState {
    pub loading: bool,
    /// Provider URL, shown both as a QR code and as a link.
    pub url: Option<String>,
    /// Inline error from the last attempt.
    pub error: Option<String>,
}

/// Signs an ownership message and asks the backend for a Self.xyz URL.
///
/// Completion happens out of band between the provider and the backend;
/// nothing here polls for it.
pub struct SelfVerification {
    ctx: FlowContext,
    state: Mutex<SelfVerificationState>,
}

impl SelfVerification {
    pub fn new(ctx: FlowContext) -> Self {
        Self {
            ctx,
            state: Mutex::new(SelfVerificationState::default()),
        }
    }

    pub async fn start(&self) -> Result<SelfVerificationStart, FlowError> {
        {
            let mut state = lock(&self.state);
            state.loading = true;
            state.error = None;
        }

        let result = self.request().await;

        let mut state = lock(&self.state);
        state.loading = false;
        match &result {
            Ok(start) => {
                info!(address = %self.ctx.address, url = %start.url, "Self.xyz verification started");
                state.url = Some(start.url.clone());
            }
            Err(e) => {
                warn!(address = %self.ctx.address, error = %e, "Self.xyz verification failed");
                state.error = Some(e.to_string());
            }
        }
        result
    }

    async fn request(&self) -> Result<SelfVerificationStart, FlowError> {
        let signed = self.ctx.sign(self_verification_message).await?;
        Ok(self
            .ctx
            .api
            .start_self_verification(&self.ctx.address, &signed)
            .await?)
    }

    pub fn state(&self) -> SelfVerificationState {
        lock(&self.state).clone()
    }
}
