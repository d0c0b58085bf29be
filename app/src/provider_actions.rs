//! Provider verification actions.

use vouch_types::{Provider, SelfVerificationStart};
use vouch_verification::{
    provider_description, redirect_links, FlowContext, FlowError, ProviderLink, SelfVerification,
};

use crate::views::{LinkView, ProviderActionsView, SelfActionView};

/// Self.xyz start plus the Coinbase and X redirect links.
pub struct ProviderActions {
    self_flow: SelfVerification,
    links: Vec<ProviderLink>,
}

impl ProviderActions {
    pub fn new(ctx: FlowContext) -> Self {
        let links = redirect_links(ctx.api.as_ref(), &ctx.address);
        Self {
            self_flow: SelfVerification::new(ctx),
            links,
        }
    }

    /// Start Self.xyz verification. Failures are also kept for inline display.
    pub async fn start_self(&self) -> Result<SelfVerificationStart, FlowError> {
        self.self_flow.start().await
    }

    pub fn link(&self, provider: Provider) -> Option<&ProviderLink> {
        self.links.iter().find(|l| l.provider == provider)
    }

    pub fn view(&self) -> ProviderActionsView {
        let state = self.self_flow.state();
        ProviderActionsView {
            self_action: SelfActionView {
                title: Provider::SelfXyz.title(),
                description: provider_description(Provider::SelfXyz),
                button: if state.loading { "Loading..." } else { "Verify" },
                busy: state.loading,
                qr: state.url.clone(),
                link: state.url,
                error: state.error,
            },
            links: self
                .links
                .iter()
                .map(|l| LinkView {
                    title: l.provider.title(),
                    description: provider_description(l.provider),
                    url: l.url.clone(),
                })
                .collect(),
        }
    }
}
