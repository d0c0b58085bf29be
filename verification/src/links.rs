//! Redirect-based providers.

use vouch_api::VerificationApi;
use vouch_types::{Address, Provider};

/// A link the user follows to verify out of band.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderLink {
    pub provider: Provider,
    pub url: String,
}

pub fn provider_description(provider: Provider) -> &'static str {
    match provider {
        Provider::SelfXyz => "Verify your identity using Self.xyz",
        Provider::Coinbase => "Verify using Coinbase verification",
        Provider::X => "Verify using your X account",
    }
}

/// Coinbase and X links for `address`, in display order.
pub fn redirect_links(api: &dyn VerificationApi, address: &Address) -> Vec<ProviderLink> {
    vec![
        ProviderLink {
            provider: Provider::Coinbase,
            url: api.coinbase_verification_url(address),
        },
        ProviderLink {
            provider: Provider::X,
            url: api.x_verification_url(address),
        },
    ]
}
