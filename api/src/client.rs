//! HTTP implementation of [`VerificationApi`].

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Response;
use tracing::{debug, warn};
use vouch_types::{
    Address, RawVerificationStatus, RevokeAttestationRequest, RevokeResponse,
    SelfVerificationStart, SignatureData, StartVerificationRequest, StatusEnvelope,
};

use crate::api::VerificationApi;
use crate::config::ApiConfig;
use crate::error::ApiError;

const STATUS_FAILED: &str = "Failed to fetch verification status";
const START_FAILED: &str = "Failed to fetch Self verification URL";
const REVOKE_FAILED: &str = "Failed to revoke attestation";

/// Skips the interstitial warning page of tunnelling proxies used in development.
const SKIP_BROWSER_WARNING: &str = "ngrok-skip-browser-warning";

/// HTTP client for the verification backend.
///
/// Wraps `reqwest::Client` with the backend base URL and the headers every
/// request carries. No retries are attempted.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static(SKIP_BROWSER_WARNING),
            HeaderValue::from_static("true"),
        );

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Config(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn redirect_url(&self, flow: &str, address: &Address) -> String {
        let mut url = self.config.endpoint(&["verify", flow, "start"]);
        url.query_pairs_mut().append_pair("address", address.as_str());
        url.into()
    }
}

/// Map a transport error or non-2xx status to `ApiError::Network(message)`.
fn check_response(
    result: Result<Response, reqwest::Error>,
    message: &str,
) -> Result<Response, ApiError> {
    let response = result.map_err(|e| {
        warn!(error = %e, "{message}");
        ApiError::Network(message.to_string())
    })?;
    if !response.status().is_success() {
        warn!(status = %response.status(), url = %response.url(), "{message}");
        return Err(ApiError::Network(message.to_string()));
    }
    Ok(response)
}

#[async_trait]
impl VerificationApi for ApiClient {
    async fn verification_status(
        &self,
        address: &Address,
    ) -> Result<RawVerificationStatus, ApiError> {
        let url = self
            .config
            .endpoint(&["verify", "status", address.as_str()]);
        debug!(%url, "fetching verification status");

        let response = check_response(self.http.get(url).send().await, STATUS_FAILED)?;
        let envelope: StatusEnvelope<RawVerificationStatus> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("verification status: {e}")))?;
        Ok(envelope.data)
    }

    async fn start_self_verification(
        &self,
        address: &Address,
        signature: &SignatureData,
    ) -> Result<SelfVerificationStart, ApiError> {
        let url = self.config.endpoint(&["verify", "start"]);
        debug!(%url, %address, "starting Self.xyz verification");

        let body = StartVerificationRequest {
            address: address.clone(),
            signature: signature.clone(),
        };
        let response = check_response(self.http.post(url).json(&body).send().await, START_FAILED)?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(format!("verification start: {e}")))
    }

    async fn revoke_attestation(
        &self,
        request: &RevokeAttestationRequest,
    ) -> Result<RevokeResponse, ApiError> {
        let url = self.config.endpoint(&["verify", "revoke"]);
        debug!(%url, address = %request.address, provider = %request.provider, "revoking attestation");

        let response = self.http.post(url).json(request).send().await.map_err(|e| {
            warn!(error = %e, "{REVOKE_FAILED}");
            ApiError::Network(REVOKE_FAILED.to_string())
        })?;

        // Unlike the other calls, the body is read on every path: failures
        // carry the backend's explanation in `message`.
        let status = response.status();
        let body = response.json::<serde_json::Value>().await;

        if !status.is_success() {
            let message = body
                .ok()
                .as_ref()
                .and_then(|b| b.get("message"))
                .and_then(|m| m.as_str())
                .filter(|m| !m.is_empty())
                .unwrap_or(REVOKE_FAILED)
                .to_string();
            warn!(%status, %message, "revocation refused");
            return Err(ApiError::Application(message));
        }

        let body = body.map_err(|e| ApiError::Decode(format!("revocation: {e}")))?;
        serde_json::from_value(body).map_err(|e| ApiError::Decode(format!("revocation: {e}")))
    }

    fn coinbase_verification_url(&self, address: &Address) -> String {
        self.redirect_url("cb", address)
    }

    fn x_verification_url(&self, address: &Address) -> String {
        self.redirect_url("x", address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address::parse("0xAbC0000000000000000000000000000000000123").unwrap()
    }

    #[test]
    fn redirect_urls_carry_address_query() {
        let client = ApiClient::new(ApiConfig::default()).unwrap();
        assert_eq!(
            client.coinbase_verification_url(&address()),
            "http://localhost:8000/verify/cb/start?address=0xAbC0000000000000000000000000000000000123"
        );
        assert_eq!(
            client.x_verification_url(&address()),
            "http://localhost:8000/verify/x/start?address=0xAbC0000000000000000000000000000000000123"
        );
    }

    #[test]
    fn redirect_urls_respect_base_path() {
        let client = ApiClient::new(ApiConfig::new("https://example.org/backend/").unwrap()).unwrap();
        assert!(client
            .x_verification_url(&address())
            .starts_with("https://example.org/backend/verify/x/start?address="));
    }
}
