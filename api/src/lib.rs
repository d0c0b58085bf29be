//! REST client for the verification backend.
//!
//! Provides:
//! - Verification status lookup for an address
//! - The Self.xyz signature-gated verification start
//! - Signed attestation revocation
//! - Redirect URLs for the Coinbase and X verification flows

pub mod api;
pub mod client;
pub mod config;
pub mod error;

pub use api::VerificationApi;
pub use client::ApiClient;
pub use config::{ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::ApiError;
