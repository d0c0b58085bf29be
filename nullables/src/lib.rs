//! Nullable infrastructure for deterministic testing.
//!
//! Every external capability (clock, signer, backend API, wallet connector,
//! host) sits behind a trait. This crate provides test-friendly
//! implementations that:
//! - Return scripted, deterministic values
//! - Record what was asked of them for assertions
//! - Never touch the network or a real key
//!
//! Usage: swap real implementations for nullables in tests.

pub mod api;
pub mod clock;
pub mod connector;
pub mod fixtures;
pub mod host;
pub mod signer;

pub use api::NullApi;
pub use clock::NullClock;
pub use connector::NullConnector;
pub use host::NullHost;
pub use signer::NullSigner;
