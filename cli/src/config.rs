//! Command-line arguments and their merge with the optional config file.
//!
//! Precedence, highest first: flag, environment variable, config file,
//! built-in default.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use vouch_api::ApiConfig;
use vouch_types::Provider;
use vouch_wallet_core::{ConnectionContext, LocalKeyConnector};

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "vouch", about = "Wallet verification attestations: status, revoke, verify")]
pub struct Cli {
    /// Verification backend base URL.
    #[arg(long, env = "VOUCH_API_BASE_URL")]
    pub api_url: Option<String>,

    /// Hex-encoded private key of the wallet to connect.
    #[arg(long, env = "VOUCH_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// Encrypted JSON keystore of the wallet to connect.
    #[arg(long, env = "VOUCH_KEYSTORE")]
    pub keystore: Option<PathBuf>,

    /// Keystore password.
    #[arg(long, env = "VOUCH_KEYSTORE_PASSWORD", hide_env_values = true)]
    pub keystore_password: Option<String>,

    /// Per-request timeout in seconds. No timeout when unset.
    #[arg(long, env = "VOUCH_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "VOUCH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Path to a TOML configuration file. File settings are the base;
    /// flags and env vars override them.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List configured wallets and whether they can connect.
    Wallets,
    /// Connect and show the full account page.
    Account,
    /// Connect and show verification status.
    Status,
    /// Revoke one active verification by id.
    Revoke { id: String },
    /// Verify with a provider: "self", "coinbase" or "x".
    Verify { provider: Provider },
    /// Sign an arbitrary message with the connected wallet.
    Sign { message: String },
}

/// Settings as written in the config file. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub api_base_url: Option<String>,
    pub private_key: Option<String>,
    pub keystore: Option<PathBuf>,
    pub keystore_password: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `None` defers to [`ApiConfig::from_env`].
    pub api_base_url: Option<String>,
    pub private_key: Option<String>,
    pub keystore: Option<PathBuf>,
    pub keystore_password: String,
    pub timeout: Option<Duration>,
    pub log_level: String,
}

impl Settings {
    pub fn resolve(cli: &Cli, file: FileConfig) -> Self {
        Self {
            api_base_url: cli.api_url.clone().or(file.api_base_url),
            private_key: cli.private_key.clone().or(file.private_key),
            keystore: cli.keystore.clone().or(file.keystore),
            keystore_password: cli
                .keystore_password
                .clone()
                .or(file.keystore_password)
                .unwrap_or_default(),
            timeout: cli
                .timeout_secs
                .or(file.timeout_secs)
                .map(Duration::from_secs),
            log_level: cli
                .log_level
                .clone()
                .or(file.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    pub fn api_config(&self) -> anyhow::Result<ApiConfig> {
        let config = match &self.api_base_url {
            Some(url) => {
                ApiConfig::new(url).with_context(|| format!("invalid API base URL {url:?}"))?
            }
            None => ApiConfig::from_env().context("invalid API base URL in environment")?,
        };
        Ok(match self.timeout {
            Some(timeout) => config.with_timeout(timeout),
            None => config,
        })
    }

    /// Wallet connectors for the configured keys, private key first.
    pub fn wallets(&self) -> ConnectionContext {
        let mut ctx = ConnectionContext::default();
        if let Some(key) = &self.private_key {
            ctx.add_connector(Arc::new(LocalKeyConnector::private_key(key.clone())));
        }
        if let Some(path) = &self.keystore {
            ctx.add_connector(Arc::new(LocalKeyConnector::keystore(
                path.clone(),
                self.keystore_password.clone(),
            )));
        }
        ctx
    }
}
