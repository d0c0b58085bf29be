//! vouch: command-line front-end for wallet verification attestations.
//!
//! Views are printed to stdout; logs go to stderr.

mod config;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use vouch_api::{ApiClient, VerificationApi};
use vouch_app::{AccountPanel, Page, SignMessage};
use vouch_types::{Provider, SystemClock};
use vouch_wallet_core::{ConnectionContext, StandaloneHost};

use crate::config::{Cli, Command, FileConfig, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(&cli, file_config);
    vouch_utils::init_tracing(&settings.log_level);
    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let api_config = settings.api_config()?;
    tracing::debug!(base_url = %api_config.base_url(), "using verification backend");
    let api: Arc<dyn VerificationApi> = Arc::new(ApiClient::new(api_config)?);

    let mut wallets = settings.wallets();
    let mut page = Page::new(Arc::new(StandaloneHost), api, Arc::new(SystemClock));
    page.mount().await;

    match cli.command {
        Command::Wallets => {
            print!("{}", page.view(&wallets).await);
        }
        Command::Account => {
            connect(&mut wallets).await?;
            page.sync(&wallets).await;
            print!("{}", page.view(&wallets).await);
        }
        Command::Status => {
            let panel = open_panel(&mut page, &mut wallets).await?;
            print!("{}", panel.status_card().view());
        }
        Command::Revoke { id } => {
            let panel = open_panel(&mut page, &mut wallets).await?;
            let card = panel.status_card();
            let notification = card.revoke(&id).await;
            print!("{}", card.view());
            if notification.is_error() {
                anyhow::bail!("revocation failed: {}", notification.message);
            }
        }
        Command::Sign { message } => {
            connect(&mut wallets).await?;
            let connection = wallets.require()?;
            let action = SignMessage::new(connection.signer.clone(), message);
            let signed = action.sign().await;
            print!("{}", action.view());
            signed.context("message signing failed")?;
        }
        Command::Verify { provider } => {
            let panel = open_panel(&mut page, &mut wallets).await?;
            let actions = panel.provider_actions();
            match provider {
                Provider::SelfXyz => {
                    let started = actions.start_self().await;
                    print!("{}", actions.view());
                    started.context("Self.xyz verification failed")?;
                }
                redirect => {
                    let link = actions
                        .link(redirect)
                        .with_context(|| format!("no verification link for {}", redirect.title()))?;
                    println!("{}", link.url);
                }
            }
        }
    }

    Ok(())
}

/// Connect the first wallet that is ready.
async fn connect(wallets: &mut ConnectionContext) -> anyhow::Result<()> {
    let uid = wallets
        .options()
        .await
        .into_iter()
        .find(|option| option.ready)
        .map(|option| option.uid)
        .context("no usable wallet: pass --private-key or --keystore")?;
    wallets.connect(&uid).await?;
    Ok(())
}

async fn open_panel<'a>(
    page: &'a mut Page,
    wallets: &mut ConnectionContext,
) -> anyhow::Result<&'a AccountPanel> {
    connect(wallets).await?;
    page.sync(wallets).await;
    page.panel().context("wallet connected but account panel missing")
}
