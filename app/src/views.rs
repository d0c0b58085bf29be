//! View models and their plain-text rendering.

use std::fmt;

use vouch_verification::{Notification, NotificationKind};
use vouch_wallet_core::WalletOption;

// ── Status card ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowAction {
    Revoke,
    Revoking,
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Revoke => "Revoke",
            Self::Revoking => "Revoking...",
        }
    }

    /// The revoke button is disabled while its request is in flight.
    pub fn enabled(&self) -> bool {
        matches!(self, Self::Revoke)
    }
}

/// One active verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationRow {
    pub id: String,
    pub provider: String,
    /// `YYYY-MM-DD`, or the raw timestamp if it could not be parsed.
    pub created: String,
    pub action: RowAction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusSummary {
    pub verified: bool,
    pub short_address: String,
    pub notification: Option<Notification>,
    /// Empty unless verified.
    pub rows: Vec<VerificationRow>,
}

impl StatusSummary {
    pub fn headline(&self) -> &'static str {
        if self.verified {
            "Verified"
        } else {
            "Not Verified"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusCardView {
    Loading,
    Loaded(StatusSummary),
}

impl StatusCardView {
    pub fn summary(&self) -> Option<&StatusSummary> {
        match self {
            Self::Loading => None,
            Self::Loaded(summary) => Some(summary),
        }
    }
}

fn write_notification(f: &mut fmt::Formatter<'_>, notification: &Notification) -> fmt::Result {
    let marker = match notification.kind {
        NotificationKind::Success => "ok",
        NotificationKind::Error => "error",
    };
    writeln!(f, "[{marker}] {} (dismiss)", notification.message)
}

impl fmt::Display for StatusCardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = match self {
            Self::Loading => return writeln!(f, "Loading..."),
            Self::Loaded(summary) => summary,
        };

        writeln!(f, "{}  {}", summary.headline(), summary.short_address)?;
        if let Some(notification) = &summary.notification {
            write_notification(f, notification)?;
        }
        if !summary.rows.is_empty() {
            writeln!(f, "Active Verifications:")?;
            for row in &summary.rows {
                writeln!(
                    f,
                    "  {:<10} {}  [{}]  id={}",
                    row.provider,
                    row.created,
                    row.action.label(),
                    row.id
                )?;
            }
        }
        Ok(())
    }
}

// ── Provider actions ────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelfActionView {
    pub title: &'static str,
    pub description: &'static str,
    /// `Verify`, or `Loading...` while a start is in flight.
    pub button: &'static str,
    pub busy: bool,
    /// Payload to encode as a QR code.
    pub qr: Option<String>,
    pub link: Option<String>,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkView {
    pub title: &'static str,
    pub description: &'static str,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderActionsView {
    pub self_action: SelfActionView,
    pub links: Vec<LinkView>,
}

impl fmt::Display for ProviderActionsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = &self.self_action;
        writeln!(f, "{}: {}  [{}]", action.title, action.description, action.button)?;
        if let Some(qr) = &action.qr {
            writeln!(f, "  QR: {qr}")?;
        }
        if let Some(link) = &action.link {
            writeln!(f, "  Open: {link}")?;
        }
        if let Some(error) = &action.error {
            writeln!(f, "  Error: {error}")?;
        }
        for link in &self.links {
            writeln!(f, "{}: {}", link.title, link.description)?;
            writeln!(f, "  {}", link.url)?;
        }
        Ok(())
    }
}

// ── Message signing ─────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignMessageView {
    pub message: String,
    /// `Sign Message`, or `Signing...` while the wallet is asked.
    pub button: &'static str,
    pub busy: bool,
    pub signature: Option<String>,
    pub recovered: bool,
    pub error: Option<String>,
}

impl fmt::Display for SignMessageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Message to sign: {}", self.message)?;
        writeln!(f, "[{}]", self.button)?;
        if let Some(signature) = &self.signature {
            writeln!(f, "Signature:")?;
            writeln!(f, "  {signature}")?;
            let check = if self.recovered { "matches" } else { "does not match" };
            writeln!(f, "Recovered signer {check} the connected address")?;
        }
        if let Some(error) = &self.error {
            writeln!(f, "Error: {error}")?;
        }
        Ok(())
    }
}

// ── Account and page ────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountView {
    pub address: String,
    pub status: StatusCardView,
    pub providers: ProviderActionsView,
}

impl fmt::Display for AccountView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Connected: {}  [Disconnect]", self.address)?;
        writeln!(f)?;
        write!(f, "{}", self.status)?;
        writeln!(f)?;
        write!(f, "{}", self.providers)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageBody {
    ConnectWallet(Vec<WalletOption>),
    Account(AccountView),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageView {
    pub ready: bool,
    pub body: PageBody,
}

impl PageView {
    pub fn header(&self) -> &'static str {
        if self.ready {
            "vouch ready"
        } else {
            "vouch not ready"
        }
    }
}

impl fmt::Display for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        writeln!(f)?;
        match &self.body {
            PageBody::ConnectWallet(options) => {
                writeln!(f, "Connect a wallet:")?;
                if options.is_empty() {
                    writeln!(f, "  (no wallets configured)")?;
                }
                for option in options {
                    let state = if option.ready { "" } else { " (unavailable)" };
                    writeln!(f, "  {} [{}]{state}", option.name, option.uid)?;
                }
                Ok(())
            }
            PageBody::Account(account) => write!(f, "{account}"),
        }
    }
}
