//! vouch components.
//!
//! Each component owns the flow state for one part of the screen and turns
//! it into a view model on demand. View models render as plain text through
//! `Display`; layout and styling belong to whichever front-end draws them.
//!
//! Composition, leaf-first:
//! - [`StatusCard`]: verification state, active attestations, revoke
//! - [`ProviderActions`]: Self.xyz start plus Coinbase/X links
//! - [`AccountPanel`]: wallet address, disconnect, card and actions
//! - [`Page`]: host readiness, then connect-wallet or the account panel
//! - [`SignMessage`]: sign an arbitrary message with the connected wallet

pub mod account;
pub mod page;
pub mod provider_actions;
pub mod sign_message;
pub mod status_card;
pub mod views;

pub use account::AccountPanel;
pub use page::Page;
pub use provider_actions::ProviderActions;
pub use sign_message::SignMessage;
pub use status_card::StatusCard;
pub use views::{
    AccountView, LinkView, PageBody, PageView, ProviderActionsView, RowAction, SelfActionView,
    SignMessageView, StatusCardView, StatusSummary, VerificationRow,
};
