//! Flow tests wired against nullables: status tracking, revocation, and the
//! Self.xyz start, each end to end through `FlowContext`.

use std::sync::Arc;
use std::time::Duration;

use vouch_api::{ApiError, VerificationApi};
use vouch_crypto::SigningError;
use vouch_nullables::fixtures::{active, address, revoked, status};
use vouch_nullables::{NullApi, NullClock, NullSigner};
use vouch_types::{RawTimestamp, RevokeResponse, SelfVerificationStart, VerificationStatus};
use vouch_verification::{
    redirect_links, FlowContext, FlowError, Notification, NotificationKind, Revoker,
    SelfVerification, StatusTracker,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Harness {
    api: Arc<NullApi>,
    signer: Arc<NullSigner>,
    clock: Arc<NullClock>,
    ctx: FlowContext,
}

fn harness() -> Harness {
    let api = Arc::new(NullApi::new());
    let signer = Arc::new(NullSigner::new(address()));
    let clock = Arc::new(NullClock::new(1_700_000_000_000));
    let ctx = FlowContext::new(address(), api.clone(), signer.clone(), clock.clone());
    Harness {
        api,
        signer,
        clock,
        ctx,
    }
}

fn tracker(h: &Harness) -> StatusTracker {
    StatusTracker::new(h.api.clone(), Some(address()))
}

// ---------------------------------------------------------------------------
// 1. Status tracking
// ---------------------------------------------------------------------------

#[tokio::test]
async fn tracker_starts_empty_and_loads_normalized_status() {
    let h = harness();
    h.api.set_status(Ok(status(true, vec![active("v1", "self")])));
    let tracker = tracker(&h);

    let before = tracker.snapshot();
    assert_eq!(before.status, None);
    assert!(!before.loading);

    tracker.refetch().await;
    let after = tracker.snapshot();
    assert!(!after.loading);
    let status = after.status.unwrap();
    assert!(status.is_verified);
    assert_eq!(status.active().len(), 1);
}

#[tokio::test]
async fn tracker_without_address_never_fetches() {
    let h = harness();
    let tracker = StatusTracker::new(h.api.clone(), None);
    tracker.refetch().await;
    assert_eq!(h.api.status_calls(), 0);
    assert_eq!(tracker.status(), None);
}

#[tokio::test]
async fn failed_fetch_falls_back_to_unverified() {
    let h = harness();
    h.api.push_status(Ok(status(true, vec![active("v1", "self")])));
    h.api
        .push_status(Err(ApiError::Network("Failed to fetch verification status".into())));
    let tracker = tracker(&h);

    tracker.refetch().await;
    assert!(tracker.status().unwrap().is_verified);

    tracker.refetch().await;
    assert_eq!(tracker.status(), Some(VerificationStatus::unverified()));
    assert!(!tracker.is_loading());
}

#[tokio::test]
async fn unnormalizable_status_falls_back_to_unverified() {
    let h = harness();
    let mut bad = active("v1", "self");
    bad.created_at = Some(RawTimestamp::Millis(i64::MAX.into()));
    h.api.set_status(Ok(status(true, vec![bad])));
    let tracker = tracker(&h);

    tracker.refetch().await;
    assert_eq!(tracker.status(), Some(VerificationStatus::unverified()));
}

#[tokio::test]
async fn stale_response_does_not_overwrite_fresher_one() {
    let h = harness();
    let gate = h
        .api
        .push_status_gated(Ok(status(true, vec![active("old", "self")])));
    h.api.push_status(Ok(status(false, vec![revoked("old", "self")])));
    let tracker = tracker(&h);

    let first = tracker.refetch();
    let second = async {
        tracker.refetch().await;
        let fresh = tracker.status().unwrap();
        assert!(!fresh.is_verified);
        gate.notify_one();
    };
    tokio::join!(first, second);

    let status = tracker.status().unwrap();
    assert!(!status.is_verified, "stale response overwrote the fresh one");
    assert!(status.active().is_empty());
    assert!(!tracker.is_loading());
}

#[tokio::test]
async fn cancelled_refetch_does_not_leave_loading_set() {
    let h = harness();
    let _gate = h
        .api
        .push_status_gated(Ok(status(true, vec![active("v1", "self")])));
    let tracker = tracker(&h);

    let timed_out = tokio::time::timeout(Duration::from_millis(20), tracker.refetch()).await;
    assert!(timed_out.is_err());

    assert!(!tracker.is_loading());
    assert_eq!(tracker.status(), None);

    tracker.refetch().await;
    assert_eq!(tracker.status(), Some(VerificationStatus::unverified()));
}

// ---------------------------------------------------------------------------
// 2. Revocation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn revoke_signs_lowercased_message_and_refetches() {
    let h = harness();
    h.api.push_status(Ok(status(true, vec![active("v1", "self")])));
    h.api.push_status(Ok(status(false, vec![revoked("v1", "self")])));
    let tracker = tracker(&h);
    tracker.refetch().await;

    let revoker = Revoker::new(h.ctx.clone());
    let shown = revoker.revoke("v1", "self", &tracker).await;

    assert_eq!(shown, Notification::success("Attestation revoked successfully!"));
    assert_eq!(revoker.notification(), Some(shown));
    assert!(!revoker.is_revoking("v1"));

    let expected = "Revoke attestation for 0xabc0000000000000000000000000000000000123 on self at 1700000000000";
    assert_eq!(h.signer.signed_messages(), [expected]);

    let requests = h.api.revoke_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].message, expected);
    assert_eq!(requests[0].signature, NullSigner::signature_for(expected));
    assert_eq!(requests[0].provider, "self");
    assert_eq!(requests[0].timestamp.as_millis(), 1_700_000_000_000);

    assert_eq!(h.api.status_calls(), 2);
    assert!(tracker.status().unwrap().active().is_empty());
}

#[tokio::test]
async fn each_revocation_is_stamped_with_the_current_time() {
    let h = harness();
    let tracker = tracker(&h);
    let revoker = Revoker::new(h.ctx.clone());

    revoker.revoke("v1", "self", &tracker).await;
    h.clock.advance(1_500);
    revoker.revoke("v2", "coinbase", &tracker).await;

    let requests = h.api.revoke_requests();
    assert_eq!(requests[0].timestamp.as_millis(), 1_700_000_000_000);
    assert_eq!(requests[1].timestamp.as_millis(), 1_700_000_001_500);
    assert!(requests[1].message.ends_with("on coinbase at 1700000001500"));
    assert_ne!(requests[0].signature, requests[1].signature);
}

#[tokio::test]
async fn application_error_message_is_shown_verbatim_and_list_is_unchanged() {
    let h = harness();
    h.api.set_status(Ok(status(true, vec![active("v1", "self")])));
    h.api
        .push_revoke(Err(ApiError::Application("already revoked".into())));
    let tracker = tracker(&h);
    tracker.refetch().await;
    let before = tracker.status();

    let revoker = Revoker::new(h.ctx.clone());
    let shown = revoker.revoke("v1", "self", &tracker).await;

    assert_eq!(shown.kind, NotificationKind::Error);
    assert_eq!(shown.message, "already revoked");
    assert_eq!(tracker.status(), before);
    assert_eq!(h.api.status_calls(), 1);
}

#[tokio::test]
async fn declared_failure_uses_response_message_or_default() {
    let h = harness();
    h.api.set_status(Ok(status(true, vec![active("v1", "x")])));
    h.api.push_revoke(Ok(RevokeResponse::error("signature expired")));
    h.api.push_revoke(Ok(RevokeResponse {
        status: "error".into(),
        message: None,
    }));
    let tracker = tracker(&h);
    let revoker = Revoker::new(h.ctx.clone());

    let first = revoker.revoke("v1", "x", &tracker).await;
    assert_eq!(first, Notification::error("signature expired"));

    let second = revoker.revoke("v1", "x", &tracker).await;
    assert_eq!(second, Notification::error("Failed to revoke attestation"));
    assert_eq!(h.api.status_calls(), 0);
}

#[tokio::test]
async fn signing_rejection_is_handled_without_submitting() {
    let h = harness();
    h.signer.reject_with("User rejected the request.");
    let tracker = tracker(&h);
    let revoker = Revoker::new(h.ctx.clone());

    let shown = revoker.revoke("v1", "self", &tracker).await;

    assert_eq!(shown, Notification::error("User rejected the request."));
    assert!(h.api.revoke_requests().is_empty());
    assert!(!revoker.is_revoking("v1"));
}

#[tokio::test]
async fn concurrent_revokes_track_ids_independently() {
    let h = harness();
    h.api.set_status(Ok(status(
        true,
        vec![active("v1", "self"), active("v2", "coinbase")],
    )));
    let gate = h.api.push_revoke_gated(Ok(RevokeResponse::success("ok")));
    let tracker = tracker(&h);
    tracker.refetch().await;
    let revoker = Revoker::new(h.ctx.clone());

    let slow = revoker.revoke("v1", "self", &tracker);
    let fast = async {
        let shown = revoker.revoke("v2", "coinbase", &tracker).await;
        assert!(!shown.is_error());
        assert!(revoker.is_revoking("v1"));
        assert!(!revoker.is_revoking("v2"));
        gate.notify_one();
    };
    tokio::join!(slow, fast);

    assert!(!revoker.is_revoking("v1"));
    assert_eq!(h.api.revoke_requests().len(), 2);
}

#[tokio::test]
async fn revoke_clears_previous_notification_and_dismiss_works() {
    let h = harness();
    let tracker = tracker(&h);
    let revoker = Revoker::new(h.ctx.clone());
    revoker.show(Notification::error("old"));

    h.signer.reject_with("nope");
    revoker.revoke("v1", "self", &tracker).await;
    assert_eq!(revoker.notification(), Some(Notification::error("nope")));

    revoker.dismiss();
    assert_eq!(revoker.notification(), None);
}

// ---------------------------------------------------------------------------
// 3. Self.xyz start
// ---------------------------------------------------------------------------

#[tokio::test]
async fn self_start_stores_returned_url() {
    let h = harness();
    h.api.set_self_start(Ok(SelfVerificationStart {
        url: "https://self.xyz/verify/abc".into(),
    }));
    let flow = SelfVerification::new(h.ctx.clone());

    let start = flow.start().await.unwrap();
    assert_eq!(start.url, "https://self.xyz/verify/abc");

    let state = flow.state();
    assert!(!state.loading);
    assert_eq!(state.url.as_deref(), Some("https://self.xyz/verify/abc"));
    assert_eq!(state.error, None);

    let requests = h.api.start_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].1.message,
        "Verify ownership of 0xAbC0000000000000000000000000000000000123 for Self.xyz verification at 1700000000000"
    );
}

#[tokio::test]
async fn self_start_failure_is_inline_and_keeps_previous_url() {
    let h = harness();
    let flow = SelfVerification::new(h.ctx.clone());
    flow.start().await.unwrap();

    h.api.set_self_start(Err(ApiError::Network(
        "Failed to fetch Self verification URL".into(),
    )));
    let err = flow.start().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch Self verification URL");

    let state = flow.state();
    assert!(!state.loading);
    assert_eq!(state.url.as_deref(), Some("https://self.xyz/verify/null"));
    assert_eq!(
        state.error.as_deref(),
        Some("Failed to fetch Self verification URL")
    );
}

#[tokio::test]
async fn self_start_signature_rejection() {
    let h = harness();
    h.signer.reject_with("User denied message signature.");
    let flow = SelfVerification::new(h.ctx.clone());

    let err = flow.start().await.unwrap_err();
    assert_eq!(
        err,
        FlowError::Signing(SigningError::Rejected(
            "User denied message signature.".into()
        ))
    );
    assert!(h.api.start_requests().is_empty());
    assert_eq!(
        flow.state().error.as_deref(),
        Some("User denied message signature.")
    );
}

// ---------------------------------------------------------------------------
// 4. Redirect providers
// ---------------------------------------------------------------------------

#[test]
fn redirect_links_come_from_api_builders() {
    let api = NullApi::new();
    let links = redirect_links(&api, &address());
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].url, api.coinbase_verification_url(&address()));
    assert_eq!(links[1].url, api.x_verification_url(&address()));
    assert_eq!(links[0].provider.title(), "Coinbase");
    assert_eq!(links[1].provider.title(), "X (Twitter)");
}
