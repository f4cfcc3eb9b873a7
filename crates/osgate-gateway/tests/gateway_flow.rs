//! End-to-end pipeline tests with a fake lookup collaborator.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::json;

use osgate_core::error::{GateError, Result};
use osgate_core::model::{LookupKind, RequesterId};
use osgate_gateway::config::AccessSection;
use osgate_gateway::gateway::report_summary;
use osgate_gateway::{
    Access, AccessPolicy, GateOutcome, Gateway, LookupOutput, LookupRegistry, LookupService,
    QueryRequest, RateLimiter, ReportAccess, ReportStore,
};

const U1: RequesterId = RequesterId(100);
const ADMIN: RequesterId = RequesterId(1);

struct FakeLookup {
    kind: LookupKind,
    calls: Arc<AtomicUsize>,
    fail: bool,
}

#[async_trait]
impl LookupService for FakeLookup {
    fn kind(&self) -> LookupKind {
        self.kind
    }

    async fn perform(&self, query: &str) -> Result<LookupOutput> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(GateError::LookupFailed("upstream timeout".into()));
        }
        Ok(LookupOutput {
            payload: json!({"query": query}),
            rendered_text: format!("result for {query}"),
        })
    }
}

fn build(access: AccessSection, max_requests: u32, fail: bool) -> (Gateway, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let lookups = LookupRegistry::new();
    lookups.register(Arc::new(FakeLookup {
        kind: LookupKind::Ip,
        calls: Arc::clone(&calls),
        fail,
    }));

    let gateway = Gateway::new(
        AccessPolicy::new(&access),
        RateLimiter::new(max_requests, Duration::from_secs(60)),
        ReportStore::new(),
        lookups,
        512,
    );
    (gateway, calls)
}

fn open_access() -> AccessSection {
    AccessSection {
        admin_ids: vec![ADMIN.0],
        require_whitelist: false,
        whitelist: vec![],
    }
}

fn request(requester: RequesterId, query: &str) -> QueryRequest {
    QueryRequest {
        requester,
        kind: LookupKind::Ip,
        query: query.into(),
    }
}

fn wall() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
}

#[tokio::test]
async fn blocked_query_never_reaches_lookup() {
    let (gateway, calls) = build(open_access(), 10, false);

    let outcome = gateway
        .handle(request(U1, "NIK 1234567890123456"), wall(), Instant::now())
        .await;

    match outcome {
        GateOutcome::Blocked { message, violations } => {
            assert!(!violations.is_empty());
            assert!(message.contains("/ethics"));
        }
        other => panic!("expected Blocked, got {other:?}"),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(gateway.store().is_empty());
}

#[tokio::test]
async fn allowed_query_creates_one_owned_report() {
    let (gateway, calls) = build(open_access(), 10, false);

    let outcome = gateway
        .handle(request(U1, "8.8.8.8"), wall(), Instant::now())
        .await;

    let report_id = match outcome {
        GateOutcome::Completed { report_id, rendered_text } => {
            assert_eq!(rendered_text, "result for 8.8.8.8");
            report_id
        }
        other => panic!("expected Completed, got {other:?}"),
    };
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(gateway.store().len(), 1);

    match gateway.store().get(&report_id, gateway.access_for(U1)) {
        ReportAccess::Found(report) => {
            assert_eq!(report.owner, U1);
            assert_eq!(report.kind, LookupKind::Ip);
            let summary = report_summary(&report);
            assert!(summary.contains(report_id.as_str()));
            assert!(summary.contains("IP"));
        }
        other => panic!("expected Found, got {other:?}"),
    }
}

#[tokio::test]
async fn throttled_query_skips_lookup() {
    let (gateway, calls) = build(open_access(), 1, false);
    let t0 = Instant::now();

    let first = gateway.handle(request(U1, "8.8.8.8"), wall(), t0).await;
    assert!(matches!(first, GateOutcome::Completed { .. }));

    let second = gateway.handle(request(U1, "1.1.1.1"), wall(), t0).await;
    match second {
        GateOutcome::RateLimited { wait_secs } => assert_eq!(wait_secs, 60),
        other => panic!("expected RateLimited, got {other:?}"),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(gateway.store().len(), 1);
}

#[tokio::test]
async fn admin_bypasses_rate_accounting() {
    let (gateway, calls) = build(open_access(), 1, false);
    let t0 = Instant::now();

    for _ in 0..5 {
        let outcome = gateway.handle(request(ADMIN, "8.8.8.8"), wall(), t0).await;
        assert!(matches!(outcome, GateOutcome::Completed { .. }));
    }
    assert_eq!(calls.load(Ordering::SeqCst), 5);
}

#[tokio::test]
async fn lookup_failure_creates_no_report() {
    let (gateway, calls) = build(open_access(), 10, true);

    let outcome = gateway
        .handle(request(U1, "8.8.8.8"), wall(), Instant::now())
        .await;

    match outcome {
        GateOutcome::LookupFailed { reason } => assert!(reason.contains("upstream timeout")),
        other => panic!("expected LookupFailed, got {other:?}"),
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(gateway.store().is_empty());
}

#[tokio::test]
async fn non_whitelisted_requester_is_denied() {
    let access = AccessSection {
        admin_ids: vec![ADMIN.0],
        require_whitelist: true,
        whitelist: vec![],
    };
    let (gateway, calls) = build(access, 10, false);

    let outcome = gateway
        .handle(request(U1, "8.8.8.8"), wall(), Instant::now())
        .await;

    assert!(matches!(outcome, GateOutcome::Denied { .. }));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn empty_query_is_invalid() {
    let (gateway, calls) = build(open_access(), 10, false);

    let outcome = gateway
        .handle(request(U1, "   "), wall(), Instant::now())
        .await;

    assert!(matches!(outcome, GateOutcome::Invalid { .. }));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unregistered_kind_surfaces_as_lookup_failure() {
    let (gateway, _calls) = build(open_access(), 10, false);

    let outcome = gateway
        .handle(
            QueryRequest {
                requester: U1,
                kind: LookupKind::Domain,
                query: "example.com".into(),
            },
            wall(),
            Instant::now(),
        )
        .await;

    match outcome {
        GateOutcome::LookupFailed { reason } => assert!(reason.contains("domain")),
        other => panic!("expected LookupFailed, got {other:?}"),
    }
    assert!(gateway.store().is_empty());
}

#[tokio::test]
async fn outcomes_map_to_stable_client_codes() {
    let (gateway, _calls) = build(open_access(), 1, false);
    let t0 = Instant::now();

    let blocked = gateway
        .handle(request(U1, "NIK 1234567890123456"), wall(), t0)
        .await;
    assert_eq!(blocked.client_code().map(|c| c.as_str()), Some("BLOCKED"));

    let invalid = gateway.handle(request(U1, ""), wall(), t0).await;
    assert_eq!(invalid.client_code().map(|c| c.as_str()), Some("BAD_REQUEST"));

    let completed = gateway.handle(request(U1, "8.8.8.8"), wall(), t0).await;
    assert_eq!(completed.client_code(), None);

    let throttled = gateway.handle(request(U1, "1.1.1.1"), wall(), t0).await;
    assert_eq!(
        throttled.client_code().map(|c| c.as_str()),
        Some("RATE_LIMITED")
    );
}

#[tokio::test]
async fn stats_reflect_quota_and_report_count() {
    let (gateway, _calls) = build(open_access(), 10, false);
    let t0 = Instant::now();

    gateway.handle(request(U1, "8.8.8.8"), wall(), t0).await;

    let stats = gateway.stats(U1, t0);
    assert_eq!(stats.reports_held, 1);
    assert_eq!(stats.remaining_quota, Some(9));

    let admin_stats = gateway.stats(ADMIN, t0);
    assert_eq!(admin_stats.remaining_quota, None);

    // Internal path reads the report without an identity filter.
    let listed = gateway.store().list_by_owner(U1, 10);
    assert_eq!(listed.len(), 1);
    assert!(matches!(
        gateway.store().get(&listed[0].id, Access::Internal),
        ReportAccess::Found(_)
    ));
}
