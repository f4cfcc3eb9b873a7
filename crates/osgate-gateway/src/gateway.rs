//! Query pipeline: access check, policy classification, rate accounting,
//! lookup dispatch, report creation.
//!
//! Built from explicit service objects injected at startup; the gateway holds
//! no global state. Every stage yields a first-class outcome instead of an
//! error, so the transport layer can render each case directly.

use std::time::Instant;

use chrono::{DateTime, Utc};

use osgate_core::classify::{self, Violation};
use osgate_core::error::ClientCode;
use osgate_core::model::{LookupKind, ReportId, RequesterId};

use crate::access::AccessPolicy;
use crate::limiter::{RateDecision, RateLimiter};
use crate::lookup::LookupRegistry;
use crate::store::{Access, ReportStore};

/// One inbound query, already parsed by the transport layer.
#[derive(Debug, Clone)]
pub struct QueryRequest {
    pub requester: RequesterId,
    pub kind: LookupKind,
    pub query: String,
}

/// Exhaustive pipeline outcome. No variant is an error; the caller branches
/// and renders.
#[derive(Debug)]
pub enum GateOutcome {
    /// Requester is not on the whitelist.
    Denied { message: String },
    /// Query is malformed (empty or oversized).
    Invalid { message: String },
    /// Policy classifier matched at least one sensitive-data category.
    Blocked {
        message: String,
        violations: Vec<Violation>,
    },
    /// Sliding window is full; retry after the wait elapses.
    RateLimited { wait_secs: u64 },
    /// Collaborator failure; no report was created.
    LookupFailed { reason: String },
    /// Lookup succeeded and the result was stored.
    Completed {
        report_id: ReportId,
        rendered_text: String,
    },
}

impl GateOutcome {
    /// Stable client-facing code for the transport layer; `None` for success.
    pub fn client_code(&self) -> Option<ClientCode> {
        match self {
            GateOutcome::Denied { .. } => Some(ClientCode::AccessDenied),
            GateOutcome::Invalid { .. } => Some(ClientCode::BadRequest),
            GateOutcome::Blocked { .. } => Some(ClientCode::Blocked),
            GateOutcome::RateLimited { .. } => Some(ClientCode::RateLimited),
            GateOutcome::LookupFailed { .. } => Some(ClientCode::LookupFailed),
            GateOutcome::Completed { .. } => None,
        }
    }
}

pub struct Gateway {
    access: AccessPolicy,
    limiter: RateLimiter,
    store: ReportStore,
    lookups: LookupRegistry,
    max_query_chars: usize,
}

impl Gateway {
    pub fn new(
        access: AccessPolicy,
        limiter: RateLimiter,
        store: ReportStore,
        lookups: LookupRegistry,
        max_query_chars: usize,
    ) -> Self {
        Self {
            access,
            limiter,
            store,
            lookups,
            max_query_chars,
        }
    }

    /// Run one query through the gate.
    ///
    /// `now_wall` stamps any created report; `now_mono` drives rate
    /// accounting. Both are explicit so tests control time.
    pub async fn handle(
        &self,
        request: QueryRequest,
        now_wall: DateTime<Utc>,
        now_mono: Instant,
    ) -> GateOutcome {
        let requester = request.requester;

        if !self.access.is_allowed(requester) {
            return GateOutcome::Denied {
                message: "Access denied. This gateway requires a whitelisted requester; \
                          contact an administrator."
                    .into(),
            };
        }

        let query = request.query.trim();
        if query.is_empty() {
            return GateOutcome::Invalid {
                message: "Empty query.".into(),
            };
        }
        if query.chars().count() > self.max_query_chars {
            return GateOutcome::Invalid {
                message: format!("Query exceeds {} characters.", self.max_query_chars),
            };
        }

        let classification = classify::classify(query);
        if classification.is_blocked() {
            tracing::warn!(
                %requester,
                categories = ?classification.categories(),
                "query blocked by sensitive-data policy"
            );
            let message = classify::warning_message(&classification);
            return GateOutcome::Blocked {
                message,
                violations: classification.violations,
            };
        }

        let privilege = self.access.privilege_of(requester);
        if let RateDecision::Throttled { wait } =
            self.limiter.check_and_record(requester, privilege, now_mono)
        {
            tracing::debug!(%requester, wait_secs = wait.as_secs(), "query throttled");
            return GateOutcome::RateLimited {
                wait_secs: wait.as_secs(),
            };
        }

        let output = match self.lookups.dispatch(request.kind, query).await {
            Ok(output) => output,
            Err(e) => {
                // Collaborator failed: surface the reason, create no report.
                return GateOutcome::LookupFailed {
                    reason: e.to_string(),
                };
            }
        };

        let report_id = self.store.create(
            requester,
            request.kind,
            output.payload,
            output.rendered_text.clone(),
            now_wall,
        );

        GateOutcome::Completed {
            report_id,
            rendered_text: output.rendered_text,
        }
    }

    /// Accessor value for report-store calls on behalf of a requester.
    pub fn access_for(&self, id: RequesterId) -> Access {
        Access::Requester(id, self.access.privilege_of(id))
    }

    pub fn access(&self) -> &AccessPolicy {
        &self.access
    }

    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    pub fn store(&self) -> &ReportStore {
        &self.store
    }

    pub fn lookups(&self) -> &LookupRegistry {
        &self.lookups
    }

    /// Body of the `/ethics` help topic.
    pub fn ethics_text(&self) -> &'static str {
        classify::ethics_text()
    }

    /// Usage counters for the admin `/stats` surface.
    pub fn stats(&self, id: RequesterId, now_mono: Instant) -> GatewayStats {
        let privilege = self.access.privilege_of(id);
        GatewayStats {
            reports_held: self.store.len(),
            remaining_quota: self.limiter.remaining(id, privilege, now_mono),
        }
    }
}

/// Point-in-time usage snapshot. `remaining_quota` is `None` for admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatewayStats {
    pub reports_held: usize,
    pub remaining_quota: Option<u32>,
}

/// Render one report as the requester-facing summary block.
pub fn report_summary(report: &osgate_core::model::Report) -> String {
    format!(
        "Report Summary\n\n\
         Report ID: {}\n\
         Type: {}\n\
         Generated: {}\n\
         {}\n\
         {}",
        report.id,
        report.kind.as_str().to_uppercase(),
        report.created_at.format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(40),
        report.rendered_text,
    )
}
