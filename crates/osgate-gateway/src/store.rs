//! Owner-scoped, time-expiring report store.
//!
//! Reports are keyed by an id combining the creation date with a
//! process-global monotonic counter. The counter never resets, so ids stay
//! unique across day boundaries; past 9999 the zero-padded width simply grows
//! and the date prefix becomes informational rather than a per-day sequence.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

use osgate_core::error::ClientCode;
use osgate_core::model::{LookupKind, Privilege, Report, ReportId, RequesterId};

/// Who is asking. `Internal` is the unauthenticated/in-process path with no
/// identity filter; `Requester` carries the resolved privilege.
#[derive(Debug, Clone, Copy)]
pub enum Access {
    Internal,
    Requester(RequesterId, Privilege),
}

impl Access {
    fn may_touch(self, owner: RequesterId) -> bool {
        match self {
            Access::Internal => true,
            Access::Requester(id, privilege) => id == owner || privilege.is_admin(),
        }
    }
}

/// Outcome of an addressed read. Callers must branch; none of these raise.
#[derive(Debug, Clone)]
pub enum ReportAccess {
    Found(Report),
    NotFound,
    Forbidden,
}

impl ReportAccess {
    /// Stable client-facing code for the transport layer; `None` when found.
    pub fn client_code(&self) -> Option<ClientCode> {
        match self {
            ReportAccess::Found(_) => None,
            ReportAccess::NotFound => Some(ClientCode::NotFound),
            ReportAccess::Forbidden => Some(ClientCode::AccessDenied),
        }
    }
}

/// Report table:
/// - `report_id -> Report`
/// - global sequence for id allocation (never reused while the process runs)
#[derive(Default)]
pub struct ReportStore {
    reports: DashMap<ReportId, Report>,
    seq: AtomicU64,
}

impl ReportStore {
    pub fn new() -> Self {
        Self {
            reports: DashMap::new(),
            seq: AtomicU64::new(0),
        }
    }

    /// Insert a completed-lookup summary and return its fresh id.
    pub fn create(
        &self,
        owner: RequesterId,
        kind: LookupKind,
        payload: serde_json::Value,
        rendered_text: String,
        now: DateTime<Utc>,
    ) -> ReportId {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed) + 1;
        let id = ReportId::compose(now, seq);
        let report = Report {
            id: id.clone(),
            owner,
            kind,
            created_at: now,
            payload,
            rendered_text,
        };
        self.reports.insert(id.clone(), report);
        tracing::info!(report_id = %id, %owner, kind = %kind, "report created");
        id
    }

    /// Fetch a report, enforcing ownership unless the accessor is internal or
    /// privileged.
    pub fn get(&self, id: &ReportId, accessor: Access) -> ReportAccess {
        match self.reports.get(id) {
            None => ReportAccess::NotFound,
            Some(entry) => {
                if accessor.may_touch(entry.owner) {
                    ReportAccess::Found(entry.value().clone())
                } else {
                    ReportAccess::Forbidden
                }
            }
        }
    }

    /// A requester's reports, newest first, truncated to `limit`.
    pub fn list_by_owner(&self, owner: RequesterId, limit: usize) -> Vec<Report> {
        let mut reports: Vec<Report> = self
            .reports
            .iter()
            .filter(|e| e.value().owner == owner)
            .map(|e| e.value().clone())
            .collect();
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        reports.truncate(limit);
        reports
    }

    /// Delete under the same ownership rule as `get`. Returns whether a
    /// deletion occurred.
    pub fn delete(&self, id: &ReportId, accessor: Access) -> bool {
        self.reports
            .remove_if(id, |_, report| accessor.may_touch(report.owner))
            .is_some()
    }

    /// Remove every report older than `max_age` relative to `now`; returns the
    /// removed count. Idempotent once expired entries are gone.
    pub fn cleanup(&self, max_age: Duration, now: DateTime<Utc>) -> usize {
        let expired: Vec<ReportId> = self
            .reports
            .iter()
            .filter(|e| now.signed_duration_since(e.value().created_at) > max_age)
            .map(|e| e.key().clone())
            .collect();

        let mut removed = 0;
        for id in expired {
            // Re-check age under the entry lock; a concurrent delete is fine.
            if self
                .reports
                .remove_if(&id, |_, r| now.signed_duration_since(r.created_at) > max_age)
                .is_some()
            {
                removed += 1;
            }
        }
        if removed > 0 {
            tracing::info!(removed, "expired reports cleaned up");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
