//! Shared data model: requester identity, lookup kinds, and completed-lookup
//! reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GateError;

/// Opaque requester identity (maps to a chat user in the excluded transport).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequesterId(pub i64);

impl std::fmt::Display for RequesterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Privilege level resolved per request by the access layer.
///
/// Admins bypass rate accounting and report-ownership checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privilege {
    Admin,
    User,
}

impl Privilege {
    pub fn is_admin(self) -> bool {
        matches!(self, Privilege::Admin)
    }
}

/// Lookup families exposed by the excluded transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupKind {
    Ip,
    Domain,
    Threat,
    Breach,
    Track,
    Postcode,
    UserCheck,
}

impl LookupKind {
    /// Stable tag used in report listings and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            LookupKind::Ip => "ip",
            LookupKind::Domain => "domain",
            LookupKind::Threat => "threat",
            LookupKind::Breach => "breach",
            LookupKind::Track => "track",
            LookupKind::Postcode => "postcode",
            LookupKind::UserCheck => "usercheck",
        }
    }
}

impl std::str::FromStr for LookupKind {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ip" => Ok(LookupKind::Ip),
            "domain" => Ok(LookupKind::Domain),
            "threat" => Ok(LookupKind::Threat),
            "breach" => Ok(LookupKind::Breach),
            "track" => Ok(LookupKind::Track),
            "postcode" => Ok(LookupKind::Postcode),
            "usercheck" => Ok(LookupKind::UserCheck),
            other => Err(GateError::BadRequest(format!("unknown lookup kind: {other}"))),
        }
    }
}

impl std::fmt::Display for LookupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report identifier: `RPT{YYYYMMDD}{counter:04}`.
///
/// The counter is process-global and never reused or reset, so ids stay unique
/// for the life of the process even across day boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(pub String);

impl ReportId {
    /// Compose an id from a wall-clock date and a global sequence number.
    pub fn compose(now: DateTime<Utc>, seq: u64) -> Self {
        ReportId(format!("RPT{}{:04}", now.format("%Y%m%d"), seq))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A completed-lookup summary held by the report store.
///
/// Created once by the gateway after a successful lookup; never mutated;
/// destroyed only by expiry-driven cleanup or explicit deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    pub owner: RequesterId,
    pub kind: LookupKind,
    pub created_at: DateTime<Utc>,
    /// Opaque structured result from the lookup collaborator.
    pub payload: serde_json::Value,
    /// Pre-formatted summary for the requester.
    pub rendered_text: String,
}
