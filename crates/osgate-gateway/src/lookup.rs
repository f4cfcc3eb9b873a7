//! Lookup-service registry.
//!
//! The concrete OSINT integrations (IP, domain, threat-intel, breach,
//! tracking, postcode, username) live outside this crate; each one plugs in
//! behind `LookupService`. The gateway dispatches to them only after the
//! policy classifier and rate limiter both allow the request.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use osgate_core::error::{GateError, Result};
use osgate_core::model::LookupKind;

/// Successful collaborator output: the structured payload plus a
/// pre-formatted summary for the requester.
#[derive(Debug, Clone)]
pub struct LookupOutput {
    pub payload: serde_json::Value,
    pub rendered_text: String,
}

#[async_trait]
pub trait LookupService: Send + Sync {
    fn kind(&self) -> LookupKind;
    async fn perform(&self, query: &str) -> Result<LookupOutput>;
}

/// Registry and dispatcher for lookup services.
#[derive(Default)]
pub struct LookupRegistry {
    services: DashMap<LookupKind, Arc<dyn LookupService>>,
}

impl LookupRegistry {
    pub fn new() -> Self {
        Self {
            services: DashMap::new(),
        }
    }

    pub fn register(&self, svc: Arc<dyn LookupService>) {
        self.services.insert(svc.kind(), svc);
    }

    pub fn registered_kinds(&self) -> Vec<LookupKind> {
        self.services.iter().map(|e| *e.key()).collect()
    }

    pub async fn dispatch(&self, kind: LookupKind, query: &str) -> Result<LookupOutput> {
        let svc = self
            .services
            .get(&kind)
            .ok_or_else(|| GateError::BadRequest(format!("no lookup service for kind: {kind}")))?
            .value()
            .clone();
        svc.perform(query).await
    }
}
