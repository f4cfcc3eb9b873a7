//! osgate gateway library entry.
//!
//! This crate wires the policy classifier, rate limiter, report store, and
//! lookup-service registry into a cohesive query gate. It is intended to be
//! consumed by the binary (`main.rs`), by the chat transport layer, and by
//! integration tests.

pub mod access;
pub mod config;
pub mod gateway;
pub mod limiter;
pub mod lookup;
pub mod store;

pub use access::AccessPolicy;
pub use gateway::{GateOutcome, Gateway, QueryRequest};
pub use limiter::{RateDecision, RateLimiter};
pub use lookup::{LookupOutput, LookupRegistry, LookupService};
pub use store::{Access, ReportAccess, ReportStore};
