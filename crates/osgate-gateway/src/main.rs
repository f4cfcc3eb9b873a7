//! osgate Gateway host process.
//!
//! The chat transport registers its lookup services and feeds queries into
//! `Gateway::handle`; this binary builds the service objects from config and
//! drives the periodic report-store cleanup.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

use osgate_gateway::{config, AccessPolicy, Gateway, LookupRegistry, RateLimiter, ReportStore};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("osgate.yaml").expect("config load failed");

    let access = AccessPolicy::new(&cfg.access);
    let limiter = RateLimiter::new(
        cfg.rate_limit.max_requests,
        Duration::from_secs(cfg.rate_limit.period_secs),
    );
    let store = ReportStore::new();
    let lookups = LookupRegistry::new();

    let gateway = Arc::new(Gateway::new(
        access,
        limiter,
        store,
        lookups,
        cfg.gateway.max_query_chars,
    ));

    tracing::info!(
        max_requests = cfg.rate_limit.max_requests,
        period_secs = cfg.rate_limit.period_secs,
        report_max_age_hours = cfg.reports.max_age_hours,
        "osgate-gateway starting"
    );

    let max_age = chrono::Duration::hours(i64::from(cfg.reports.max_age_hours));
    let mut ticker = tokio::time::interval(Duration::from_secs(cfg.reports.cleanup_interval_secs));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let removed = gateway.store().cleanup(max_age, chrono::Utc::now());
        tracing::debug!(removed, held = gateway.store().len(), "cleanup pass finished");
    }
}
