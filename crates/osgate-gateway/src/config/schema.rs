use serde::Deserialize;

use osgate_core::error::{GateError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub access: AccessSection,

    #[serde(default)]
    pub rate_limit: RateLimitSection,

    #[serde(default)]
    pub reports: ReportSection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(GateError::UnsupportedVersion);
        }
        self.gateway.validate()?;
        self.rate_limit.validate()?;
        self.reports.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_max_query_chars")]
    pub max_query_chars: usize,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            max_query_chars: default_max_query_chars(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        if !(16..=4096).contains(&self.max_query_chars) {
            return Err(GateError::BadRequest(
                "gateway.max_query_chars must be between 16 and 4096".into(),
            ));
        }
        Ok(())
    }
}

fn default_max_query_chars() -> usize {
    512
}

/// Requester access lists. Admin ids are always allowed and always privileged;
/// the whitelist only applies when `require_whitelist` is set.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AccessSection {
    #[serde(default)]
    pub admin_ids: Vec<i64>,

    #[serde(default)]
    pub require_whitelist: bool,

    #[serde(default)]
    pub whitelist: Vec<i64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateLimitSection {
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,

    #[serde(default = "default_period_secs")]
    pub period_secs: u64,
}

impl Default for RateLimitSection {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            period_secs: default_period_secs(),
        }
    }
}

impl RateLimitSection {
    pub fn validate(&self) -> Result<()> {
        if self.max_requests == 0 {
            return Err(GateError::BadRequest(
                "rate_limit.max_requests must be at least 1".into(),
            ));
        }
        if !(1..=3600).contains(&self.period_secs) {
            return Err(GateError::BadRequest(
                "rate_limit.period_secs must be between 1 and 3600".into(),
            ));
        }
        Ok(())
    }
}

fn default_max_requests() -> u32 {
    10
}
fn default_period_secs() -> u64 {
    60
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportSection {
    #[serde(default = "default_max_age_hours")]
    pub max_age_hours: u32,

    #[serde(default = "default_list_limit")]
    pub list_limit: usize,

    #[serde(default = "default_cleanup_interval_secs")]
    pub cleanup_interval_secs: u64,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            max_age_hours: default_max_age_hours(),
            list_limit: default_list_limit(),
            cleanup_interval_secs: default_cleanup_interval_secs(),
        }
    }
}

impl ReportSection {
    pub fn validate(&self) -> Result<()> {
        if self.max_age_hours == 0 {
            return Err(GateError::BadRequest(
                "reports.max_age_hours must be at least 1".into(),
            ));
        }
        if !(1..=100).contains(&self.list_limit) {
            return Err(GateError::BadRequest(
                "reports.list_limit must be between 1 and 100".into(),
            ));
        }
        if !(60..=86400).contains(&self.cleanup_interval_secs) {
            return Err(GateError::BadRequest(
                "reports.cleanup_interval_secs must be between 60 and 86400".into(),
            ));
        }
        Ok(())
    }
}

fn default_max_age_hours() -> u32 {
    24
}
fn default_list_limit() -> usize {
    10
}
fn default_cleanup_interval_secs() -> u64 {
    3600
}
