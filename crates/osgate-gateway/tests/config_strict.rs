#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use osgate_gateway::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
rate_limit:
  max_requestz: 10 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn ok_minimal_config_applies_defaults() {
    let ok = r#"
version: 1
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.rate_limit.max_requests, 10);
    assert_eq!(cfg.rate_limit.period_secs, 60);
    assert_eq!(cfg.reports.max_age_hours, 24);
    assert_eq!(cfg.reports.list_limit, 10);
    assert!(!cfg.access.require_whitelist);
    assert!(cfg.access.admin_ids.is_empty());
}

#[test]
fn unsupported_version_rejected() {
    let err = config::load_from_str("version: 2").expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn zero_max_requests_rejected() {
    let bad = r#"
version: 1
rate_limit:
  max_requests: 0
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn out_of_range_period_rejected() {
    let bad = r#"
version: 1
rate_limit:
  period_secs: 7200
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn access_lists_parse() {
    let ok = r#"
version: 1
access:
  admin_ids: [1, 2]
  require_whitelist: true
  whitelist: [7]
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.access.admin_ids, vec![1, 2]);
    assert!(cfg.access.require_whitelist);
    assert_eq!(cfg.access.whitelist, vec![7]);
}
