//! Requester access policy (admin + whitelist).
//!
//! The gateway performs one explicit authorization check per inbound query
//! instead of wrapping individual handlers; denial is a tagged outcome, not a
//! short-circuited call site.

use std::collections::HashSet;

use osgate_core::model::{Privilege, RequesterId};

use crate::config::AccessSection;

/// Compiled access lists. Construct once at startup, then share.
#[derive(Debug)]
pub struct AccessPolicy {
    admin_ids: HashSet<RequesterId>,
    require_whitelist: bool,
    whitelist: HashSet<RequesterId>,
}

impl AccessPolicy {
    pub fn new(section: &AccessSection) -> Self {
        Self {
            admin_ids: section.admin_ids.iter().copied().map(RequesterId).collect(),
            require_whitelist: section.require_whitelist,
            whitelist: section.whitelist.iter().copied().map(RequesterId).collect(),
        }
    }

    /// Privilege level for a requester. Admins bypass rate accounting and
    /// report-ownership checks.
    pub fn privilege_of(&self, id: RequesterId) -> Privilege {
        if self.admin_ids.contains(&id) {
            Privilege::Admin
        } else {
            Privilege::User
        }
    }

    /// Whether the requester may use the gateway at all.
    ///
    /// Everyone is allowed when the whitelist is disabled; admins are always
    /// allowed.
    pub fn is_allowed(&self, id: RequesterId) -> bool {
        if !self.require_whitelist {
            return true;
        }
        self.admin_ids.contains(&id) || self.whitelist.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(admins: &[i64], require: bool, listed: &[i64]) -> AccessSection {
        AccessSection {
            admin_ids: admins.to_vec(),
            require_whitelist: require,
            whitelist: listed.to_vec(),
        }
    }

    #[test]
    fn open_gateway_allows_anyone() {
        let policy = AccessPolicy::new(&section(&[1], false, &[]));
        assert!(policy.is_allowed(RequesterId(42)));
    }

    #[test]
    fn whitelist_gates_non_admins() {
        let policy = AccessPolicy::new(&section(&[1], true, &[7]));
        assert!(policy.is_allowed(RequesterId(1)));
        assert!(policy.is_allowed(RequesterId(7)));
        assert!(!policy.is_allowed(RequesterId(42)));
    }

    #[test]
    fn only_configured_admins_are_privileged() {
        let policy = AccessPolicy::new(&section(&[1], false, &[7]));
        assert!(policy.privilege_of(RequesterId(1)).is_admin());
        assert!(!policy.privilege_of(RequesterId(7)).is_admin());
    }
}
