//! Sensitive-data policy classifier.
//!
//! A fixed, ordered table of `{category, matcher}` rules is evaluated
//! uniformly against the full query text. Every rule is always checked, so
//! violations accumulate in category order instead of short-circuiting on the
//! first hit. Classification is pure and panic-free: text that matches no
//! category simply yields an empty violation list.

pub mod matchers;
pub mod message;

use matchers::{Matcher, RegexHolder};

pub use message::{ethics_text, warning_message};

/// A single matched policy category for a given input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationCategory {
    NationalIdPattern,
    NationalIdKeyword,
    BankKeyword,
    BankAccountPattern,
    CreditCardPattern,
    TaxIdPattern,
    CriminalRecordKeyword,
    CredentialKeyword,
    BiometricKeyword,
    ProprietaryKeyword,
    LawEnforcementKeyword,
}

impl ViolationCategory {
    /// Stable tag used in audit logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ViolationCategory::NationalIdPattern => "national-id-pattern",
            ViolationCategory::NationalIdKeyword => "national-id-keyword",
            ViolationCategory::BankKeyword => "bank-keyword",
            ViolationCategory::BankAccountPattern => "bank-account-pattern",
            ViolationCategory::CreditCardPattern => "credit-card-pattern",
            ViolationCategory::TaxIdPattern => "tax-id-pattern",
            ViolationCategory::CriminalRecordKeyword => "criminal-record-keyword",
            ViolationCategory::CredentialKeyword => "credential-keyword",
            ViolationCategory::BiometricKeyword => "biometric-keyword",
            ViolationCategory::ProprietaryKeyword => "proprietary-keyword",
            ViolationCategory::LawEnforcementKeyword => "law-enforcement-keyword",
        }
    }
}

/// Matched category plus its human-readable description. Immutable value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    pub category: ViolationCategory,
    pub description: &'static str,
}

/// Outcome of classifying one query text.
#[derive(Debug, Clone, Default)]
pub struct ClassificationResult {
    /// Violations in detection order (fixed category evaluation order).
    pub violations: Vec<Violation>,
}

impl ClassificationResult {
    pub fn is_blocked(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Category tags for audit logging.
    pub fn categories(&self) -> Vec<&'static str> {
        self.violations.iter().map(|v| v.category.as_str()).collect()
    }
}

/// One row of the classification table.
struct Rule {
    category: ViolationCategory,
    description: &'static str,
    matcher: Matcher,
}

// Pattern definitions. Keyword sets carry both English terms and the
// Indonesian equivalents the upstream policy covers.
static NATIONAL_ID_SHAPE: RegexHolder = RegexHolder::new(r"\b\d{16}\b");
static NATIONAL_ID_KEYWORDS: RegexHolder = RegexHolder::new(
    r"(?i)\b(?:ktp|nik|nomor.*induk|identitas.*kependudukan|population identity number)\b",
);
static BANK_KEYWORDS: RegexHolder = RegexHolder::new(
    r"(?i)\b(?:rekening|account.*number|bank.*account|bca|mandiri|bni|bri|balance|saldo|pin|cvv|cvc)\b",
);
static ACCOUNT_NUMBER_SHAPE: RegexHolder =
    RegexHolder::new(r"\b\d{10,16}\b|\b\d{3,4}[-\s]\d{3,4}[-\s]\d{3,8}\b");
static BANK_CONTEXT_TOKENS: RegexHolder =
    RegexHolder::new(r"(?i)\b(?:bank|rekening|account|bca|mandiri|bni|bri)\b");
static NPWP_SHAPE: RegexHolder =
    RegexHolder::new(r"\b\d{2}[.\s]?\d{3}[.\s]?\d{3}[.\s]?\d[-.\s]?\d{3}[.\s]?\d{3}\b");
static CRIMINAL_KEYWORDS: RegexHolder = RegexHolder::new(
    r"(?i)\b(?:rekam.*kriminal|criminal.*record|police.*record|catatan.*polisi|tahanan|penjara|terpidana|bui)\b",
);
static CREDENTIAL_KEYWORDS: RegexHolder = RegexHolder::new(
    r"(?i)\b(?:password|passwd|pwd|credential|login.*info|email.*password|hack.*email|breach.*email)\b",
);
static BIOMETRIC_KEYWORDS: RegexHolder = RegexHolder::new(
    r"(?i)\b(?:face.*recogni\w*|facial.*recogni\w*|finger.*print|retina.*scan|iris.*scan|biometric|sidik.*jari|wajah.*pengenalan)\b",
);
static PROPRIETARY_KEYWORDS: RegexHolder = RegexHolder::new(
    r"(?i)\b(?:proprietary|confidential|internal.*data|trade.*secret|rahasia.*dagang|data.*internal|non.*public)\b",
);
static LAW_ENFORCEMENT_KEYWORDS: RegexHolder = RegexHolder::new(
    r"(?i)\b(?:law.*enforcement|penegak.*hukum|kepolisian|polri|fbi|cia|interpol|bnn|kpk)\b",
);

// Bank-account detection is AND-composed: the digit shape alone must not
// trigger (tracking numbers and postcodes share it); a banking context token
// must co-occur somewhere in the same text.
static BANK_ACCOUNT_PARTS: [Matcher; 2] = [
    Matcher::Pattern(&ACCOUNT_NUMBER_SHAPE),
    Matcher::Keywords(&BANK_CONTEXT_TOKENS),
];

static RULES: &[Rule] = &[
    Rule {
        category: ViolationCategory::NationalIdPattern,
        description: "national ID number pattern (16-digit run)",
        matcher: Matcher::Pattern(&NATIONAL_ID_SHAPE),
    },
    Rule {
        category: ViolationCategory::NationalIdKeyword,
        description: "national ID keyword (KTP/NIK)",
        matcher: Matcher::Keywords(&NATIONAL_ID_KEYWORDS),
    },
    Rule {
        category: ViolationCategory::BankKeyword,
        description: "banking keyword (account, balance, PIN, CVV)",
        matcher: Matcher::Keywords(&BANK_KEYWORDS),
    },
    Rule {
        category: ViolationCategory::BankAccountPattern,
        description: "bank account number pattern with banking context",
        matcher: Matcher::All(&BANK_ACCOUNT_PARTS),
    },
    Rule {
        category: ViolationCategory::CreditCardPattern,
        description: "credit card number pattern (Luhn-valid)",
        matcher: Matcher::CardNumber,
    },
    Rule {
        category: ViolationCategory::TaxIdPattern,
        description: "tax ID (NPWP) pattern",
        matcher: Matcher::Pattern(&NPWP_SHAPE),
    },
    Rule {
        category: ViolationCategory::CriminalRecordKeyword,
        description: "criminal record keyword",
        matcher: Matcher::Keywords(&CRIMINAL_KEYWORDS),
    },
    Rule {
        category: ViolationCategory::CredentialKeyword,
        description: "password/credential keyword",
        matcher: Matcher::Keywords(&CREDENTIAL_KEYWORDS),
    },
    Rule {
        category: ViolationCategory::BiometricKeyword,
        description: "biometric data keyword",
        matcher: Matcher::Keywords(&BIOMETRIC_KEYWORDS),
    },
    Rule {
        category: ViolationCategory::ProprietaryKeyword,
        description: "proprietary/internal data keyword",
        matcher: Matcher::Keywords(&PROPRIETARY_KEYWORDS),
    },
    Rule {
        category: ViolationCategory::LawEnforcementKeyword,
        description: "law enforcement keyword",
        matcher: Matcher::Keywords(&LAW_ENFORCEMENT_KEYWORDS),
    },
];

/// Classify one query text against the full rule table.
///
/// Pure and deterministic: same text, same result. Case-insensitivity lives in
/// the patterns themselves.
pub fn classify(text: &str) -> ClassificationResult {
    let mut result = ClassificationResult::default();
    for rule in RULES {
        if rule.matcher.matches(text) {
            result.violations.push(Violation {
                category: rule.category,
                description: rule.description,
            });
        }
    }
    result
}
