//! User-facing policy texts: the block warning and the `/ethics` help topic.

use super::ClassificationResult;

const WARNING_HEADER: &str = "POLICY VIOLATION DETECTED\n\n\
Your query requests categories of sensitive data this gateway refuses to touch:\n";

const WARNING_FOOTER: &str = "\nThis gateway CANNOT and WILL NOT access:\n\
- sensitive personal identity data (national ID, bank records, tax ID)\n\
- criminal records or law-enforcement data\n\
- target email accounts or passwords\n\
- face recognition or biometric identification\n\
- protected internal or proprietary data\n\
\n\
LEGAL NOTICE:\n\
Reaching for sensitive personal data without authorization violates\n\
data-protection law (UU PDP, UU ITE, GDPR and international equivalents).\n\
This attempt has been recorded in the audit log.\n\
\n\
Use /ethics to review the legitimate-use guidelines.\n";

/// Render the deterministic block warning for a classification result.
///
/// Fixed banner, one bullet per violation description in detection order,
/// fixed legal-notice block, fixed ethics pointer. No randomness.
pub fn warning_message(result: &ClassificationResult) -> String {
    let mut out = String::with_capacity(WARNING_HEADER.len() + WARNING_FOOTER.len() + 128);
    out.push_str(WARNING_HEADER);
    for v in &result.violations {
        out.push_str("\u{2022} ");
        out.push_str(v.description);
        out.push('\n');
    }
    out.push_str(WARNING_FOOTER);
    out
}

/// Body of the `/ethics` help topic.
pub fn ethics_text() -> &'static str {
    "Ethics & legitimate-use guidelines\n\
\n\
PERMITTED USE:\n\
- security research and auditing of infrastructure you own or are\n\
  authorized in writing to test\n\
- threat intelligence: IP/domain reputation for incident response,\n\
  indicator-of-compromise analysis, attribution from public sources\n\
- digital forensics: incident investigation, malware-infrastructure\n\
  analysis, timeline reconstruction from public data\n\
- legitimate OSINT: academic research with ethical clearance, public\n\
  interest journalism, due diligence, background checks with consent\n\
\n\
PROHIBITED USE:\n\
- stalking, harassment, or doxing of individuals\n\
- identity theft or impersonation\n\
- unauthorized access to systems or accounts\n\
- mass surveillance without a legal basis\n\
- checks on personal data without the subject's consent\n\
\n\
PRINCIPLES:\n\
1. Legal compliance: follow UU PDP, UU ITE, GDPR, and platform terms.\n\
2. Explicit consent: written authorization before any testing; respect\n\
   the agreed scope and stop immediately when asked.\n\
3. Data minimization: collect only what is necessary, delete it when it\n\
   is no longer needed.\n\
4. Do no harm: never cause damage or disruption; protect privacy.\n\
\n\
By using this gateway you agree to comply with these guidelines."
}
