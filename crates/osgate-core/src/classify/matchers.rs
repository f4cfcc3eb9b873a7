//! Matcher primitives for the classification table.
//!
//! Matchers are a small closed set: regex patterns, keyword-set regexes,
//! AND-composition over sub-matchers, and the Luhn-gated card-number shape.
//! All of them are infallible at match time; a pattern that fails to compile
//! is treated as never matching (static patterns are pinned by tests).

use std::sync::OnceLock;

use regex::Regex;

/// Lazily compiled regex with a static pattern string.
pub struct RegexHolder {
    pattern: &'static str,
    cell: OnceLock<Option<Regex>>,
}

impl RegexHolder {
    pub const fn new(pattern: &'static str) -> Self {
        Self {
            pattern,
            cell: OnceLock::new(),
        }
    }

    /// Compiled regex, or `None` if the pattern is invalid.
    pub fn regex(&self) -> Option<&Regex> {
        self.cell
            .get_or_init(|| Regex::new(self.pattern).ok())
            .as_ref()
    }

    fn is_match(&self, text: &str) -> bool {
        self.regex().is_some_and(|re| re.is_match(text))
    }
}

/// Grouped 4x4 card-number shape; candidates are Luhn-checked individually.
static CARD_SHAPE: RegexHolder = RegexHolder::new(r"\b(?:\d{4}[-\s]?){3}\d{4}\b");

/// Polymorphic "does this text match?" capability.
pub enum Matcher {
    /// Digit/format pattern.
    Pattern(&'static RegexHolder),
    /// Keyword-set alternation.
    Keywords(&'static RegexHolder),
    /// Every sub-matcher must succeed.
    All(&'static [Matcher]),
    /// Card-number shape whose concatenated digits pass the Luhn checksum.
    CardNumber,
}

impl Matcher {
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Matcher::Pattern(holder) | Matcher::Keywords(holder) => holder.is_match(text),
            Matcher::All(parts) => parts.iter().all(|m| m.matches(text)),
            Matcher::CardNumber => card_number_present(text),
        }
    }
}

fn card_number_present(text: &str) -> bool {
    let Some(re) = CARD_SHAPE.regex() else {
        return false;
    };
    re.find_iter(text).any(|m| {
        let digits: String = m.as_str().chars().filter(|c| c.is_ascii_digit()).collect();
        digits.len() == 16 && luhn_valid(&digits)
    })
}

/// Luhn checksum over a digit string.
///
/// Rightmost digit is position 1. Odd positions are summed unchanged; even
/// positions are doubled with 9 subtracted when the doubled value exceeds 9.
/// Valid iff the total is divisible by 10.
pub fn luhn_valid(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }
    let mut sum = 0u32;
    for (i, ch) in digits.chars().rev().enumerate() {
        let Some(d) = ch.to_digit(10) else {
            return false;
        };
        sum += if i % 2 == 1 {
            let doubled = d * 2;
            if doubled > 9 {
                doubled - 9
            } else {
                doubled
            }
        } else {
            d
        };
    }
    sum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luhn_accepts_known_valid_card() {
        assert!(luhn_valid("4539148803436467"));
    }

    #[test]
    fn luhn_rejects_sequential_digits() {
        assert!(!luhn_valid("1234567890123456"));
    }

    #[test]
    fn luhn_rejects_non_digits_and_empty() {
        assert!(!luhn_valid(""));
        assert!(!luhn_valid("4539-1488-0343-6467"));
    }

    #[test]
    fn card_shape_requires_luhn() {
        assert!(card_number_present("card 4539-1488-0343-6467 leaked"));
        assert!(!card_number_present("resi 1234-5678-9012-3456"));
    }
}
