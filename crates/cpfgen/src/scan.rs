//! Detection of formatted identifiers in free text.
//!
//! The scanner looks for the `DDD.DDD.DDD-DD` shape delimited by ASCII word
//! boundaries and reports whether each hit also passes the checksum. It is
//! meant for spotting leaked identifiers in HTTP response bodies.

use crate::Cpf;
use core::iter::Fuse;
use regex::{Matches, Regex};
use std::sync::LazyLock;

// ASCII-only digits and word boundaries; `\d` and `\b` would also accept
// digits and letters from other scripts.
static CPF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)[0-9]{3}\.[0-9]{3}\.[0-9]{3}-[0-9]{2}(?-u:\b)")
        .expect("CPF pattern is a valid regex")
});

/// A formatted identifier found by [`scan`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CpfMatch<'a> {
    /// Byte offset of the first digit.
    pub start: usize,
    /// Byte offset one past the last digit.
    pub end: usize,
    /// The matched text.
    pub text: &'a str,
    /// Whether the check digits are consistent with the first nine digits.
    pub valid: bool,
}

impl CpfMatch<'_> {
    /// Parses the match, returning `None` when the checksum does not hold.
    #[must_use]
    pub fn cpf(&self) -> Option<Cpf> {
        Cpf::parse(self.text).ok()
    }
}

/// Iterator over the non-overlapping matches in a text, left to right.
#[derive(Debug)]
pub struct Scanner<'a> {
    matches: Fuse<Matches<'static, 'a>>,
}

/// Scans `text` for formatted identifiers.
///
/// ```
/// use cpfgen::scan;
///
/// let body = "<td>123.456.789-09</td><td>123.456.789-00</td>";
/// let hits: Vec<_> = scan(body).map(|m| (m.text, m.valid)).collect();
/// assert_eq!(hits, [("123.456.789-09", true), ("123.456.789-00", false)]);
/// ```
#[must_use]
pub fn scan(text: &str) -> Scanner<'_> {
    Scanner {
        matches: CPF_PATTERN.find_iter(text).fuse(),
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = CpfMatch<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.matches.next().map(|m| {
            let text = m.as_str();
            CpfMatch {
                start: m.start(),
                end: m.end(),
                text,
                valid: Cpf::parse(text).is_ok(),
            }
        })
    }
}
