//! Extraction of phone numbers embedded in free text.
//!
//! The matcher scans left to right for number-shaped substrings and keeps the
//! ones that parse under a default region. Callers asking for a single number
//! get the *first* accepted match; later numbers in the text are ignored. No
//! attempt is made to pick a "best" number out of several.

use super::number::ParsedNumber;
use once_cell::sync::Lazy;
use phonenumber::country;
use regex::Regex;

/// A run starting with an optional `+` or `(`, then digits mixed with the
/// usual separators, ending on a digit.
static CANDIDATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+?\(?\d[\d \t./()\-]*\d").expect("Failed to compile phone candidate regex")
});

/// Shortest digit run worth handing to the parser.
const MIN_CANDIDATE_DIGITS: usize = 3;

/// How strict the matcher is about what it accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Leniency {
    /// Accept numbers whose length is plausible for their country.
    Possible,

    /// Accept only numbers in an assigned range.
    #[default]
    Valid,
}

impl Leniency {
    fn accepts(self, number: &ParsedNumber) -> bool {
        match self {
            Leniency::Possible => number.is_possible(),
            Leniency::Valid => number.is_possible() && number.is_valid(),
        }
    }
}

/// A number found inside a larger text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberMatch {
    /// Byte offset where the match starts
    pub start: usize,

    /// Byte offset just past the match
    pub end: usize,

    /// The matched text, as typed
    pub raw: String,

    /// The parsed number
    pub number: ParsedNumber,
}

/// Finds phone numbers in free text, assuming a default region.
#[derive(Debug, Clone, Copy)]
pub struct NumberMatcher {
    region: country::Id,
    leniency: Leniency,
}

impl NumberMatcher {
    /// Create a matcher for the given default region with `Leniency::Valid`.
    pub fn new(region: country::Id) -> Self {
        Self {
            region,
            leniency: Leniency::default(),
        }
    }

    /// Use a different leniency.
    pub fn with_leniency(mut self, leniency: Leniency) -> Self {
        self.leniency = leniency;
        self
    }

    /// All accepted matches, in order of appearance.
    pub fn find_all<'a>(&'a self, text: &'a str) -> impl Iterator<Item = NumberMatch> + 'a {
        CANDIDATE_REGEX
            .find_iter(text)
            .filter(move |m| is_isolated(text, m.start(), m.end()))
            .filter_map(move |m| self.accept(m.start(), m.as_str()))
    }

    /// The first accepted match, if any.
    pub fn find_first(&self, text: &str) -> Option<NumberMatch> {
        self.find_all(text).next()
    }

    fn accept(&self, offset: usize, candidate: &str) -> Option<NumberMatch> {
        narrowings(candidate).into_iter().find_map(|narrowed| {
            let number = ParsedNumber::parse(Some(self.region), narrowed).ok()?;
            if !self.leniency.accepts(&number) {
                return None;
            }

            Some(NumberMatch {
                start: offset,
                end: offset + narrowed.len(),
                raw: narrowed.to_string(),
                number,
            })
        })
    }
}

/// Reject candidates glued to letters or digits, e.g. `abc5108675309`.
fn is_isolated(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();

    !before.map_or(false, char::is_alphanumeric) && !after.map_or(false, char::is_alphanumeric)
}

/// The candidate itself, then shorter prefixes cut at whitespace.
///
/// A greedy candidate can swallow two numbers separated by a space
/// (`510 867 5309 415 555 1212`); cutting from the right recovers the first.
fn narrowings(candidate: &str) -> Vec<&str> {
    let mut ends: Vec<usize> = candidate
        .char_indices()
        .filter(|(_, c)| c.is_whitespace())
        .map(|(i, _)| i)
        .collect();
    ends.push(candidate.len());

    let mut prefixes: Vec<&str> = ends
        .into_iter()
        .rev()
        .map(|end| candidate[..end].trim_end_matches(|c: char| !c.is_ascii_digit()))
        .filter(|s| s.chars().filter(char::is_ascii_digit).count() >= MIN_CANDIDATE_DIGITS)
        .collect();
    prefixes.dedup();
    prefixes
}
