//! Turning whatever the user typed into a validated phone number.
//!
//! Three strategies are tried, in order:
//!
//! 1. Input without any digit is rejected outright.
//! 2. Input containing letters is either `<region> <local number>` (a
//!    two-character first token naming a known region) or free text, in which
//!    case the first number found by [`NumberMatcher`] is used. A hinted
//!    number that does not validate gives way to the free-text scan.
//! 3. Anything else is parsed directly: as international when it starts
//!    with `+`, otherwise trying international first and the default region
//!    second.
//!
//! Every parse error ends up as [`ValidationOutcome::Unparseable`]; nothing
//! here returns an error or panics on user input.

use super::errors::ParseFailure;
use super::matcher::{Leniency, NumberMatcher};
use super::number::ParsedNumber;
use super::outcome::ValidationOutcome;
use super::region::region_from_hint;
use phonenumber::country;
use tracing::debug;

/// Stateless resolver from raw text to a [`ValidationOutcome`].
#[derive(Debug, Clone, Copy)]
pub struct NumberResolver {
    default_region: country::Id,
    leniency: Leniency,
}

impl Default for NumberResolver {
    fn default() -> Self {
        Self::new(country::Id::US)
    }
}

impl NumberResolver {
    /// Create a resolver falling back to `default_region`.
    pub fn new(default_region: country::Id) -> Self {
        Self {
            default_region,
            leniency: Leniency::default(),
        }
    }

    /// Use a different leniency for free-text extraction.
    pub fn with_leniency(mut self, leniency: Leniency) -> Self {
        self.leniency = leniency;
        self
    }

    /// The region assumed when the input carries no country information.
    pub fn default_region(&self) -> country::Id {
        self.default_region
    }

    /// Resolve and validate `raw`.
    pub fn sanitize(&self, raw: &str) -> ValidationOutcome {
        match self.parse(raw) {
            Ok(number) => validate(number),
            Err(reason) => {
                debug!(input = raw, %reason, "could not parse phone number");
                ValidationOutcome::Unparseable {
                    input: raw.to_string(),
                    reason,
                }
            }
        }
    }

    /// Structural parsing only, no validity checks.
    pub fn parse(&self, raw: &str) -> Result<ParsedNumber, ParseFailure> {
        if !raw.chars().any(|c| c.is_ascii_digit()) {
            return Err(ParseFailure::NoDigits);
        }

        if raw.chars().any(char::is_alphabetic) {
            self.parse_with_text(raw)
        } else {
            self.parse_bare(raw)
        }
    }

    fn parse_with_text(&self, raw: &str) -> Result<ParsedNumber, ParseFailure> {
        let tokens: Vec<&str> = raw.split_whitespace().collect();

        if tokens.len() > 1 && tokens[0].chars().count() == 2 {
            if let Some(region) = region_from_hint(tokens[0]) {
                debug!(?region, "parsing with country hint");
                let hinted = ParsedNumber::parse(Some(region), &tokens[1..].concat());
                if matches!(&hinted, Ok(n) if n.is_possible() && n.is_valid()) {
                    return Ok(hinted?);
                }

                // "my", "it", "is" are region codes too; a sentence may still
                // hold a number for the default region
                if let Some(number) = self.scan(raw) {
                    return Ok(number);
                }
                return Ok(hinted?);
            }
        }

        self.scan(raw).ok_or(ParseFailure::NoMatch)
    }

    fn scan(&self, raw: &str) -> Option<ParsedNumber> {
        debug!(region = ?self.default_region, "scanning free text for a number");
        NumberMatcher::new(self.default_region)
            .with_leniency(self.leniency)
            .find_first(raw)
            .map(|found| found.number)
    }

    fn parse_bare(&self, raw: &str) -> Result<ParsedNumber, ParseFailure> {
        if raw.trim_start().starts_with('+') {
            return Ok(ParsedNumber::parse(None, raw)?);
        }

        ParsedNumber::parse(None, raw)
            .or_else(|_| ParsedNumber::parse(Some(self.default_region), raw))
            .map_err(ParseFailure::from)
    }
}

/// Classify a parsed number as possible/valid.
pub fn validate(number: ParsedNumber) -> ValidationOutcome {
    if !number.is_possible() {
        ValidationOutcome::Impossible(number)
    } else if !number.is_valid() {
        ValidationOutcome::Invalid(number)
    } else {
        ValidationOutcome::Valid(number)
    }
}

/// Resolve `raw` with the default settings (region US).
pub fn sanitize(raw: &str) -> ValidationOutcome {
    NumberResolver::default().sanitize(raw)
}
