//! Result of resolving a raw input into a phone number.

use super::errors::ParseFailure;
use super::number::ParsedNumber;

/// What the resolver made of an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Parsed, plausible and assignable.
    Valid(ParsedNumber),

    /// Parsed, but the length is implausible for its country.
    Impossible(ParsedNumber),

    /// Plausible length, but not in an assigned range.
    Invalid(ParsedNumber),

    /// Nothing could be parsed out of the input.
    Unparseable { input: String, reason: ParseFailure },
}

impl ValidationOutcome {
    /// The parsed number, for every outcome that got past parsing.
    pub fn number(&self) -> Option<&ParsedNumber> {
        match self {
            Self::Valid(n) | Self::Impossible(n) | Self::Invalid(n) => Some(n),
            Self::Unparseable { .. } => None,
        }
    }

    /// User-facing explanation for outcomes that stop before a lookup.
    ///
    /// Returns `None` for `Valid`.
    pub fn failure_message(&self) -> Option<String> {
        match self {
            Self::Valid(_) => None,
            Self::Impossible(n) => Some(format!("This number is not possible: {}", n)),
            Self::Invalid(n) => Some(format!("This number is not valid: {}", n)),
            Self::Unparseable { input, reason } => Some(match reason {
                ParseFailure::NoDigits | ParseFailure::NoMatch => {
                    format!("Could not find a number here: {}", input)
                }
                ParseFailure::Parse(_) => {
                    format!("Could not parse a number here: {} ({})", input, reason)
                }
            }),
        }
    }
}
