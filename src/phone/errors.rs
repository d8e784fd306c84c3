//! Reasons a raw input could not be turned into a phone number.

use std::fmt;

/// Why structural parsing of an input failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    /// The input holds no digit characters at all.
    NoDigits,

    /// Free text was scanned but nothing number-shaped was accepted.
    NoMatch,

    /// The phone number parser rejected the input.
    Parse(String),
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDigits => write!(f, "no digits found"),
            Self::NoMatch => write!(f, "no phone number found in text"),
            Self::Parse(reason) => write!(f, "{}", reason),
        }
    }
}

impl std::error::Error for ParseFailure {}

impl From<phonenumber::ParseError> for ParseFailure {
    fn from(err: phonenumber::ParseError) -> Self {
        Self::Parse(err.to_string())
    }
}
