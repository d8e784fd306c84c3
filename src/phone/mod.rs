//! Phone number sanitation and validation.
//!
//! This module turns raw user input into a [`ValidationOutcome`]: a parsed,
//! validated number ready for lookup, or a description of why the input was
//! rejected. Everything here is pure and safe to call concurrently.

pub mod errors;
pub mod matcher;
pub mod number;
pub mod outcome;
pub mod region;
pub mod resolver;

pub use errors::ParseFailure;
pub use matcher::{Leniency, NumberMatch, NumberMatcher};
pub use number::ParsedNumber;
pub use outcome::ValidationOutcome;
pub use region::region_from_hint;
pub use resolver::{sanitize, validate, NumberResolver};
