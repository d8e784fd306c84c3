//! ParsedNumber value object.

use phonenumber::metadata::{Descriptors, DATABASE};
use phonenumber::PhoneNumber;
use std::fmt;

/// A structurally parsed phone number.
///
/// Wraps the parser's `PhoneNumber` and exposes the parts the bot reports on:
/// the country calling code, the national significant number and the
/// international (E.164) rendering. A `ParsedNumber` says nothing about
/// validity on its own; see [`ParsedNumber::is_possible`] and
/// [`ParsedNumber::is_valid`].
///
/// # Example
///
/// ```
/// use twilio_lookup_bot::phone::ParsedNumber;
///
/// let number = ParsedNumber::parse(None, "+15108675309").unwrap();
/// assert_eq!(number.country_code(), 1);
/// assert_eq!(number.national_number(), 5108675309);
/// assert_eq!(number.e164(), "+15108675309");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedNumber(PhoneNumber);

impl ParsedNumber {
    /// Parse `text` with an optional region supplying the country context.
    pub fn parse(
        region: Option<phonenumber::country::Id>,
        text: &str,
    ) -> Result<Self, phonenumber::ParseError> {
        phonenumber::parse(region, text).map(Self)
    }

    /// Country calling code, e.g. 1 for NANPA or 44 for the UK.
    pub fn country_code(&self) -> u16 {
        self.0.code().value()
    }

    /// National significant number without leading zeros.
    pub fn national_number(&self) -> u64 {
        self.0.national().value()
    }

    /// Number of leading zeros that belong to the national number.
    pub fn leading_zeros(&self) -> u8 {
        self.0.national().zeros()
    }

    /// Extension, if the input carried one.
    pub fn extension(&self) -> Option<&str> {
        self.0.extension().map(|ext| &**ext)
    }

    /// National significant number as dialled, leading zeros included.
    pub fn national_digits(&self) -> String {
        self.0.national().to_string()
    }

    /// International format: `+`, country code, national number, no separators.
    pub fn e164(&self) -> String {
        format!("+{}{}", self.country_code(), self.national_digits())
    }

    /// Whether the length of the number is plausible for its country.
    ///
    /// Lengths that are only diallable locally count as possible.
    pub fn is_possible(&self) -> bool {
        let metas = match DATABASE.by_code(&self.country_code()) {
            Some(metas) => metas,
            None => return false,
        };

        let meta = match metas
            .iter()
            .find(|m| m.is_main_country_for_code())
            .or_else(|| metas.first())
        {
            Some(meta) => meta,
            None => return false,
        };

        let length = self.national_digits().len() as u16;
        possible_lengths(meta.descriptors()).contains(&length)
    }

    /// Whether the number falls in a range assigned to subscribers.
    pub fn is_valid(&self) -> bool {
        self.0.is_valid()
    }

    /// The underlying parser representation.
    pub fn as_phone_number(&self) -> &PhoneNumber {
        &self.0
    }
}

impl From<PhoneNumber> for ParsedNumber {
    fn from(number: PhoneNumber) -> Self {
        Self(number)
    }
}

/// Possible and local-only lengths over every number type of a region.
///
/// The general descriptor carries no lengths of its own in this metadata.
fn possible_lengths(descriptors: &Descriptors) -> Vec<u16> {
    let types = [
        descriptors.fixed_line(),
        descriptors.mobile(),
        descriptors.toll_free(),
        descriptors.premium_rate(),
        descriptors.shared_cost(),
        descriptors.personal_number(),
        descriptors.voip(),
        descriptors.pager(),
        descriptors.uan(),
        descriptors.voicemail(),
    ];

    let mut lengths: Vec<u16> = std::iter::once(descriptors.general())
        .chain(types.into_iter().flatten())
        .flat_map(|d| d.possible_length().iter().chain(d.possible_local_length()))
        .copied()
        .collect();
    lengths.sort_unstable();
    lengths.dedup();
    lengths
}

/// Field-by-field description used in user-facing failure messages.
impl fmt::Display for ParsedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Country Code: {} National Number: {}",
            self.country_code(),
            self.national_number()
        )?;

        match self.leading_zeros() {
            0 => {}
            1 => write!(f, " Leading Zero(s): True")?,
            n => write!(f, " Leading Zero(s): True Number of leading zeros: {}", n)?,
        }

        if let Some(ext) = self.extension() {
            write!(f, " Extension: {}", ext)?;
        }

        Ok(())
    }
}
