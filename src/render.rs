//! Chat replies for lookup results.
//!
//! Rendering is pure: it turns an outcome (and, for valid numbers, the lookup
//! result) into the ordered list of messages the bot should send.

use crate::error::LookupApiError;
use crate::models::CarrierInfo;
use crate::phone::ValidationOutcome;

/// Carrier name that earns the celebratory reply.
pub const TWILIO_CARRIER_NAME: &str = "Twilio";

/// What the carrier lookup produced for a valid number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Found(CarrierInfo),
    LookupFailed(String),
}

impl From<Result<CarrierInfo, LookupApiError>> for LookupResult {
    fn from(result: Result<CarrierInfo, LookupApiError>) -> Self {
        match result {
            Ok(info) => LookupResult::Found(info),
            Err(e) => LookupResult::LookupFailed(e.to_string()),
        }
    }
}

/// The single message for an outcome that ends before any lookup.
///
/// Returns `None` for valid numbers, which go on to be looked up.
pub fn render_rejection(outcome: &ValidationOutcome) -> Option<Vec<String>> {
    outcome.failure_message().map(|message| vec![message])
}

/// Messages for the lookup of `e164`.
pub fn render_lookup(e164: &str, result: &LookupResult) -> Vec<String> {
    match result {
        LookupResult::LookupFailed(reason) => vec![format!(
            "Could not find information on phone number {}: {}",
            e164, reason
        )],
        LookupResult::Found(info) => vec![
            format!(
                "I found a {} {} number {}.",
                info.country_code,
                info.carrier_type(),
                info.national_format
            ),
            carrier_remark(info.carrier_name()),
        ],
    }
}

fn carrier_remark(name: &str) -> String {
    if name == TWILIO_CARRIER_NAME {
        "My heart glows as it is a :twilio: Twilio number :twilio:.".to_string()
    } else {
        format!("It tragically belongs to {}.", name)
    }
}
