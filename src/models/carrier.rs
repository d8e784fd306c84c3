//! Carrier information returned by Twilio Lookup.

use serde::{Deserialize, Serialize};

/// Carrier details for a phone number (requested with `Type=carrier`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Carrier {
    /// Carrier name, e.g. "Verizon Wireless"
    pub name: Option<String>,

    /// Line type: "mobile", "landline" or "voip"
    #[serde(rename = "type")]
    pub carrier_type: Option<String>,

    /// Mobile country code (MCC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_country_code: Option<String>,

    /// Mobile network code (MNC)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_network_code: Option<String>,

    /// Twilio error code when carrier information could not be determined
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<u32>,
}

/// A phone number resource from the Lookup API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct CarrierInfo {
    /// ISO country code of the number, e.g. "US"
    pub country_code: String,

    /// The number in E.164 format
    pub phone_number: String,

    /// The number in its country's local format, e.g. "(510) 867-5309"
    pub national_format: String,

    /// Carrier details, present when carrier info was requested
    pub carrier: Option<Carrier>,

    /// Caller name details, present when caller-name info was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caller_name: Option<serde_json::Value>,

    /// Resource URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl CarrierInfo {
    /// Line type, or "unknown" when Twilio did not report one.
    pub fn carrier_type(&self) -> &str {
        self.carrier
            .as_ref()
            .and_then(|c| c.carrier_type.as_deref())
            .unwrap_or("unknown")
    }

    /// Carrier name, or "an unknown carrier" when Twilio did not report one.
    pub fn carrier_name(&self) -> &str {
        self.carrier
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .unwrap_or("an unknown carrier")
    }
}
