use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use twilio_lookup_bot::client::AsyncCarrierLookup;
use twilio_lookup_bot::error::{LookupApiError, LookupApiResult};
use twilio_lookup_bot::models::{Carrier, CarrierInfo};

/// Mock carrier lookup for testing.
///
/// Serves canned lookup records from memory and records every number it was
/// asked about, so tests can check how many lookups happened and for what.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockCarrierLookup {
    records: Arc<Mutex<HashMap<String, CarrierInfo>>>,
    requested: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockCarrierLookup {
    /// Create a new empty MockCarrierLookup.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a record for `e164`.
    pub fn add_record(&self, info: CarrierInfo) {
        let mut records = self.records.lock().unwrap();
        records.insert(info.phone_number.clone(), info);
    }

    /// Register a record built from the common fields.
    pub fn add_number(
        &self,
        e164: &str,
        country_code: &str,
        national_format: &str,
        carrier_name: &str,
        carrier_type: &str,
    ) {
        self.add_record(sample_info(
            e164,
            country_code,
            national_format,
            carrier_name,
            carrier_type,
        ));
    }

    /// Numbers looked up so far, in order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    /// Get the number of lookups performed.
    pub fn call_count(&self) -> usize {
        self.requested.lock().unwrap().len()
    }
}

/// A lookup record with a carrier.
#[allow(dead_code)]
pub fn sample_info(
    e164: &str,
    country_code: &str,
    national_format: &str,
    carrier_name: &str,
    carrier_type: &str,
) -> CarrierInfo {
    CarrierInfo {
        country_code: country_code.to_string(),
        phone_number: e164.to_string(),
        national_format: national_format.to_string(),
        carrier: Some(Carrier {
            name: Some(carrier_name.to_string()),
            carrier_type: Some(carrier_type.to_string()),
            ..Carrier::default()
        }),
        ..CarrierInfo::default()
    }
}

#[async_trait]
impl AsyncCarrierLookup for MockCarrierLookup {
    async fn get_phone_number(
        &self,
        e164: &str,
        _include_carrier_info: bool,
    ) -> LookupApiResult<CarrierInfo> {
        self.requested.lock().unwrap().push(e164.to_string());

        let records = self.records.lock().unwrap();
        records
            .get(e164)
            .cloned()
            .ok_or_else(|| LookupApiError::Service {
                status: 404,
                code: Some(20404),
                message: format!("The requested resource /PhoneNumbers/{} was not found", e164),
                uri: format!("/PhoneNumbers/{}", e164),
            })
    }
}
