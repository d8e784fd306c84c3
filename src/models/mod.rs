//! Data models for Twilio Lookup responses.

pub mod carrier;

pub use carrier::{Carrier, CarrierInfo};
