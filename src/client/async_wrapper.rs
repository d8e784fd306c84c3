//! Async wrapper around synchronous LookupClient.
//!
//! This module provides an async interface to the synchronous LookupClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::LookupClient;
use crate::error::{LookupApiError, LookupApiResult};
use crate::models::CarrierInfo;
use async_trait::async_trait;
use std::sync::Arc;

/// Async seam for carrier lookups.
///
/// The lookup plugin only depends on this trait, so tests can substitute an
/// in-memory implementation for the HTTP client.
#[async_trait]
pub trait AsyncCarrierLookup: Send + Sync {
    async fn get_phone_number(
        &self,
        e164: &str,
        include_carrier_info: bool,
    ) -> LookupApiResult<CarrierInfo>;
}

/// Async wrapper around synchronous LookupClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool, preventing blocking
/// the async runtime.
#[derive(Clone)]
pub struct AsyncLookupClient {
    client: Arc<LookupClient>,
}

impl AsyncLookupClient {
    pub fn new(client: LookupClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// The wrapped synchronous client.
    pub fn inner(&self) -> &LookupClient {
        &self.client
    }
}

#[async_trait]
impl AsyncCarrierLookup for AsyncLookupClient {
    async fn get_phone_number(
        &self,
        e164: &str,
        include_carrier_info: bool,
    ) -> LookupApiResult<CarrierInfo> {
        let client = self.client.clone();
        let e164 = e164.to_string();

        tokio::task::spawn_blocking(move || client.get_phone_number(&e164, include_carrier_info))
            .await
            .map_err(|e| LookupApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
