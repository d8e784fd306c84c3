//! HTTP client for the Twilio Lookup API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication and maps
//! Twilio error documents onto [`LookupApiError`].

mod async_wrapper;
pub use async_wrapper::{AsyncCarrierLookup, AsyncLookupClient};

use crate::config::Config;
use crate::error::{LookupApiError, LookupApiResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::CarrierInfo;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Error document Twilio returns with non-2xx responses.
#[derive(Debug, Deserialize)]
struct TwilioErrorBody {
    #[serde(default)]
    code: Option<u32>,

    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the Twilio Lookup API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct LookupClient {
    /// Base URL for the Lookup API
    base_url: String,

    /// Account SID, kept for diagnostics
    account_sid: String,

    /// Precomputed `Authorization` header value
    authorization: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl LookupClient {
    /// Create a new LookupClient from configuration.
    pub fn new(config: &Config) -> Self {
        Self::build(
            config.lookup_base_url.clone(),
            &config.account_sid,
            &config.auth_token,
            Duration::from_secs(config.request_timeout),
        )
    }

    /// Create a LookupClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, account_sid: &str, auth_token: &str) -> Self {
        Self::build(base_url, account_sid, auth_token, Duration::from_secs(10))
    }

    fn build(base_url: String, account_sid: &str, auth_token: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();

        Self {
            base_url,
            account_sid: account_sid.to_string(),
            authorization: basic_auth(account_sid, auth_token),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// The account this client authenticates as.
    pub fn account_sid(&self) -> &str {
        &self.account_sid
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute an authenticated GET request.
    fn get(&self, path: &str, query: &[(&str, &str)]) -> LookupApiResult<ureq::Response> {
        let timer = HttpTimer::start(&self.metrics);
        let url = self.build_url(path);

        tracing::debug!("GET {}", url);

        let mut request = self
            .agent
            .get(&url)
            .set("Authorization", &self.authorization)
            .set("Accept", "application/json");
        for (param, value) in query {
            request = request.query(param, value);
        }

        match request.call() {
            Ok(response) => {
                tracing::debug!("GET {} - Success (status: {})", url, response.status());
                timer.complete();
                Ok(response)
            }
            Err(e) => {
                let err = self.map_error(e, &url);
                tracing::warn!("GET {} - Error: {}", url, err);
                timer.complete_with_error();
                Err(err)
            }
        }
    }

    /// Map a ureq error to a LookupApiError.
    fn map_error(&self, error: ureq::Error, uri: &str) -> LookupApiError {
        match error {
            ureq::Error::Status(status, response) => {
                let body = response.into_string().unwrap_or_default();
                let parsed: Option<TwilioErrorBody> = serde_json::from_str(&body).ok();

                match status {
                    401 => LookupApiError::Unauthorized,
                    429 => LookupApiError::RateLimitExceeded,
                    _ => {
                        let (code, message) = match parsed {
                            Some(doc) => (doc.code, doc.message),
                            None => (None, None),
                        };
                        let message = message
                            .or_else(|| Some(body).filter(|b| !b.trim().is_empty()))
                            .unwrap_or_else(|| "Unknown error".to_string());

                        LookupApiError::Service {
                            status,
                            code,
                            message,
                            uri: uri.to_string(),
                        }
                    }
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    LookupApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    LookupApiError::Timeout
                } else {
                    LookupApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Fetch the Lookup record for an E.164 number.
    ///
    /// # Arguments
    /// * `e164` - The number in E.164 format, e.g. `+15108675309`
    /// * `include_carrier_info` - Request carrier details (`Type=carrier`)
    pub fn get_phone_number(
        &self,
        e164: &str,
        include_carrier_info: bool,
    ) -> LookupApiResult<CarrierInfo> {
        let path = format!("/PhoneNumbers/{}", urlencoding::encode(e164));
        let query: &[(&str, &str)] = if include_carrier_info {
            &[("Type", "carrier")]
        } else {
            &[]
        };

        let response = self.get(&path, query)?;
        let body = response
            .into_string()
            .map_err(|e| LookupApiError::HttpError(e.to_string()))?;

        let info: CarrierInfo = serde_json::from_str(&body)?;
        if info.carrier.is_some() {
            self.metrics.record_carrier_found();
        }
        Ok(info)
    }
}

/// `Authorization` header value for HTTP Basic auth.
fn basic_auth(user: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", user, password)))
}
