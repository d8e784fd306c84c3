//! Configuration management for the Twilio Lookup bot.
//!
//! Settings come either from environment variables (with an optional `.env`
//! file) or from a key/value map handed over by the chat-bot host. Both
//! sources share the same keys and validation rules.

use crate::error::{ConfigError, ConfigResult};
use phonenumber::country;
use std::collections::HashMap;
use std::env;

/// Default Twilio Lookup API endpoint.
pub const DEFAULT_LOOKUP_BASE_URL: &str = "https://lookups.twilio.com/v1";

/// Setting key for the Twilio account SID.
pub const ACCOUNT_SID_KEY: &str = "TWILIO_ACCOUNT_SID";

/// Setting key for the Twilio auth token.
pub const AUTH_TOKEN_KEY: &str = "TWILIO_AUTH_TOKEN";

/// Configuration for the Twilio Lookup bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Twilio account identifier (`AC...`)
    pub account_sid: String,

    /// Twilio auth token
    pub auth_token: String,

    /// Twilio Lookup API base URL (default: https://lookups.twilio.com/v1)
    pub lookup_base_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Region used when a number carries no country information (default: US)
    pub default_region: country::Id,

    /// Prefix that marks a chat line as a bot command (default: "!")
    pub bot_prefix: String,

    /// Log filter used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `TWILIO_ACCOUNT_SID`: Twilio account identifier
    /// - `TWILIO_AUTH_TOKEN`: Twilio auth token
    ///
    /// Optional environment variables:
    /// - `TWILIO_LOOKUP_BASE_URL`: Lookup API base URL
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `DEFAULT_REGION`: Fallback region code (default: "US")
    /// - `BOT_PREFIX`: Command prefix (default: "!")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout, which the MCP transport owns
        let _ = dotenvy::dotenv();

        Self::load(|key| env::var(key).ok())
    }

    /// Load configuration from a host-supplied settings map.
    pub fn from_settings(settings: &HashMap<String, String>) -> ConfigResult<Self> {
        Self::load(|key| settings.get(key).cloned())
    }

    /// The settings a host should ask for, with placeholder values.
    pub fn template() -> HashMap<&'static str, &'static str> {
        HashMap::from([(ACCOUNT_SID_KEY, "ACxxxxx"), (AUTH_TOKEN_KEY, "yyyyyyyy")])
    }

    fn load(get: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let account_sid = Self::required(&get, ACCOUNT_SID_KEY)?;
        let auth_token = Self::required(&get, AUTH_TOKEN_KEY)?;

        let lookup_base_url =
            get("TWILIO_LOOKUP_BASE_URL").unwrap_or_else(|| DEFAULT_LOOKUP_BASE_URL.to_string());

        if !lookup_base_url.starts_with("http://") && !lookup_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "TWILIO_LOOKUP_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_u64(&get, "REQUEST_TIMEOUT", 10)?;

        let default_region = match get("DEFAULT_REGION") {
            Some(val) => val.trim().to_ascii_uppercase().parse::<country::Id>().map_err(|_| {
                ConfigError::InvalidValue {
                    var: "DEFAULT_REGION".to_string(),
                    reason: format!("Unknown region code: {}", val),
                }
            })?,
            None => country::Id::US,
        };

        let bot_prefix = get("BOT_PREFIX").unwrap_or_else(|| "!".to_string());
        let log_level = get("LOG_LEVEL").unwrap_or_else(|| "error".to_string());

        Ok(Config {
            account_sid,
            auth_token,
            lookup_base_url,
            request_timeout,
            default_region,
            bot_prefix,
            log_level,
        })
    }

    /// Fetch a required, non-blank setting.
    fn required(get: &impl Fn(&str) -> Option<String>, key: &str) -> ConfigResult<String> {
        match get(key) {
            Some(val) if !val.trim().is_empty() => Ok(val),
            _ => Err(ConfigError::MissingVar(key.to_string())),
        }
    }

    /// Parse a setting as u64 with a default value.
    fn parse_u64(
        get: &impl Fn(&str) -> Option<String>,
        var_name: &str,
        default: u64,
    ) -> ConfigResult<u64> {
        match get(var_name) {
            Some(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            None => Ok(default),
        }
    }

    /// Whether both Twilio credentials are present.
    pub fn has_credentials(&self) -> bool {
        !self.account_sid.trim().is_empty() && !self.auth_token.trim().is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            account_sid: String::new(),
            auth_token: String::new(),
            lookup_base_url: DEFAULT_LOOKUP_BASE_URL.to_string(),
            request_timeout: 10,
            default_region: country::Id::US,
            bot_prefix: "!".to_string(),
            log_level: "error".to_string(),
        }
    }
}
