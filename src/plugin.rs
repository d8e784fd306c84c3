//! The `lookup` chat command.
//!
//! [`LookupPlugin`] owns the whole request path: resolve the argument to a
//! number, look it up once when it is valid, and render the replies. Every
//! failure ends up as a chat message; nothing is returned as an error.

use crate::client::{AsyncCarrierLookup, AsyncLookupClient, LookupClient};
use crate::config::{Config, ACCOUNT_SID_KEY, AUTH_TOKEN_KEY};
use crate::error::{ActivationError, ConfigError};
use crate::phone::{NumberResolver, ValidationOutcome};
use crate::render::{render_lookup, render_rejection, LookupResult};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Usage text for `!help lookup`.
pub const HELP: &str = "Look up carrier information for a phone number.\n\
Usage:\n  \
!lookup +15108675309\n  \
!lookup UK 020 8366 1177\n  \
!lookup can you look up (510) 867-5309 for me?\n\
Numbers without a country code are read in the default region (US unless \
configured otherwise) unless a two-letter country code comes first.";

/// The activated lookup command.
#[derive(Clone)]
pub struct LookupPlugin {
    client: Arc<dyn AsyncCarrierLookup>,
    resolver: NumberResolver,
}

impl LookupPlugin {
    /// Activate against a loaded configuration.
    ///
    /// Refuses to start when either Twilio credential is blank.
    pub fn activate(config: &Config) -> Result<Self, ActivationError> {
        if !config.has_credentials() {
            warn!(
                "Could not find {} or {} in plugin configuration - plugin not activating",
                ACCOUNT_SID_KEY, AUTH_TOKEN_KEY
            );
            return Err(ActivationError::MissingCredentials);
        }

        info!("Starting TwilioLookup.");
        let client = AsyncLookupClient::new(LookupClient::new(config));
        Ok(Self::with_client(
            Arc::new(client),
            NumberResolver::new(config.default_region),
        ))
    }

    /// Activate from the host's plugin settings, if it has any.
    pub fn activate_from_settings(
        settings: Option<&HashMap<String, String>>,
    ) -> Result<Self, ActivationError> {
        let Some(settings) = settings else {
            warn!("TwilioLookup not configured - plugin not activating");
            return Err(ActivationError::NotConfigured);
        };

        match Config::from_settings(settings) {
            Ok(config) => Self::activate(&config),
            Err(ConfigError::MissingVar(var)) if var == ACCOUNT_SID_KEY || var == AUTH_TOKEN_KEY => {
                warn!(
                    "Could not find {} or {} in plugin configuration - plugin not activating",
                    ACCOUNT_SID_KEY, AUTH_TOKEN_KEY
                );
                Err(ActivationError::MissingCredentials)
            }
            Err(e) => {
                warn!("Invalid TwilioLookup configuration: {}", e);
                Err(e.into())
            }
        }
    }

    /// Build a plugin around an existing lookup client.
    pub fn with_client(client: Arc<dyn AsyncCarrierLookup>, resolver: NumberResolver) -> Self {
        Self { client, resolver }
    }

    pub fn resolver(&self) -> &NumberResolver {
        &self.resolver
    }

    /// Handle `!lookup <args>`.
    ///
    /// Returns one message for rejected input or a failed lookup, and two
    /// for a successful lookup.
    pub async fn lookup(&self, args: &str) -> Vec<String> {
        match self.resolver.sanitize(args) {
            ValidationOutcome::Valid(number) => {
                let e164 = number.e164();
                let result = self.lookup_e164_number(&e164).await;
                render_lookup(&e164, &result)
            }
            rejected => {
                debug!(
                    number = ?rejected.number().map(|n| n.e164()),
                    "Rejected lookup input {:?}",
                    args
                );
                render_rejection(&rejected).unwrap_or_default()
            }
        }
    }

    /// Perform the single carrier lookup for a validated number.
    pub async fn lookup_e164_number(&self, e164: &str) -> LookupResult {
        let result = self.client.get_phone_number(e164, true).await;
        if let Err(e) = &result {
            warn!("Lookup of {} failed: {}", e164, e);
        }
        result.into()
    }
}
