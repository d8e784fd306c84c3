//! Twilio Lookup bot - finds phone numbers in chat messages and reports their carrier.
//!
//! # Architecture
//!
//! - **phone**: Parsing, free-text extraction and validation of phone numbers
//! - **client**: HTTP client for the Twilio Lookup API
//! - **render**: Chat replies for validation and lookup outcomes
//! - **plugin**: The `lookup` command and its activation
//! - **bot**: Chat command dispatcher
//! - **server**: MCP protocol server
//! - **config**, **error**, **metrics**: Supporting infrastructure

pub mod bot;
pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod phone;
pub mod plugin;
pub mod render;
pub mod server;

pub use bot::{Command, CommandDispatcher};
pub use client::{AsyncCarrierLookup, AsyncLookupClient, LookupClient};
pub use config::Config;
pub use error::{ActivationError, ConfigError, LookupApiError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{Carrier, CarrierInfo};
pub use phone::{sanitize, NumberResolver, ParsedNumber, ValidationOutcome};
pub use plugin::LookupPlugin;
pub use render::LookupResult;
pub use server::LookupMcpServer;
