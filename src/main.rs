//! Twilio Lookup bot - main entry point.
//!
//! Serves the bot's chat commands as MCP tools over stdio.

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use twilio_lookup_bot::{Config, LookupMcpServer, LookupPlugin};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Log to stderr only; stdout carries the MCP protocol
    let default_level = config.as_ref().map_or("error", |cfg| cfg.log_level.as_str());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("TwilioLookup not configured - plugin not activating: {}", e);
            return Err(e.into());
        }
    };

    let plugin = match LookupPlugin::activate(&config) {
        Ok(plugin) => plugin,
        Err(e) => {
            error!("Failed to activate TwilioLookup: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Lookup API: {} (default region {:?}, prefix {:?})",
        config.lookup_base_url, config.default_region, config.bot_prefix
    );

    let server = LookupMcpServer::new(plugin, config.bot_prefix.clone());

    info!("Starting MCP server with stdio transport");
    twilio_lookup_bot::server::run_server(server).await?;

    info!("TwilioLookup shutdown complete");
    Ok(())
}
