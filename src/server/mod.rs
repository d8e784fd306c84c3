//! MCP server for the lookup bot.
//!
//! Exposes the chat commands to MCP hosts over stdio.

pub mod handlers;

pub use handlers::{ChatParams, LookupMcpServer, LookupParams};

use anyhow::Result;
use rmcp::transport::io::stdio;
use rmcp::ServiceExt;

/// Run the server over stdin/stdout until the client disconnects.
pub async fn run_server(server: LookupMcpServer) -> Result<()> {
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
