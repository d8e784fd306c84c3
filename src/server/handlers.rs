//! MCP tool handlers for the lookup bot.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.
//! Each reply message becomes one text content item, in order.

use crate::bot::CommandDispatcher;
use crate::plugin::LookupPlugin;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;

/// MCP server exposing the `lookup` command and the chat dispatcher.
#[derive(Clone)]
pub struct LookupMcpServer {
    dispatcher: CommandDispatcher,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for LookupMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "twilio-lookup-bot".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Chat bot that finds phone numbers in text and looks up their carrier with Twilio Lookup.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct LookupParams {
    /// Free text containing a phone number, optionally led by a two-letter country code
    pub number: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ChatParams {
    /// A raw chat line, e.g. "!lookup +15108675309"
    pub message: String,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INVALID_PARAMS,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn replies(messages: Vec<String>) -> CallToolResult {
    CallToolResult::success(messages.into_iter().map(Content::text).collect())
}

#[tool_router]
impl LookupMcpServer {
    /// Create a server around an activated plugin.
    pub fn new(plugin: LookupPlugin, prefix: impl Into<String>) -> Self {
        Self {
            dispatcher: CommandDispatcher::new(prefix, plugin),
            tool_router: Self::tool_router(),
        }
    }

    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    /// Look up the carrier of a phone number.
    #[tool(
        description = "Find a phone number in free text (E.164, local format with a leading two-letter country code, or a sentence) and look up its carrier with Twilio Lookup. Returns one message when the number is rejected or the lookup fails, two on success."
    )]
    pub async fn lookup(
        &self,
        params: Parameters<LookupParams>,
    ) -> Result<CallToolResult, McpError> {
        let messages = self.dispatcher.plugin().lookup(&params.0.number).await;
        Ok(replies(messages))
    }

    /// Feed one chat line through the command dispatcher.
    #[tool(
        description = "Send a chat line to the bot. Lines starting with the command prefix run commands such as lookup and help; other lines get no reply."
    )]
    pub async fn chat(&self, params: Parameters<ChatParams>) -> Result<CallToolResult, McpError> {
        let message = params.0.message;
        if message.trim().is_empty() {
            return Err(to_mcp_error("Chat message cannot be empty"));
        }

        Ok(replies(self.dispatcher.handle(&message).await))
    }
}
