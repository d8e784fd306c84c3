//! Tests for the MCP tool implementations.
//!
//! The server is built around the in-memory carrier lookup, so these run
//! without network access. Tool results are inspected through their JSON
//! form, which is what an MCP client receives.

mod mocks;

use mocks::MockCarrierLookup;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, ErrorCode};
use rmcp::ServerHandler;
use std::sync::Arc;
use twilio_lookup_bot::phone::NumberResolver;
use twilio_lookup_bot::server::{ChatParams, LookupParams};
use twilio_lookup_bot::{LookupMcpServer, LookupPlugin};

fn server_with(mock: &MockCarrierLookup) -> LookupMcpServer {
    let plugin = LookupPlugin::with_client(Arc::new(mock.clone()), NumberResolver::default());
    LookupMcpServer::new(plugin, "!")
}

fn jenny_lookup() -> MockCarrierLookup {
    let mock = MockCarrierLookup::new();
    mock.add_number("+15108675309", "US", "(510) 867-5309", "Twilio", "voip");
    mock
}

/// The text of each content item, in order.
fn texts(result: &CallToolResult) -> Vec<String> {
    let json = serde_json::to_value(result).unwrap();
    json["content"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .map(|item| item["text"].as_str().unwrap_or_default().to_string())
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn test_lookup_tool_returns_one_content_per_reply() {
    let mock = jenny_lookup();
    let server = server_with(&mock);

    let result = server
        .lookup(Parameters(LookupParams {
            number: "+15108675309".to_string(),
        }))
        .await
        .unwrap();

    assert_eq!(
        texts(&result),
        vec![
            "I found a US voip number (510) 867-5309.".to_string(),
            "My heart glows as it is a :twilio: Twilio number :twilio:.".to_string(),
        ]
    );
    assert_eq!(mock.call_count(), 1);
}

#[tokio::test]
async fn test_lookup_tool_rejection_is_single_content() {
    let mock = jenny_lookup();
    let server = server_with(&mock);

    let result = server
        .lookup(Parameters(LookupParams {
            number: "+15556667777".to_string(),
        }))
        .await
        .unwrap();

    assert_eq!(
        texts(&result),
        vec!["This number is not valid: Country Code: 1 National Number: 5556667777".to_string()]
    );
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_chat_tool_runs_commands() {
    let mock = jenny_lookup();
    let server = server_with(&mock);

    let result = server
        .chat(Parameters(ChatParams {
            message: "!lookup Hey there - can you look up (510) 8675309?".to_string(),
        }))
        .await
        .unwrap();

    let replies = texts(&result);
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0], "I found a US voip number (510) 867-5309.");
    assert_eq!(mock.requested(), vec!["+15108675309".to_string()]);
}

#[tokio::test]
async fn test_chat_tool_rejects_empty_message() {
    let server = server_with(&jenny_lookup());

    let err = server
        .chat(Parameters(ChatParams {
            message: "   ".to_string(),
        }))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert_eq!(err.message, "Chat message cannot be empty");
}

#[tokio::test]
async fn test_chat_tool_ignores_plain_chat() {
    let mock = jenny_lookup();
    let server = server_with(&mock);

    let result = server
        .chat(Parameters(ChatParams {
            message: "good morning everyone".to_string(),
        }))
        .await
        .unwrap();

    assert!(texts(&result).is_empty());
    assert_eq!(mock.call_count(), 0);
}

#[test]
fn test_server_info() {
    let server = server_with(&MockCarrierLookup::new());
    let info = server.get_info();

    assert_eq!(info.server_info.name, "twilio-lookup-bot");
    assert!(info.capabilities.tools.is_some());
    assert_eq!(server.dispatcher().prefix(), "!");
}
