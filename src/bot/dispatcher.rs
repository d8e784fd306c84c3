//! Routes prefixed chat lines to commands.

use crate::plugin::{LookupPlugin, HELP};
use tracing::debug;

/// Commands the bot understands, as `(name, summary)`.
pub const COMMANDS: &[(&str, &str)] = &[
    ("lookup", "look up carrier information for a phone number"),
    ("help", "list commands, or show usage for one"),
];

/// A parsed chat command. Arguments borrow from the chat line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Lookup(&'a str),
    Help(Option<&'a str>),
    Unknown(&'a str),
}

/// Parse a chat line. Returns `None` when the line is not a command.
pub fn parse_command<'a>(prefix: &str, line: &'a str) -> Option<Command<'a>> {
    let body = line.trim_start().strip_prefix(prefix)?;
    let (name, args) = match body.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args.trim()),
        None => (body, ""),
    };

    if name.is_empty() {
        return None;
    }

    let command = match name.to_ascii_lowercase().as_str() {
        "lookup" => Command::Lookup(args),
        "help" => Command::Help(Some(args).filter(|topic| !topic.is_empty())),
        _ => Command::Unknown(name),
    };
    Some(command)
}

/// Dispatches chat lines to the lookup plugin and the built-in help.
#[derive(Clone)]
pub struct CommandDispatcher {
    prefix: String,
    plugin: LookupPlugin,
}

impl CommandDispatcher {
    pub fn new(prefix: impl Into<String>, plugin: LookupPlugin) -> Self {
        Self {
            prefix: prefix.into(),
            plugin,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn plugin(&self) -> &LookupPlugin {
        &self.plugin
    }

    /// Handle one chat line and return the replies, in order.
    ///
    /// Lines without the command prefix get no reply.
    pub async fn handle(&self, line: &str) -> Vec<String> {
        let Some(command) = parse_command(&self.prefix, line) else {
            return Vec::new();
        };
        debug!("Dispatching {:?}", command);

        match command {
            Command::Lookup(args) => self.plugin.lookup(args).await,
            Command::Help(topic) => vec![self.help(topic)],
            Command::Unknown(name) => vec![format!(
                "Unknown command: {}{}. Try {}help.",
                self.prefix, name, self.prefix
            )],
        }
    }

    fn help(&self, topic: Option<&str>) -> String {
        match topic.map(|t| t.trim_start_matches(self.prefix.as_str())) {
            Some(t) if t.eq_ignore_ascii_case("lookup") => HELP.to_string(),
            Some(t) if t.eq_ignore_ascii_case("help") => {
                format!("{}help [command]: {}", self.prefix, COMMANDS[1].1)
            }
            Some(t) => format!("No help for {}. {}", t, self.command_list()),
            None => self.command_list(),
        }
    }

    fn command_list(&self) -> String {
        let lines: Vec<String> = COMMANDS
            .iter()
            .map(|(name, summary)| format!("{}{} - {}", self.prefix, name, summary))
            .collect();
        format!("Available commands:\n{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::AsyncCarrierLookup;
    use crate::error::{LookupApiError, LookupApiResult};
    use crate::models::CarrierInfo;
    use crate::phone::NumberResolver;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct UnreachableLookup;

    #[async_trait]
    impl AsyncCarrierLookup for UnreachableLookup {
        async fn get_phone_number(&self, _: &str, _: bool) -> LookupApiResult<CarrierInfo> {
            Err(LookupApiError::HttpError("Connection failed".to_string()))
        }
    }

    fn dispatcher(prefix: &str) -> CommandDispatcher {
        let plugin =
            LookupPlugin::with_client(Arc::new(UnreachableLookup), NumberResolver::default());
        CommandDispatcher::new(prefix, plugin)
    }

    #[test]
    fn test_parse_lookup() {
        assert_eq!(
            parse_command("!", "!lookup  +15108675309 "),
            Some(Command::Lookup("+15108675309"))
        );
        assert_eq!(
            parse_command("!", "!LOOKUP UK 020 8366 1177"),
            Some(Command::Lookup("UK 020 8366 1177"))
        );
        assert_eq!(parse_command("!", "!lookup"), Some(Command::Lookup("")));
    }

    #[test]
    fn test_parse_help_and_unknown() {
        assert_eq!(parse_command("!", "!help"), Some(Command::Help(None)));
        assert_eq!(
            parse_command("!", "!help lookup"),
            Some(Command::Help(Some("lookup")))
        );
        assert_eq!(parse_command("!", "!dance"), Some(Command::Unknown("dance")));
    }

    #[test]
    fn test_parse_non_commands() {
        assert_eq!(parse_command("!", "lookup +15108675309"), None);
        assert_eq!(parse_command("!", "!"), None);
        assert_eq!(parse_command("!", "! lookup"), None);
        assert_eq!(parse_command("?", "!lookup +15108675309"), None);
    }

    #[tokio::test]
    async fn test_plain_chat_gets_no_reply() {
        assert!(dispatcher("!").handle("hello everyone").await.is_empty());
    }

    #[tokio::test]
    async fn test_help_replies() {
        let d = dispatcher("!");
        let list = d.handle("!help").await;
        assert_eq!(list.len(), 1);
        assert!(list[0].contains("!lookup"));
        assert!(list[0].contains("!help"));

        assert_eq!(d.handle("!help lookup").await, vec![HELP.to_string()]);
        assert_eq!(d.handle("!help !lookup").await, vec![HELP.to_string()]);
        assert!(d.handle("!help nope").await[0].starts_with("No help for nope."));
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let replies = dispatcher("?").handle("?dance now").await;
        assert_eq!(replies, vec!["Unknown command: ?dance. Try ?help.".to_string()]);
    }

    #[tokio::test]
    async fn test_lookup_rejection_is_routed() {
        let replies = dispatcher("!").handle("!lookup no digits here").await;
        assert_eq!(
            replies,
            vec!["Could not find a number here: no digits here".to_string()]
        );
    }

    #[tokio::test]
    async fn test_lookup_failure_is_one_message() {
        let replies = dispatcher("!").handle("!lookup +15108675309").await;
        assert_eq!(
            replies,
            vec![
                "Could not find information on phone number +15108675309: HTTP request failed: Connection failed"
                    .to_string()
            ]
        );
    }
}
