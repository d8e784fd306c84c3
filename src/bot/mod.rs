//! Chat command handling.
//!
//! A chat line that starts with the configured prefix is parsed into a
//! [`Command`] and routed to the plugin that serves it.

pub mod dispatcher;

pub use dispatcher::{parse_command, Command, CommandDispatcher};
