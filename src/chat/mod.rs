//! Chat application module for conversing with the listing concierge.
//!
//! This module provides a REPL chat interface built on top of the coastline
//! client library. The remote chat endpoint is stateless, so the session
//! here owns the conversation: it keeps the in-memory message list and
//! resends it as history on every turn.
//!
//! # Architecture
//!
//! The module is organized into several components:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`session`]: Conversation state and API interaction
//! - [`commands`]: Slash command parsing and handling

mod commands;
mod config;
mod session;

pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{ChatArgs, ChatConfig};
pub use session::ChatSession;
