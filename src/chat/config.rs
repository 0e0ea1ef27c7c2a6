//! Configuration types for the chat application.
//!
//! This module provides CLI argument parsing via `arrrg` and configuration
//! structures for controlling chat behavior.

use arrrg_derive::CommandLine;

/// Greeting the concierge opens with unless disabled.
const DEFAULT_GREETING: &str =
    "Hi! I'm Rachel, your friendly real estate assistant. How can I help today?";

/// Command-line arguments for the coastline-chat tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Base URL of the listing service.
    #[arrrg(optional, "Base URL (default: $COASTLINE_BASE_URL)", "URL")]
    pub base_url: Option<String>,

    /// Replace the default greeting.
    #[arrrg(optional, "Greeting shown before the first turn", "TEXT")]
    pub greeting: Option<String>,

    /// Start with no greeting at all.
    #[arrrg(flag, "Suppress the opening greeting")]
    pub no_greeting: bool,
}

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Base URL of the listing service; falls back to the environment when
    /// unset.
    pub base_url: Option<String>,

    /// Assistant greeting seeded into the conversation, if any.
    pub greeting: Option<String>,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    pub fn new() -> Self {
        Self {
            base_url: None,
            greeting: Some(DEFAULT_GREETING.to_string()),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the greeting.
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = Some(greeting.into());
        self
    }

    /// Removes the greeting.
    pub fn without_greeting(mut self) -> Self {
        self.greeting = None;
        self
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ChatArgs> for ChatConfig {
    fn from(args: ChatArgs) -> Self {
        let greeting = if args.no_greeting {
            None
        } else {
            args.greeting.or_else(|| Some(DEFAULT_GREETING.to_string()))
        };
        ChatConfig {
            base_url: args.base_url,
            greeting,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ChatConfig::new();
        assert!(config.base_url.is_none());
        assert_eq!(config.greeting.as_deref(), Some(DEFAULT_GREETING));
    }

    #[test]
    fn config_from_args_defaults() {
        let config = ChatConfig::from(ChatArgs::default());
        assert!(config.base_url.is_none());
        assert_eq!(config.greeting.as_deref(), Some(DEFAULT_GREETING));
    }

    #[test]
    fn config_from_args_custom() {
        let args = ChatArgs {
            base_url: Some("https://api.coastalvision.example".to_string()),
            greeting: Some("Welcome to the coast.".to_string()),
            no_greeting: false,
        };
        let config = ChatConfig::from(args);
        assert_eq!(
            config.base_url.as_deref(),
            Some("https://api.coastalvision.example")
        );
        assert_eq!(config.greeting.as_deref(), Some("Welcome to the coast."));
    }

    #[test]
    fn no_greeting_flag_wins() {
        let args = ChatArgs {
            base_url: None,
            greeting: Some("Welcome to the coast.".to_string()),
            no_greeting: true,
        };
        let config = ChatConfig::from(args);
        assert!(config.greeting.is_none());
    }
}
