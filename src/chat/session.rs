//! Core chat session management.
//!
//! This module provides the `ChatSession` struct which owns conversation
//! state. The remote chat endpoint is stateless, so the session resends its
//! accumulated message list as history on every turn.

use crate::Coastline;
use crate::error::Result;
use crate::types::{ChatMessage, ChatRequest};

/// A chat session that manages conversation state and API interactions.
///
/// Messages accumulate append-only and live only in memory; nothing is
/// persisted across sessions.
pub struct ChatSession {
    client: Coastline,
    greeting: Option<String>,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Creates a new session with no greeting.
    pub fn new(client: Coastline) -> Self {
        Self {
            client,
            greeting: None,
            messages: Vec::new(),
        }
    }

    /// Creates a new session whose conversation opens with an assistant
    /// greeting. The greeting is part of the history resent on every turn.
    pub fn with_greeting(client: Coastline, greeting: impl Into<String>) -> Self {
        let greeting = greeting.into();
        let messages = vec![ChatMessage::assistant(greeting.clone())];
        Self {
            client,
            greeting: Some(greeting),
            messages,
        }
    }

    /// The conversation so far, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The number of messages in the conversation.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Builds the wire request for the next utterance, carrying the
    /// accumulated history when there is any.
    fn build_request(&self, text: &str) -> ChatRequest {
        let request = ChatRequest::new(text);
        if self.messages.is_empty() {
            request
        } else {
            request.with_history(self.messages.clone())
        }
    }

    /// Records a completed turn in the conversation.
    fn record_turn(&mut self, text: &str, reply: &str) {
        self.messages.push(ChatMessage::user(text));
        self.messages.push(ChatMessage::assistant(reply));
    }

    /// Sends one utterance and returns the assistant's reply.
    ///
    /// The turn is recorded only on success; a failed send leaves the
    /// conversation unchanged so a retry resends the same history.
    pub async fn send(&mut self, text: &str) -> Result<String> {
        let request = self.build_request(text);
        let reply = self.client.chat(request).await?;
        self.record_turn(text, &reply);
        Ok(reply)
    }

    /// Clears the conversation, restoring the greeting if one was
    /// configured.
    pub fn clear(&mut self) {
        self.messages.clear();
        if let Some(greeting) = &self.greeting {
            self.messages.push(ChatMessage::assistant(greeting.as_str()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::session::MemoryTokenStore;
    use crate::types::ChatRole;

    fn test_session() -> ChatSession {
        let client = Coastline::with_options(
            Some("https://api.coastalvision.example".to_string()),
            None,
            Some(Arc::new(MemoryTokenStore::new())),
        )
        .unwrap();
        ChatSession::new(client)
    }

    fn test_session_with_greeting(greeting: &str) -> ChatSession {
        let client = Coastline::with_options(
            Some("https://api.coastalvision.example".to_string()),
            None,
            Some(Arc::new(MemoryTokenStore::new())),
        )
        .unwrap();
        ChatSession::with_greeting(client, greeting)
    }

    #[test]
    fn first_turn_omits_history() {
        let session = test_session();
        let request = session.build_request("Hello");
        assert_eq!(request.message, "Hello");
        assert!(request.history.is_none());
    }

    #[test]
    fn greeting_seeds_the_history() {
        let session = test_session_with_greeting("Welcome to the coast.");
        assert_eq!(session.message_count(), 1);

        let request = session.build_request("Hello");
        let history = request.history.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].role, ChatRole::Assistant);
        assert_eq!(history[0].content, "Welcome to the coast.");
    }

    #[test]
    fn turns_accumulate_and_are_resent() {
        let mut session = test_session();
        session.record_turn("Do you cover Myrtle Beach?", "We do.");
        session.record_turn("And financing?", "Happy to walk you through it.");
        assert_eq!(session.message_count(), 4);

        let request = session.build_request("When can we meet?");
        let history = request.history.unwrap();
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].content, "Do you cover Myrtle Beach?");
        assert_eq!(history[3].content, "Happy to walk you through it.");
    }

    #[test]
    fn clear_restores_the_greeting() {
        let mut session = test_session_with_greeting("Welcome to the coast.");
        session.record_turn("Hello", "Hi there");
        assert_eq!(session.message_count(), 3);

        session.clear();
        assert_eq!(session.message_count(), 1);
        assert_eq!(session.messages()[0].content, "Welcome to the coast.");
    }

    #[test]
    fn clear_without_greeting_empties_the_history() {
        let mut session = test_session();
        session.record_turn("Hello", "Hi there");
        session.clear();
        assert_eq!(session.message_count(), 0);
    }
}
