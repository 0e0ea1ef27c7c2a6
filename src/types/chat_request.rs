use serde::{Deserialize, Serialize};

use crate::types::ChatMessage;

/// A request to the chat endpoint.
///
/// The service holds no conversation state: continuity across turns exists
/// only if the caller resends prior turns in `history`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    /// The current utterance.
    pub message: String,

    /// Prior turns, oldest first. Omitted from the wire when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<ChatMessage>>,
}

impl ChatRequest {
    /// Creates a request for a single utterance with no history.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            history: None,
        }
    }

    /// Attaches prior turns to the request.
    pub fn with_history(mut self, history: Vec<ChatMessage>) -> Self {
        self.history = Some(history);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn bare_message_omits_history() {
        let request = ChatRequest::new("Hello");
        assert_eq!(to_value(&request).unwrap(), json!({ "message": "Hello" }));
    }

    #[test]
    fn history_is_carried_in_order() {
        let request = ChatRequest::new("And financing?").with_history(vec![
            ChatMessage::user("Do you cover Myrtle Beach?"),
            ChatMessage::assistant("We do."),
        ]);

        assert_eq!(
            to_value(&request).unwrap(),
            json!({
                "message": "And financing?",
                "history": [
                    { "role": "user", "content": "Do you cover Myrtle Beach?" },
                    { "role": "assistant", "content": "We do." }
                ]
            })
        );
    }
}
