use serde::{Deserialize, Serialize};

/// One turn of a chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    /// The role of the message.
    pub role: ChatRole,

    /// The message text.
    pub content: String,
}

/// Role type for a chat message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The site visitor.
    User,

    /// The assistant replying on behalf of the service.
    Assistant,

    /// Out-of-band instructions for the assistant.
    System,
}

impl ChatMessage {
    /// Create a new `ChatMessage` with the given role and content.
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a new user `ChatMessage`.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Create a new assistant `ChatMessage`.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    /// Create a new system `ChatMessage`.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }
}

impl From<&str> for ChatMessage {
    fn from(content: &str) -> Self {
        Self::user(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn chat_message_serialization() {
        let message = ChatMessage::user("Do you cover Myrtle Beach?");
        assert_eq!(
            to_value(&message).unwrap(),
            json!({
                "role": "user",
                "content": "Do you cover Myrtle Beach?"
            })
        );
    }

    #[test]
    fn chat_roles_serialize_lowercase() {
        assert_eq!(to_value(ChatRole::User).unwrap(), json!("user"));
        assert_eq!(to_value(ChatRole::Assistant).unwrap(), json!("assistant"));
        assert_eq!(to_value(ChatRole::System).unwrap(), json!("system"));
    }

    #[test]
    fn chat_message_from_str() {
        let message: ChatMessage = "Hello".into();
        assert_eq!(message.role, ChatRole::User);
        assert_eq!(message.content, "Hello");
    }
}
