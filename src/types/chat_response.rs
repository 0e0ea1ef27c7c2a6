use serde::{Deserialize, Serialize};

/// The chat endpoint's reply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    /// The assistant's reply text.
    pub reply: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn chat_response_deserialization() {
        let response: ChatResponse =
            serde_json::from_value(json!({ "reply": "Hi there" })).unwrap();
        assert_eq!(response.reply, "Hi there");
    }

    #[test]
    fn missing_reply_is_an_error() {
        let result = serde_json::from_value::<ChatResponse>(json!({ "text": "Hi there" }));
        assert!(result.is_err());
    }
}
