use serde::{Deserialize, Serialize};

/// The credential returned by a successful login.
///
/// The token itself is opaque; the client attaches it verbatim as a bearer
/// authorization header and performs no inspection of its contents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessToken {
    /// The opaque bearer token.
    pub access_token: String,

    /// The token scheme, `"bearer"` in practice.
    pub token_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn access_token_deserialization() {
        let token: AccessToken = serde_json::from_value(json!({
            "access_token": "eyJhbGciOi...",
            "token_type": "bearer"
        }))
        .unwrap();

        assert_eq!(token.access_token, "eyJhbGciOi...");
        assert_eq!(token.token_type, "bearer");
    }
}
