use serde::{Deserialize, Serialize};

/// The upload endpoint's response: where the stored object now lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    /// URL of the stored object, to be embedded in downstream payloads.
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn upload_response_deserialization() {
        let response: UploadResponse =
            serde_json::from_value(json!({ "url": "/media/abc123.jpg" })).unwrap();
        assert_eq!(response.url, "/media/abc123.jpg");
    }

    #[test]
    fn missing_url_is_an_error() {
        let result = serde_json::from_value::<UploadResponse>(json!({ "path": "abc123.jpg" }));
        assert!(result.is_err());
    }

    #[test]
    fn non_string_url_is_an_error() {
        let result = serde_json::from_value::<UploadResponse>(json!({ "url": 42 }));
        assert!(result.is_err());
    }
}
