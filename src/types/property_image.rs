use serde::{Deserialize, Serialize};

/// An image attached to a property, as returned by the listing service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyImage {
    /// Unique identifier.
    pub id: i64,

    /// The property this image belongs to.
    pub property_id: i64,

    /// Where the stored image lives. Opaque to the client; the referenced
    /// resource's lifecycle is the service's concern.
    pub url: String,

    /// Optional display caption.
    pub caption: Option<String>,

    /// Optional display ordering, lowest first.
    pub order_index: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn property_image_deserialization() {
        let image: PropertyImage = serde_json::from_value(json!({
            "id": 12,
            "property_id": 5,
            "url": "/media/abc123.jpg",
            "caption": "Front porch",
            "order_index": 1
        }))
        .unwrap();

        assert_eq!(image.url, "/media/abc123.jpg");
        assert_eq!(image.order_index, Some(1));
    }
}
