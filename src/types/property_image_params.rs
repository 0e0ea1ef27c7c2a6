use serde::{Deserialize, Serialize};

/// An image reference to attach to a property.
///
/// The `url` usually comes back from [`crate::Coastline::upload_image`]; the
/// client treats it as opaque either way. Display order is assigned here via
/// `order_index`, never inferred from upload completion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyImageParams {
    /// Where the stored image lives.
    pub url: String,

    /// Optional display caption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,

    /// Optional display ordering, lowest first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
}

impl PropertyImageParams {
    /// Creates an image reference for the given URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            caption: None,
            order_index: None,
        }
    }

    /// Sets the display caption.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Sets the display order.
    pub fn with_order_index(mut self, order_index: i32) -> Self {
        self.order_index = Some(order_index);
        self
    }
}
