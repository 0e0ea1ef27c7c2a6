use serde::{Deserialize, Serialize};

use crate::types::PropertyImageParams;

/// Parameters for creating a property listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyCreateParams {
    /// MLS listing number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mls_id: Option<String>,

    /// Street address.
    pub address: String,

    /// City.
    pub city: String,

    /// Two-letter state code.
    pub state: String,

    /// ZIP code.
    pub zip_code: String,

    /// Asking price in dollars.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Bedroom count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beds: Option<i32>,

    /// Bathroom count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baths: Option<f64>,

    /// Interior square footage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sqft: Option<i32>,

    /// Images to attach at creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<PropertyImageParams>>,
}

impl PropertyCreateParams {
    /// Creates parameters with the required address fields; everything else
    /// starts unset.
    pub fn new(
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        Self {
            mls_id: None,
            address: address.into(),
            city: city.into(),
            state: state.into(),
            zip_code: zip_code.into(),
            price: None,
            beds: None,
            baths: None,
            sqft: None,
            images: None,
        }
    }

    /// Sets the MLS listing number.
    pub fn with_mls_id(mut self, mls_id: impl Into<String>) -> Self {
        self.mls_id = Some(mls_id.into());
        self
    }

    /// Sets the asking price.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets the bedroom count.
    pub fn with_beds(mut self, beds: i32) -> Self {
        self.beds = Some(beds);
        self
    }

    /// Sets the bathroom count.
    pub fn with_baths(mut self, baths: f64) -> Self {
        self.baths = Some(baths);
        self
    }

    /// Sets the square footage.
    pub fn with_sqft(mut self, sqft: i32) -> Self {
        self.sqft = Some(sqft);
        self
    }

    /// Sets the images to attach at creation time.
    pub fn with_images(mut self, images: Vec<PropertyImageParams>) -> Self {
        self.images = Some(images);
        self
    }
}
