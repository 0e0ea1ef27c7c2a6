use serde::{Deserialize, Serialize};

/// Partial update of a property listing. Unset fields are left untouched by
/// the service and omitted from the wire. Images are managed through the
/// dedicated image endpoints, not through updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PropertyUpdateParams {
    /// New MLS listing number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mls_id: Option<String>,

    /// New street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// New city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// New state code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// New ZIP code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,

    /// New asking price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// New bedroom count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beds: Option<i32>,

    /// New bathroom count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baths: Option<f64>,

    /// New square footage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sqft: Option<i32>,

    /// Archive or unarchive the listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
}

impl PropertyUpdateParams {
    /// Creates an empty update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new MLS listing number.
    pub fn with_mls_id(mut self, mls_id: impl Into<String>) -> Self {
        self.mls_id = Some(mls_id.into());
        self
    }

    /// Sets a new street address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets a new city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets a new state code.
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Sets a new ZIP code.
    pub fn with_zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.zip_code = Some(zip_code.into());
        self
    }

    /// Sets a new asking price.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Sets a new bedroom count.
    pub fn with_beds(mut self, beds: i32) -> Self {
        self.beds = Some(beds);
        self
    }

    /// Sets a new bathroom count.
    pub fn with_baths(mut self, baths: f64) -> Self {
        self.baths = Some(baths);
        self
    }

    /// Sets a new square footage.
    pub fn with_sqft(mut self, sqft: i32) -> Self {
        self.sqft = Some(sqft);
        self
    }

    /// Archives or unarchives the listing.
    pub fn with_is_archived(mut self, is_archived: bool) -> Self {
        self.is_archived = Some(is_archived);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn empty_update_serializes_to_empty_object() {
        assert_eq!(to_value(PropertyUpdateParams::new()).unwrap(), json!({}));
    }

    #[test]
    fn price_drop_only_carries_price() {
        let params = PropertyUpdateParams::new().with_price(399000.0);
        assert_eq!(to_value(&params).unwrap(), json!({ "price": 399000.0 }));
    }
}
