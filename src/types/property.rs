use serde::{Deserialize, Serialize};

use crate::types::PropertyImage;

/// A property listing as returned by the listing service.
///
/// The same shape is served to the public browse endpoints and the
/// authenticated portal endpoints; public responses simply never include
/// archived listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Property {
    /// Unique identifier.
    pub id: i64,

    /// MLS listing number, when the property is on the MLS.
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
    pub price: Option<f64>,

    /// Bedroom count.
    pub beds: Option<i32>,

    /// Bathroom count; half-baths make this fractional.
    pub baths: Option<f64>,

    /// Interior square footage.
    pub sqft: Option<i32>,

    /// The portal user who owns this listing.
    pub owner_id: Option<i64>,

    /// Archived listings are soft-deleted and hidden from browsing.
    pub is_archived: bool,

    /// Attached images, in no particular order; display order is the
    /// caller's concern via `order_index`.
    #[serde(default)]
    pub images: Vec<PropertyImage>,
}
