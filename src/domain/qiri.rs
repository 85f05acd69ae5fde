//! Wire types for the Qiri catalog API.
//!
//! The source wraps each record in an envelope `{sku, product: {...}}`; an
//! envelope without a `product` value means the catalog has no record for
//! the requested SKU. All nested sections keep their camelCase names on the
//! wire.

use serde::Deserialize;

/// Response envelope returned by the source for a single-SKU lookup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceEnvelope {
    pub sku: Option<String>,
    pub product: Option<RawProduct>,
}

/// One raw product record as fetched from the source, SKU included.
#[derive(Debug, Clone, PartialEq)]
pub struct RawProductRecord {
    pub sku: String,
    pub product: RawProduct,
}

/// Product body of the source envelope.
///
/// `pricing`, `availability` and `classification` are optional here so that
/// a structurally incomplete record surfaces as a per-item normalization
/// failure instead of a failed deserialization of the whole response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    pub name: String,
    #[serde(rename = "productID")]
    pub product_id: String,
    pub unit_type: String,
    #[serde(default)]
    pub pricing: Option<Pricing>,
    pub unit_quantity: i32,
    #[serde(default)]
    pub availability: Option<Availability>,
    #[serde(default)]
    pub classification: Option<Classification>,
}

/// Prices are integer cents, `vat` an integer percentage, `currency` an
/// ISO 4217 code. Values pass through unconverted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    pub list_price: i32,
    pub selling_price: i32,
    pub vat: i32,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub unavailable: bool,
    pub available_in_webshop: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub is_organic: bool,
    pub is_ecological: bool,
    pub is_private_label: bool,
}
