use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::qiri::RawProductRecord;

/// Flat snake_case product shape persisted by the repository.
///
/// The persistence layer's identifier matching is case-insensitive, so the
/// raw camelCase names (`productID`, `listPrice`, ...) would collide as
/// column names. Normalization renames and flattens only; values pass
/// through without unit, currency or rounding changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedProduct {
    pub sku: String,
    pub name: String,
    pub product_id: String,
    pub unit_type: String,
    pub vat: i32,
    pub currency: String,
    pub list_price: i32,
    pub selling_price: i32,
    pub unit_quantity: i32,
    pub unavailable: bool,
    pub available_in_webshop: bool,
    pub is_organic: bool,
    pub is_ecological: bool,
    pub is_private_label: bool,
}

/// A structurally incomplete source record that cannot be flattened.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedRecord {
    #[error("source record for sku {sku} is missing its {section} section")]
    MissingSection { sku: String, section: &'static str },
}

impl NormalizedProduct {
    /// Flatten a raw source record into the persisted shape.
    ///
    /// Pure and total for well-formed records; a missing nested section is
    /// reported as [`MalformedRecord`] and treated by the synchronizer as a
    /// per-item insert failure.
    pub fn from_raw(raw: RawProductRecord) -> Result<Self, MalformedRecord> {
        let RawProductRecord { sku, product } = raw;

        let missing = |section| MalformedRecord::MissingSection {
            sku: sku.clone(),
            section,
        };
        let pricing = product.pricing.ok_or_else(|| missing("pricing"))?;
        let availability = product.availability.ok_or_else(|| missing("availability"))?;
        let classification = product.classification.ok_or_else(|| missing("classification"))?;

        Ok(Self {
            sku,
            name: product.name,
            product_id: product.product_id,
            unit_type: product.unit_type,
            vat: pricing.vat,
            currency: pricing.currency,
            list_price: pricing.list_price,
            selling_price: pricing.selling_price,
            unit_quantity: product.unit_quantity,
            unavailable: availability.unavailable,
            available_in_webshop: availability.available_in_webshop,
            is_organic: classification.is_organic,
            is_ecological: classification.is_ecological,
            is_private_label: classification.is_private_label,
        })
    }
}

/// The sku/name/list_price projection served by the read endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSummary {
    pub sku: String,
    pub name: String,
    pub list_price: i32,
}

impl From<NormalizedProduct> for ProductSummary {
    fn from(product: NormalizedProduct) -> Self {
        Self {
            sku: product.sku,
            name: product.name,
            list_price: product.list_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::qiri::{Availability, Classification, Pricing, RawProduct};

    fn raw_milk() -> RawProductRecord {
        RawProductRecord {
            sku: "103580".into(),
            product: RawProduct {
                name: "Milk".into(),
                product_id: "P1".into(),
                unit_type: "stuks".into(),
                pricing: Some(Pricing {
                    list_price: 150,
                    selling_price: 140,
                    vat: 9,
                    currency: "EUR".into(),
                }),
                unit_quantity: 1,
                availability: Some(Availability {
                    unavailable: false,
                    available_in_webshop: true,
                }),
                classification: Some(Classification {
                    is_organic: true,
                    is_ecological: false,
                    is_private_label: false,
                }),
            },
        }
    }

    #[test]
    fn flattens_and_renames_every_field() {
        let product = NormalizedProduct::from_raw(raw_milk()).unwrap();

        assert_eq!(
            product,
            NormalizedProduct {
                sku: "103580".into(),
                name: "Milk".into(),
                product_id: "P1".into(),
                unit_type: "stuks".into(),
                vat: 9,
                currency: "EUR".into(),
                list_price: 150,
                selling_price: 140,
                unit_quantity: 1,
                unavailable: false,
                available_in_webshop: true,
                is_organic: true,
                is_ecological: false,
                is_private_label: false,
            }
        );
    }

    #[test]
    fn missing_pricing_is_malformed() {
        let mut raw = raw_milk();
        raw.product.pricing = None;

        let err = NormalizedProduct::from_raw(raw).unwrap_err();
        assert_eq!(
            err,
            MalformedRecord::MissingSection {
                sku: "103580".into(),
                section: "pricing",
            }
        );
    }

    #[test]
    fn missing_classification_is_malformed() {
        let mut raw = raw_milk();
        raw.product.classification = None;

        let err = NormalizedProduct::from_raw(raw).unwrap_err();
        assert!(err.to_string().contains("classification"));
    }
}
