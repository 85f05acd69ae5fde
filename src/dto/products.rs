use serde::Serialize;

use crate::domain::product::{NormalizedProduct, ProductSummary};

/// JSON body of the live single-product lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceProductResponse {
    pub sku: String,
    pub name: String,
    pub list_price: i32,
    pub currency: String,
}

impl From<NormalizedProduct> for SourceProductResponse {
    fn from(product: NormalizedProduct) -> Self {
        Self {
            sku: product.sku,
            name: product.name,
            list_price: product.list_price,
            currency: product.currency,
        }
    }
}

/// JSON body of the stored single-product lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProductResponse {
    pub sku: String,
    pub name: String,
    pub list_price: i32,
}

impl From<ProductSummary> for StoredProductResponse {
    fn from(summary: ProductSummary) -> Self {
        Self {
            sku: summary.sku,
            name: summary.name,
            list_price: summary.list_price,
        }
    }
}
