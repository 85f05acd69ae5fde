use log::{error, warn};

use crate::domain::product::{NormalizedProduct, ProductSummary};
use crate::qiri::{CatalogFetcher, FetchError};
use crate::repository::ProductReader;

use super::{ServiceError, ServiceResult};

/// SKUs rendered by the live table endpoint when the caller supplies none.
pub const DEFAULT_TABLE_SKUS: [&str; 7] = [
    "103580", "103613", "103664", "103850", "105146", "105149", "105167",
];

/// Live lookup of one product at the source.
pub async fn show_source_product<C>(sku: &str, client: &C) -> ServiceResult<NormalizedProduct>
where
    C: CatalogFetcher,
{
    if sku.is_empty() {
        return Err(ServiceError::InvalidInput(
            "No SKU was provided, please provide a sku to retrieve the product.".to_string(),
        ));
    }

    let raw = match client.fetch(sku).await {
        Ok(raw) => raw,
        Err(FetchError::NotFound(_)) => return Err(ServiceError::NotFound),
        Err(err) => {
            error!("Failed to retrieve product {sku}: {err}");
            return Err(ServiceError::Internal);
        }
    };

    NormalizedProduct::from_raw(raw).map_err(|err| {
        error!("Malformed source record for {sku}: {err}");
        ServiceError::Internal
    })
}

/// Live-fetch a list of SKUs for table rendering.
///
/// Items that fail to fetch or normalize are skipped, mirroring the seed
/// pipeline's per-item isolation; the table shows whatever was retrievable.
pub async fn list_source_products<C>(skus: &[String], client: &C) -> Vec<ProductSummary>
where
    C: CatalogFetcher,
{
    let mut products = Vec::new();

    for sku in skus {
        let raw = match client.fetch(sku).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!("Skipping product {sku}: {err}");
                continue;
            }
        };
        match NormalizedProduct::from_raw(raw) {
            Ok(product) => products.push(ProductSummary::from(product)),
            Err(err) => warn!("Skipping malformed product {sku}: {err}"),
        }
    }

    products
}

/// List the persisted rows with the sku/name/list_price projection.
pub fn list_stored_products<R>(repo: &R) -> ServiceResult<Vec<ProductSummary>>
where
    R: ProductReader,
{
    repo.list_summaries().map_err(|err| {
        error!("Failed to list products: {err}");
        ServiceError::Internal
    })
}

/// Look up one persisted row by SKU.
pub fn show_stored_product<R>(sku: &str, repo: &R) -> ServiceResult<ProductSummary>
where
    R: ProductReader,
{
    match repo.get_summary_by_sku(sku) {
        Ok(Some(summary)) => Ok(summary),
        Ok(None) => Err(ServiceError::NotFound),
        Err(err) => {
            error!("Failed to get product {sku}: {err}");
            Err(ServiceError::Internal)
        }
    }
}
