use log::warn;

use crate::domain::product::NormalizedProduct;
use crate::domain::sync::BatchOutcome;
use crate::qiri::CatalogFetcher;
use crate::repository::ProductWriter;

use super::{ServiceError, ServiceResult};

/// Core business logic for the batch seed operation.
///
/// SKUs are processed sequentially in input order: one fetch and one
/// insert at a time, giving a deterministic order of failure accumulation.
/// Every per-item failure is recorded in the returned [`BatchOutcome`] and
/// never aborts the remaining SKUs; a retrieval failure short-circuits its
/// SKU so normalization and persistence are skipped for it. Only an empty
/// input escapes as a hard failure, before any fetch or insert happens.
pub async fn seed_products<C, R>(skus: &[String], client: &C, repo: &R) -> ServiceResult<BatchOutcome>
where
    C: CatalogFetcher,
    R: ProductWriter,
{
    if skus.is_empty() {
        return Err(ServiceError::InvalidInput(
            "No SKU's provided, please provide an array of SKU's".to_string(),
        ));
    }

    let mut outcome = BatchOutcome::default();

    for sku in skus {
        let raw = match client.fetch(sku).await {
            Ok(raw) => raw,
            Err(err) => {
                warn!("Failed to retrieve product {sku}: {err}");
                outcome.record_retrieval_failure(sku, err.to_string());
                continue;
            }
        };

        let product = match NormalizedProduct::from_raw(raw) {
            Ok(product) => product,
            Err(err) => {
                warn!("Failed to normalize product {sku}: {err}");
                outcome.record_insert_failure(sku, err.to_string());
                continue;
            }
        };

        if let Err(err) = repo.create_product(&product) {
            warn!("Failed to insert product {sku}: {err}");
            outcome.record_insert_failure(sku, err.to_string());
        }
    }

    Ok(outcome)
}
