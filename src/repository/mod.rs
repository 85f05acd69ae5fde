use crate::db::{DbConnection, DbPool};
use crate::domain::product::{NormalizedProduct, ProductSummary};

pub mod errors;
pub mod product;
#[cfg(test)]
pub mod test;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository
/// to be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for persisted products.
///
/// The read endpoints are configured with the sku/name/list_price
/// projection, so reads return [`ProductSummary`] values.
pub trait ProductReader {
    /// List all persisted rows as full normalized records, in insert order.
    fn list_products(&self) -> RepositoryResult<Vec<NormalizedProduct>>;
    /// List all persisted rows in insert order.
    fn list_summaries(&self) -> RepositoryResult<Vec<ProductSummary>>;
    /// Retrieve the first row matching a SKU.
    fn get_summary_by_sku(&self, sku: &str) -> RepositoryResult<Option<ProductSummary>>;
}

/// Write operations for persisted products.
pub trait ProductWriter {
    /// Insert one normalized record. No uniqueness is enforced on `sku`.
    fn create_product(&self, product: &NormalizedProduct) -> RepositoryResult<usize>;
}
