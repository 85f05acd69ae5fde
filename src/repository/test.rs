use std::cell::RefCell;
use std::collections::HashSet;

use crate::domain::product::{NormalizedProduct, ProductSummary};
use crate::repository::{
    ProductReader, ProductWriter, RepositoryError, RepositoryResult,
};

/// Simple in-memory repository used for unit tests.
#[derive(Default)]
pub struct TestRepository {
    products: RefCell<Vec<NormalizedProduct>>,
    failing_skus: HashSet<String>,
}

impl TestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<NormalizedProduct>) -> Self {
        Self {
            products: RefCell::new(products),
            failing_skus: HashSet::new(),
        }
    }

    /// Make inserts for the given SKU fail with a simulated store error.
    pub fn failing_insert_for(mut self, sku: &str) -> Self {
        self.failing_skus.insert(sku.to_owned());
        self
    }

    pub fn inserted(&self) -> Vec<NormalizedProduct> {
        self.products.borrow().clone()
    }
}

impl ProductReader for TestRepository {
    fn list_products(&self) -> RepositoryResult<Vec<NormalizedProduct>> {
        Ok(self.products.borrow().clone())
    }

    fn list_summaries(&self) -> RepositoryResult<Vec<ProductSummary>> {
        Ok(self
            .products
            .borrow()
            .iter()
            .cloned()
            .map(ProductSummary::from)
            .collect())
    }

    fn get_summary_by_sku(&self, sku: &str) -> RepositoryResult<Option<ProductSummary>> {
        Ok(self
            .products
            .borrow()
            .iter()
            .find(|p| p.sku == sku)
            .cloned()
            .map(ProductSummary::from))
    }
}

impl ProductWriter for TestRepository {
    fn create_product(&self, product: &NormalizedProduct) -> RepositoryResult<usize> {
        if self.failing_skus.contains(&product.sku) {
            return Err(RepositoryError::ValidationError(format!(
                "simulated insert failure for sku {}",
                product.sku
            )));
        }
        self.products.borrow_mut().push(product.clone());
        Ok(1)
    }
}
