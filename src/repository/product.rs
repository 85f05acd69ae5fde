use diesel::prelude::*;

use crate::domain::product::{NormalizedProduct, ProductSummary};
use crate::models::product::{NewProduct, Product as DbProduct};
use crate::repository::{DieselRepository, ProductReader, ProductWriter, RepositoryResult};

impl ProductReader for DieselRepository {
    fn list_products(&self) -> RepositoryResult<Vec<NormalizedProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let rows = products::table
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn list_summaries(&self) -> RepositoryResult<Vec<ProductSummary>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let rows = products::table
            .select((products::sku, products::name, products::list_price))
            .order(products::id.asc())
            .load::<(String, String, i32)>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(|(sku, name, list_price)| ProductSummary {
                sku,
                name,
                list_price,
            })
            .collect())
    }

    fn get_summary_by_sku(&self, sku: &str) -> RepositoryResult<Option<ProductSummary>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let row = products::table
            .filter(products::sku.eq(sku))
            .select((products::sku, products::name, products::list_price))
            .order(products::id.asc())
            .first::<(String, String, i32)>(&mut conn)
            .optional()?;

        Ok(row.map(|(sku, name, list_price)| ProductSummary {
            sku,
            name,
            list_price,
        }))
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, product: &NormalizedProduct) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let row = NewProduct::from(product);
        Ok(diesel::insert_into(products::table)
            .values(&row)
            .execute(&mut conn)?)
    }
}
