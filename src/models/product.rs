use diesel::prelude::*;

use crate::domain::product::NormalizedProduct;

/// One persisted product row. `id` is a plain autoincrement key; `sku` is
/// the business key but carries no uniqueness constraint, so repeated
/// seeding of the same SKU yields multiple rows.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
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

impl From<Product> for NormalizedProduct {
    fn from(product: Product) -> Self {
        Self {
            sku: product.sku,
            name: product.name,
            product_id: product.product_id,
            unit_type: product.unit_type,
            vat: product.vat,
            currency: product.currency,
            list_price: product.list_price,
            selling_price: product.selling_price,
            unit_quantity: product.unit_quantity,
            unavailable: product.unavailable,
            available_in_webshop: product.available_in_webshop,
            is_organic: product.is_organic,
            is_ecological: product.is_ecological,
            is_private_label: product.is_private_label,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub sku: &'a str,
    pub name: &'a str,
    pub product_id: &'a str,
    pub unit_type: &'a str,
    pub vat: i32,
    pub currency: &'a str,
    pub list_price: i32,
    pub selling_price: i32,
    pub unit_quantity: i32,
    pub unavailable: bool,
    pub available_in_webshop: bool,
    pub is_organic: bool,
    pub is_ecological: bool,
    pub is_private_label: bool,
}

impl<'a> From<&'a NormalizedProduct> for NewProduct<'a> {
    fn from(product: &'a NormalizedProduct) -> Self {
        Self {
            sku: &product.sku,
            name: &product.name,
            product_id: &product.product_id,
            unit_type: &product.unit_type,
            vat: product.vat,
            currency: &product.currency,
            list_price: product.list_price,
            selling_price: product.selling_price,
            unit_quantity: product.unit_quantity,
            unavailable: product.unavailable,
            available_in_webshop: product.available_in_webshop,
            is_organic: product.is_organic,
            is_ecological: product.is_ecological,
            is_private_label: product.is_private_label,
        }
    }
}
