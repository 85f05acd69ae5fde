use actix_web::{HttpResponse, Responder, get, web};
use serde::Deserialize;
use tera::{Context, Tera};

use crate::dto::MessageResponse;
use crate::dto::products::{SourceProductResponse, StoredProductResponse};
use crate::qiri::QiriClient;
use crate::repository::DieselRepository;
use crate::routes::render_template;
use crate::services::ServiceError;
use crate::services::products::{
    DEFAULT_TABLE_SKUS, list_source_products as list_source_products_service,
    list_stored_products as list_stored_products_service,
    show_source_product as show_source_product_service,
    show_stored_product as show_stored_product_service,
};

#[derive(Deserialize)]
struct TableQueryParams {
    /// Comma-separated SKU list; the default seed list when absent.
    skus: Option<String>,
}

/// Split a comma-separated SKU list, trimming whitespace and dropping
/// empty segments.
fn parse_sku_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|sku| !sku.is_empty())
        .map(str::to_owned)
        .collect()
}

#[get("/product/{sku}")]
pub async fn show_source_product(
    sku: web::Path<String>,
    client: web::Data<QiriClient>,
) -> impl Responder {
    let sku = sku.into_inner();
    match show_source_product_service(&sku, client.get_ref()).await {
        Ok(product) => HttpResponse::Ok().json(SourceProductResponse::from(product)),
        Err(ServiceError::InvalidInput(message)) => {
            HttpResponse::BadRequest().json(MessageResponse::new(message))
        }
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(MessageResponse::new("Could not find product"))
        }
        Err(err) => {
            log::error!("Failed to retrieve product {sku}: {err}");
            HttpResponse::InternalServerError().json(MessageResponse::new(
                "Something went wrong trying to retrieve product, please look at the logs.",
            ))
        }
    }
}

#[get("/table")]
pub async fn show_source_table(
    params: web::Query<TableQueryParams>,
    client: web::Data<QiriClient>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let skus: Vec<String> = params
        .skus
        .as_deref()
        .map(parse_sku_list)
        .filter(|skus| !skus.is_empty())
        .unwrap_or_else(|| DEFAULT_TABLE_SKUS.iter().map(|s| s.to_string()).collect());

    let products = list_source_products_service(&skus, client.get_ref()).await;
    if products.is_empty() {
        return HttpResponse::NotFound().json(MessageResponse::new("Could not find products"));
    }

    let mut context = Context::new();
    context.insert("products", &products);
    render_template(&tera, "products/table.html", &context)
}

#[get("/pgTable")]
pub async fn show_stored_table(
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match list_stored_products_service(repo.get_ref()) {
        Ok(products) => {
            let mut context = Context::new();
            context.insert("products", &products);
            render_template(&tera, "products/table.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render stored product table: {err}");
            HttpResponse::InternalServerError().json(MessageResponse::new(
                "Could not find products in the table.",
            ))
        }
    }
}

#[get("/pgTable/{sku}")]
pub async fn show_stored_product(
    sku: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let sku = sku.into_inner();
    match show_stored_product_service(&sku, repo.get_ref()) {
        Ok(summary) => HttpResponse::Ok().json(StoredProductResponse::from(summary)),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().json(MessageResponse::new(
            format!("Could not find a product with sku {sku}"),
        )),
        Err(err) => {
            log::error!("Failed to get stored product {sku}: {err}");
            HttpResponse::InternalServerError().json(MessageResponse::new(
                "Something went wrong trying to retrieve product, please look at the logs.",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sku_list_is_trimmed_and_empty_segments_are_dropped() {
        assert_eq!(
            parse_sku_list("103580, 103613 ,,103664"),
            vec![
                "103580".to_string(),
                "103613".to_string(),
                "103664".to_string()
            ]
        );
    }

    #[test]
    fn all_blank_sku_list_parses_to_nothing() {
        assert!(parse_sku_list(" , ,").is_empty());
    }
}
