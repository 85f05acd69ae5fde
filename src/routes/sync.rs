use actix_web::{HttpResponse, Responder, post, web};

use crate::dto::MessageResponse;
use crate::dto::sync::SeedSkusResponse;
use crate::forms::sync::{SeedSkusForm, SeedSkusPayload};
use crate::qiri::QiriClient;
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::sync::seed_products as seed_products_service;

/// Seed the database with the products behind the posted SKUs.
///
/// Responds 200 with per-item failure accounting, 400 when no usable SKUs
/// were posted, 500 only when the sync aborts outside per-item isolation.
#[post("/seed/skus")]
pub async fn seed_skus(
    form: web::Json<SeedSkusForm>,
    client: web::Data<QiriClient>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let payload = match SeedSkusPayload::try_from(form.into_inner()) {
        Ok(payload) => payload,
        Err(_) => {
            return HttpResponse::BadRequest().json(MessageResponse::new(
                "No SKU's provided, please provide an array of SKU's",
            ));
        }
    };

    match seed_products_service(&payload.skus, client.get_ref(), repo.get_ref()).await {
        Ok(outcome) => HttpResponse::Ok().json(SeedSkusResponse::new(
            "Inserted the products into the DB",
            outcome,
        )),
        Err(ServiceError::InvalidInput(message)) => {
            HttpResponse::BadRequest().json(MessageResponse::new(message))
        }
        Err(err) => {
            log::error!("Failed to seed products: {err}");
            HttpResponse::InternalServerError().json(MessageResponse::new(
                "Could not update the DB with the provided skus",
            ))
        }
    }
}
