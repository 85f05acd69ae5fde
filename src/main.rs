use actix_web::error::InternalError;
use actix_web::{App, HttpResponse, HttpServer, web};
use config::{Config, Environment};
use tera::Tera;

use qiri_sync::db::establish_connection_pool;
use qiri_sync::dto::MessageResponse;
use qiri_sync::models::config::ServerConfig;
use qiri_sync::qiri::QiriClient;
use qiri_sync::repository::DieselRepository;
use qiri_sync::routes::products::{
    show_source_product, show_source_table, show_stored_product, show_stored_table,
};
use qiri_sync::routes::sync::seed_skus;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match Config::builder()
        .add_source(Environment::default())
        .build()
        .and_then(|settings| settings.try_deserialize::<ServerConfig>())
    {
        Ok(config) => config,
        Err(err) => {
            log::error!("Failed to load configuration: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(err) => {
            log::error!("Failed to establish database connection pool: {err}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);
    let client = QiriClient::new(&config.qiri_url);

    let tera = match Tera::new("templates/**/*.html") {
        Ok(tera) => tera,
        Err(err) => {
            log::error!("Failed to load templates: {err}");
            std::process::exit(1);
        }
    };

    let bind_address = config.bind_address.clone();
    log::info!("Starting qiri-sync at http://{bind_address}");

    HttpServer::new(move || {
        // A body that is not a proper SKU array gets the same 400 shape
        // as an empty one.
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            InternalError::from_response(
                err,
                HttpResponse::BadRequest().json(MessageResponse::new(
                    "No SKU's provided, please provide an array of SKU's",
                )),
            )
            .into()
        });

        App::new()
            .app_data(json_config)
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(client.clone()))
            .app_data(web::Data::new(tera.clone()))
            .service(seed_skus)
            .service(show_source_product)
            .service(show_source_table)
            .service(show_stored_table)
            .service(show_stored_product)
    })
    .bind(bind_address)?
    .run()
    .await
}
