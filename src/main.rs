mod web;

use std::sync::Arc;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use unscripted::api::ApiClient;
use unscripted::common::{Settings, logging};
use unscripted::store::SiteStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let settings = Settings::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    tracing::info!(
        api = %settings.api_base_url,
        bind = %settings.bind_addr,
        "starting Unscripted India site server"
    );

    let store = SiteStore::new(Arc::new(ApiClient::new(settings.api_base_url.clone())));
    let state = Data::new(web::AppState::new(store, settings.clone()));
    let static_dir = settings.static_dir.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(web::middleware::SecurityHeaders)
            .configure(web::handlers::configure)
            .service(Files::new("/static", &static_dir).prefer_utf8(true))
            .default_service(actix_web::web::to(web::handlers::pages::not_found))
    })
    .bind(&settings.bind_addr)?
    .run()
    .await
}
