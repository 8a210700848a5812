mod web;

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use folio::api::ApiClient;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let backend_url =
        std::env::var("BACKEND_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
    log::info!("Using backend at {backend_url}");

    let state = Data::new(web::state::AppState {
        api: ApiClient::new(&backend_url),
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(web::handlers::configure)
            .service(Files::new("/static", "./static").prefer_utf8(true))
    })
    .bind(std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()))?
    .run()
    .await
}
