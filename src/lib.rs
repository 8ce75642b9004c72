use actix_web::dev::Server;
use actix_web::{http, web, App, HttpServer};
use actix_cors::Cors;
use sqlx::PgPool;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub mod auth;
pub mod config;
pub mod db;
pub mod errors;
mod handlers;
pub mod middleware;
pub mod models;
mod routes;
pub mod telemetry;
pub mod utils;

use crate::config::jwt::JwtSettings;
use crate::errors::ApiError;
use crate::routes::init_routes;

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    jwt_settings: JwtSettings,
) -> Result<Server, std::io::Error> {
    // Wrap using web::Data, which boils down to an Arc smart pointer
    let db_pool_data = web::Data::new(db_pool);
    let jwt_settings = web::Data::new(jwt_settings);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:8050")
            .allowed_origin("http://127.0.0.1:8050")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![
                http::header::AUTHORIZATION,
                http::header::ACCEPT,
                http::header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            // Get a pointer copy and attach it to the application state
            .app_data(db_pool_data.clone())
            .app_data(jwt_settings.clone())
            // Malformed JSON bodies and query strings surface in the standard
            // error body instead of actix's plain-text default
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                ApiError::Validation(err.to_string()).into()
            }))
            .app_data(web::QueryConfig::default().error_handler(|err, _req| {
                ApiError::Validation(err.to_string()).into()
            }))
            // A path id that doesn't parse as a UUID matches no record
            .app_data(web::PathConfig::default().error_handler(|_err, _req| {
                ApiError::NotFound("Resource").into()
            }))
            .configure(init_routes)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
