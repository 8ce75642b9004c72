use actix_web::web;

pub mod auth;
pub mod backend_health;
pub mod fitness_records;
pub mod health_metrics;
pub mod registration;

use crate::middleware::auth::AuthMiddleware;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    cfg.service(
        web::scope("/auth")
            .service(registration::register)
            .service(auth::login)
            .service(web::scope("").wrap(AuthMiddleware).service(auth::me)),
    );

    // Record routes (require authentication)
    cfg.service(
        web::scope("/fitness-records")
            .wrap(AuthMiddleware)
            .service(fitness_records::list_records)
            .service(fitness_records::create_record)
            .service(fitness_records::get_record)
            .service(fitness_records::update_record)
            .service(fitness_records::delete_record),
    );
    cfg.service(
        web::scope("/health-metrics")
            .wrap(AuthMiddleware)
            .service(health_metrics::list_metrics)
            .service(health_metrics::create_metric)
            .service(health_metrics::get_metric)
            .service(health_metrics::update_metric)
            .service(health_metrics::delete_metric),
    );
}
