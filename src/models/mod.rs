pub mod auth;
pub mod fitness_record;
pub mod health_metric;
pub mod user;
