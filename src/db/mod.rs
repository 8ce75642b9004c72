pub mod fitness_records;
pub mod health_metrics;
pub mod users;
