mod create_metric;
mod delete_metric;
mod list_metrics;
mod metric_detail;
mod update_metric;

pub use create_metric::create_health_metric;
pub use delete_metric::delete_health_metric;
pub use list_metrics::list_health_metrics;
pub use metric_detail::get_health_metric;
pub use update_metric::update_health_metric;
