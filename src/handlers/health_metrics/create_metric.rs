use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::health_metrics::{insert_metric, metric_exists_for_date};
use crate::errors::{from_unique_violation, ApiError};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::health_metric::CreateHealthMetric;

#[tracing::instrument(
    name = "Create health metric",
    skip(pool, user, data),
    fields(user_id = %user.user_id, date = %data.date)
)]
pub async fn create_health_metric(
    pool: web::Data<PgPool>,
    user: web::ReqData<AuthenticatedUser>,
    data: web::Json<CreateHealthMetric>,
) -> Result<HttpResponse, ApiError> {
    data.validate()?;

    // Fast-path check for a friendlier error; a concurrent insert racing
    // past it still hits the unique constraint below
    if metric_exists_for_date(&pool, user.user_id, data.date).await? {
        return Err(ApiError::DuplicateDate);
    }

    let metric = insert_metric(&pool, user.user_id, &data)
        .await
        .map_err(from_unique_violation)?;

    tracing::info!("Created health metric {}", metric.id);
    Ok(HttpResponse::Created().json(metric))
}
