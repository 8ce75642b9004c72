use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::health_metrics::find_metric_by_id;
use crate::errors::ApiError;
use crate::middleware::auth::AuthenticatedUser;

#[tracing::instrument(
    name = "Get health metric",
    skip(pool, user),
    fields(user_id = %user.user_id)
)]
pub async fn get_health_metric(
    pool: web::Data<PgPool>,
    user: web::ReqData<AuthenticatedUser>,
    metric_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let metric = find_metric_by_id(&pool, *metric_id)
        .await?
        .ok_or(ApiError::NotFound("Health metric"))?;

    if metric.user_id != user.user_id {
        return Err(ApiError::AccessDenied("metric"));
    }

    Ok(HttpResponse::Ok().json(metric))
}
