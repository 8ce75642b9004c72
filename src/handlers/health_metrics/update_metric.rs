use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::health_metrics::{find_metric_by_id, update_metric};
use crate::errors::ApiError;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::health_metric::HealthMetricPatch;

#[tracing::instrument(
    name = "Update health metric",
    skip(pool, user, patch),
    fields(user_id = %user.user_id)
)]
pub async fn update_health_metric(
    pool: web::Data<PgPool>,
    user: web::ReqData<AuthenticatedUser>,
    metric_id: web::Path<Uuid>,
    patch: web::Json<HealthMetricPatch>,
) -> Result<HttpResponse, ApiError> {
    patch.validate()?;

    let mut metric = find_metric_by_id(&pool, *metric_id)
        .await?
        .ok_or(ApiError::NotFound("Health metric"))?;

    if metric.user_id != user.user_id {
        return Err(ApiError::AccessDenied("metric"));
    }

    patch.apply(&mut metric);
    let updated = update_metric(&pool, &metric).await?;

    Ok(HttpResponse::Ok().json(updated))
}
