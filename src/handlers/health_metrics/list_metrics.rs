use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::health_metrics::list_metrics;
use crate::errors::ApiError;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::health_metric::HealthMetricQuery;

#[tracing::instrument(
    name = "List health metrics",
    skip(pool, user, query),
    fields(user_id = %user.user_id)
)]
pub async fn list_health_metrics(
    pool: web::Data<PgPool>,
    user: web::ReqData<AuthenticatedUser>,
    query: web::Query<HealthMetricQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    let metrics = list_metrics(&pool, user.user_id, &query).await?;

    Ok(HttpResponse::Ok().json(metrics))
}
