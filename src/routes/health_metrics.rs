use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::handlers::health_metrics::{
    create_health_metric, delete_health_metric, get_health_metric, list_health_metrics,
    update_health_metric,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::health_metric::{CreateHealthMetric, HealthMetricPatch, HealthMetricQuery};

#[get("")]
async fn list_metrics(
    pool: web::Data<PgPool>,
    user: web::ReqData<AuthenticatedUser>,
    query: web::Query<HealthMetricQuery>,
) -> Result<HttpResponse, ApiError> {
    list_health_metrics(pool, user, query).await
}

#[post("")]
async fn create_metric(
    pool: web::Data<PgPool>,
    user: web::ReqData<AuthenticatedUser>,
    data: web::Json<CreateHealthMetric>,
) -> Result<HttpResponse, ApiError> {
    create_health_metric(pool, user, data).await
}

#[get("/{metric_id}")]
async fn get_metric(
    pool: web::Data<PgPool>,
    user: web::ReqData<AuthenticatedUser>,
    metric_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    get_health_metric(pool, user, metric_id).await
}

#[put("/{metric_id}")]
async fn update_metric(
    pool: web::Data<PgPool>,
    user: web::ReqData<AuthenticatedUser>,
    metric_id: web::Path<Uuid>,
    patch: web::Json<HealthMetricPatch>,
) -> Result<HttpResponse, ApiError> {
    update_health_metric(pool, user, metric_id, patch).await
}

#[delete("/{metric_id}")]
async fn delete_metric(
    pool: web::Data<PgPool>,
    user: web::ReqData<AuthenticatedUser>,
    metric_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    delete_health_metric(pool, user, metric_id).await
}
