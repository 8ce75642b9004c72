use actix_web::{delete, get, post, put, web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::handlers::fitness_records::{
    create_fitness_record, delete_fitness_record, get_fitness_record, list_fitness_records,
    update_fitness_record,
};
use crate::middleware::auth::AuthenticatedUser;
use crate::models::fitness_record::{CreateFitnessRecord, FitnessRecordPatch, FitnessRecordQuery};

#[get("")]
async fn list_records(
    pool: web::Data<PgPool>,
    user: web::ReqData<AuthenticatedUser>,
    query: web::Query<FitnessRecordQuery>,
) -> Result<HttpResponse, ApiError> {
    list_fitness_records(pool, user, query).await
}

#[post("")]
async fn create_record(
    pool: web::Data<PgPool>,
    user: web::ReqData<AuthenticatedUser>,
    data: web::Json<CreateFitnessRecord>,
) -> Result<HttpResponse, ApiError> {
    create_fitness_record(pool, user, data).await
}

#[get("/{record_id}")]
async fn get_record(
    pool: web::Data<PgPool>,
    user: web::ReqData<AuthenticatedUser>,
    record_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    get_fitness_record(pool, user, record_id).await
}

#[put("/{record_id}")]
async fn update_record(
    pool: web::Data<PgPool>,
    user: web::ReqData<AuthenticatedUser>,
    record_id: web::Path<Uuid>,
    patch: web::Json<FitnessRecordPatch>,
) -> Result<HttpResponse, ApiError> {
    update_fitness_record(pool, user, record_id, patch).await
}

#[delete("/{record_id}")]
async fn delete_record(
    pool: web::Data<PgPool>,
    user: web::ReqData<AuthenticatedUser>,
    record_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    delete_fitness_record(pool, user, record_id).await
}
