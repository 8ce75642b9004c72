use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::fitness_records::{find_record_by_id, update_record};
use crate::errors::ApiError;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::fitness_record::FitnessRecordPatch;

#[tracing::instrument(
    name = "Update fitness record",
    skip(pool, user, patch),
    fields(user_id = %user.user_id)
)]
pub async fn update_fitness_record(
    pool: web::Data<PgPool>,
    user: web::ReqData<AuthenticatedUser>,
    record_id: web::Path<Uuid>,
    patch: web::Json<FitnessRecordPatch>,
) -> Result<HttpResponse, ApiError> {
    patch.validate()?;

    let mut record = find_record_by_id(&pool, *record_id)
        .await?
        .ok_or(ApiError::NotFound("Fitness record"))?;

    if record.user_id != user.user_id {
        return Err(ApiError::AccessDenied("record"));
    }

    patch.apply(&mut record);
    let updated = update_record(&pool, &record).await?;

    Ok(HttpResponse::Ok().json(updated))
}
