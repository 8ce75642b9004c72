use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::fitness_records::find_record_by_id;
use crate::errors::ApiError;
use crate::middleware::auth::AuthenticatedUser;

#[tracing::instrument(
    name = "Get fitness record",
    skip(pool, user),
    fields(user_id = %user.user_id)
)]
pub async fn get_fitness_record(
    pool: web::Data<PgPool>,
    user: web::ReqData<AuthenticatedUser>,
    record_id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    // Existence is checked before ownership, so a non-owner of an
    // existing record gets 403, not 404
    let record = find_record_by_id(&pool, *record_id)
        .await?
        .ok_or(ApiError::NotFound("Fitness record"))?;

    if record.user_id != user.user_id {
        return Err(ApiError::AccessDenied("record"));
    }

    Ok(HttpResponse::Ok().json(record))
}
