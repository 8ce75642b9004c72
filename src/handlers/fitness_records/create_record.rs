use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::fitness_records::insert_record;
use crate::errors::ApiError;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::fitness_record::CreateFitnessRecord;

#[tracing::instrument(
    name = "Create fitness record",
    skip(pool, user, data),
    fields(user_id = %user.user_id, workout_type = %data.workout_type)
)]
pub async fn create_fitness_record(
    pool: web::Data<PgPool>,
    user: web::ReqData<AuthenticatedUser>,
    data: web::Json<CreateFitnessRecord>,
) -> Result<HttpResponse, ApiError> {
    data.validate()?;

    let record = insert_record(&pool, user.user_id, &data).await?;

    tracing::info!("Created fitness record {}", record.id);
    Ok(HttpResponse::Created().json(record))
}
