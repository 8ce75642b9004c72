use actix_web::{web, HttpResponse};
use sqlx::PgPool;

use crate::db::fitness_records::list_records;
use crate::errors::ApiError;
use crate::middleware::auth::AuthenticatedUser;
use crate::models::fitness_record::FitnessRecordQuery;

#[tracing::instrument(
    name = "List fitness records",
    skip(pool, user, query),
    fields(user_id = %user.user_id)
)]
pub async fn list_fitness_records(
    pool: web::Data<PgPool>,
    user: web::ReqData<AuthenticatedUser>,
    query: web::Query<FitnessRecordQuery>,
) -> Result<HttpResponse, ApiError> {
    query.validate()?;

    let records = list_records(&pool, user.user_id, &query).await?;

    Ok(HttpResponse::Ok().json(records))
}
