use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::fitness_record::{CreateFitnessRecord, FitnessRecord, FitnessRecordQuery};

const RECORD_COLUMNS: &str = "id, user_id, date, workout_type, duration_minutes, \
     calories_burned, distance_km, intensity_level, notes, created_at, updated_at";

#[tracing::instrument(name = "Insert fitness record", skip(pool, data), fields(user_id = %user_id))]
pub async fn insert_record(
    pool: &PgPool,
    user_id: Uuid,
    data: &CreateFitnessRecord,
) -> Result<FitnessRecord, sqlx::Error> {
    // created_at and updated_at start out equal
    let query = format!(
        r#"
        INSERT INTO fitness_records
            (id, user_id, date, workout_type, duration_minutes, calories_burned,
             distance_km, intensity_level, notes, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10)
        RETURNING {RECORD_COLUMNS}
        "#
    );
    sqlx::query_as::<_, FitnessRecord>(&query)
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(data.date)
        .bind(&data.workout_type)
        .bind(data.duration_minutes)
        .bind(data.calories_burned)
        .bind(data.distance_km)
        .bind(&data.intensity_level)
        .bind(&data.notes)
        .bind(Utc::now())
        .fetch_one(pool)
        .await
}

#[tracing::instrument(name = "List fitness records", skip(pool, query), fields(user_id = %user_id))]
pub async fn list_records(
    pool: &PgPool,
    user_id: Uuid,
    query: &FitnessRecordQuery,
) -> Result<Vec<FitnessRecord>, sqlx::Error> {
    let sql = format!(
        r#"
        SELECT {RECORD_COLUMNS}
        FROM fitness_records
        WHERE user_id = $1
          AND ($2::date IS NULL OR date >= $2)
          AND ($3::date IS NULL OR date <= $3)
          AND ($4::text IS NULL OR workout_type = $4)
        ORDER BY date DESC
        LIMIT $5 OFFSET $6
        "#
    );
    sqlx::query_as::<_, FitnessRecord>(&sql)
        .bind(user_id)
        .bind(query.start_date)
        .bind(query.end_date)
        .bind(&query.workout_type)
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(pool)
        .await
}

#[tracing::instrument(name = "Look up fitness record", skip(pool))]
pub async fn find_record_by_id(
    pool: &PgPool,
    record_id: Uuid,
) -> Result<Option<FitnessRecord>, sqlx::Error> {
    let sql = format!("SELECT {RECORD_COLUMNS} FROM fitness_records WHERE id = $1");
    sqlx::query_as::<_, FitnessRecord>(&sql)
        .bind(record_id)
        .fetch_optional(pool)
        .await
}

/// Persist a fully-applied record, refreshing `updated_at`.
#[tracing::instrument(name = "Update fitness record", skip(pool, record), fields(record_id = %record.id))]
pub async fn update_record(
    pool: &PgPool,
    record: &FitnessRecord,
) -> Result<FitnessRecord, sqlx::Error> {
    let sql = format!(
        r#"
        UPDATE fitness_records
        SET date = $2, workout_type = $3, duration_minutes = $4, calories_burned = $5,
            distance_km = $6, intensity_level = $7, notes = $8, updated_at = $9
        WHERE id = $1
        RETURNING {RECORD_COLUMNS}
        "#
    );
    sqlx::query_as::<_, FitnessRecord>(&sql)
        .bind(record.id)
        .bind(record.date)
        .bind(&record.workout_type)
        .bind(record.duration_minutes)
        .bind(record.calories_burned)
        .bind(record.distance_km)
        .bind(&record.intensity_level)
        .bind(&record.notes)
        .bind(Utc::now())
        .fetch_one(pool)
        .await
}

#[tracing::instrument(name = "Delete fitness record", skip(pool))]
pub async fn delete_record(pool: &PgPool, record_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM fitness_records WHERE id = $1")
        .bind(record_id)
        .execute(pool)
        .await?;
    Ok(())
}
