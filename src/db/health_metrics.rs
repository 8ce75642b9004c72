use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::health_metric::{CreateHealthMetric, HealthMetric, HealthMetricQuery};

const METRIC_COLUMNS: &str = "id, user_id, date, weight_kg, steps, water_intake_liters, \
     sleep_hours, heart_rate_bpm, created_at, updated_at";

#[tracing::instrument(name = "Insert health metric", skip(pool, data), fields(user_id = %user_id, date = %data.date))]
pub async fn insert_metric(
    pool: &PgPool,
    user_id: Uuid,
    data: &CreateHealthMetric,
) -> Result<HealthMetric, sqlx::Error> {
    let query = format!(
        r#"
        INSERT INTO health_metrics
            (id, user_id, date, weight_kg, steps, water_intake_liters,
             sleep_hours, heart_rate_bpm, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
        RETURNING {METRIC_COLUMNS}
        "#
    );
    sqlx::query_as::<_, HealthMetric>(&query)
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(data.date)
        .bind(data.weight_kg)
        .bind(data.steps)
        .bind(data.water_intake_liters)
        .bind(data.sleep_hours)
        .bind(data.heart_rate_bpm)
        .bind(Utc::now())
        .fetch_one(pool)
        .await
}

/// Fast-path duplicate check before the insert; the unique constraint on
/// (user_id, date) remains the authoritative guard under races.
#[tracing::instrument(name = "Check metric exists for date", skip(pool))]
pub async fn metric_exists_for_date(
    pool: &PgPool,
    user_id: Uuid,
    date: NaiveDate,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM health_metrics WHERE user_id = $1 AND date = $2)",
    )
    .bind(user_id)
    .bind(date)
    .fetch_one(pool)
    .await
}

#[tracing::instrument(name = "List health metrics", skip(pool, query), fields(user_id = %user_id))]
pub async fn list_metrics(
    pool: &PgPool,
    user_id: Uuid,
    query: &HealthMetricQuery,
) -> Result<Vec<HealthMetric>, sqlx::Error> {
    let sql = format!(
        r#"
        SELECT {METRIC_COLUMNS}
        FROM health_metrics
        WHERE user_id = $1
          AND ($2::date IS NULL OR date >= $2)
          AND ($3::date IS NULL OR date <= $3)
        ORDER BY date DESC
        LIMIT $4 OFFSET $5
        "#
    );
    sqlx::query_as::<_, HealthMetric>(&sql)
        .bind(user_id)
        .bind(query.start_date)
        .bind(query.end_date)
        .bind(query.limit())
        .bind(query.offset())
        .fetch_all(pool)
        .await
}

#[tracing::instrument(name = "Look up health metric", skip(pool))]
pub async fn find_metric_by_id(
    pool: &PgPool,
    metric_id: Uuid,
) -> Result<Option<HealthMetric>, sqlx::Error> {
    let sql = format!("SELECT {METRIC_COLUMNS} FROM health_metrics WHERE id = $1");
    sqlx::query_as::<_, HealthMetric>(&sql)
        .bind(metric_id)
        .fetch_optional(pool)
        .await
}

/// Persist a fully-applied metric, refreshing `updated_at`.
#[tracing::instrument(name = "Update health metric", skip(pool, metric), fields(metric_id = %metric.id))]
pub async fn update_metric(
    pool: &PgPool,
    metric: &HealthMetric,
) -> Result<HealthMetric, sqlx::Error> {
    let sql = format!(
        r#"
        UPDATE health_metrics
        SET weight_kg = $2, steps = $3, water_intake_liters = $4,
            sleep_hours = $5, heart_rate_bpm = $6, updated_at = $7
        WHERE id = $1
        RETURNING {METRIC_COLUMNS}
        "#
    );
    sqlx::query_as::<_, HealthMetric>(&sql)
        .bind(metric.id)
        .bind(metric.weight_kg)
        .bind(metric.steps)
        .bind(metric.water_intake_liters)
        .bind(metric.sleep_hours)
        .bind(metric.heart_rate_bpm)
        .bind(Utc::now())
        .fetch_one(pool)
        .await
}

#[tracing::instrument(name = "Delete health metric", skip(pool))]
pub async fn delete_metric(pool: &PgPool, metric_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM health_metrics WHERE id = $1")
        .bind(metric_id)
        .execute(pool)
        .await?;
    Ok(())
}
