use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::fitness_record::validate_pagination;

#[derive(Debug, FromRow, Serialize)]
pub struct HealthMetric {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub weight_kg: Option<f64>,
    pub steps: Option<i32>,
    pub water_intake_liters: Option<f64>,
    pub sleep_hours: Option<f64>,
    pub heart_rate_bpm: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateHealthMetric {
    pub date: NaiveDate,
    pub weight_kg: Option<f64>,
    pub steps: Option<i32>,
    pub water_intake_liters: Option<f64>,
    pub sleep_hours: Option<f64>,
    pub heart_rate_bpm: Option<i32>,
}

impl CreateHealthMetric {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_metric_fields(
            self.weight_kg,
            self.steps,
            self.water_intake_liters,
            self.sleep_hours,
            self.heart_rate_bpm,
        )
    }
}

/// Partial update. There is deliberately no `date` field: a metric can never
/// move to another day, which keeps the one-metric-per-day invariant intact.
#[derive(Debug, Default, Deserialize)]
pub struct HealthMetricPatch {
    pub weight_kg: Option<f64>,
    pub steps: Option<i32>,
    pub water_intake_liters: Option<f64>,
    pub sleep_hours: Option<f64>,
    pub heart_rate_bpm: Option<i32>,
}

impl HealthMetricPatch {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_metric_fields(
            self.weight_kg,
            self.steps,
            self.water_intake_liters,
            self.sleep_hours,
            self.heart_rate_bpm,
        )
    }

    pub fn apply(&self, metric: &mut HealthMetric) {
        if let Some(weight_kg) = self.weight_kg {
            metric.weight_kg = Some(weight_kg);
        }
        if let Some(steps) = self.steps {
            metric.steps = Some(steps);
        }
        if let Some(water_intake_liters) = self.water_intake_liters {
            metric.water_intake_liters = Some(water_intake_liters);
        }
        if let Some(sleep_hours) = self.sleep_hours {
            metric.sleep_hours = Some(sleep_hours);
        }
        if let Some(heart_rate_bpm) = self.heart_rate_bpm {
            metric.heart_rate_bpm = Some(heart_rate_bpm);
        }
    }
}

fn validate_metric_fields(
    weight_kg: Option<f64>,
    steps: Option<i32>,
    water_intake_liters: Option<f64>,
    sleep_hours: Option<f64>,
    heart_rate_bpm: Option<i32>,
) -> Result<(), ApiError> {
    if let Some(weight_kg) = weight_kg {
        if weight_kg <= 0.0 || weight_kg > 500.0 {
            return Err(ApiError::Validation(
                "weight_kg must be greater than 0 and at most 500".into(),
            ));
        }
    }
    if let Some(steps) = steps {
        if !(0..=200_000).contains(&steps) {
            return Err(ApiError::Validation(
                "steps must be between 0 and 200000".into(),
            ));
        }
    }
    if let Some(water_intake_liters) = water_intake_liters {
        if !(0.0..=20.0).contains(&water_intake_liters) {
            return Err(ApiError::Validation(
                "water_intake_liters must be between 0 and 20".into(),
            ));
        }
    }
    if let Some(sleep_hours) = sleep_hours {
        if !(0.0..=24.0).contains(&sleep_hours) {
            return Err(ApiError::Validation(
                "sleep_hours must be between 0 and 24".into(),
            ));
        }
    }
    if let Some(heart_rate_bpm) = heart_rate_bpm {
        if heart_rate_bpm <= 0 || heart_rate_bpm > 300 {
            return Err(ApiError::Validation(
                "heart_rate_bpm must be greater than 0 and at most 300".into(),
            ));
        }
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct HealthMetricQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl HealthMetricQuery {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_pagination(self.limit, self.offset)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(100)
    }

    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }
}
