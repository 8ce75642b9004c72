use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::ApiError;

#[derive(Debug, FromRow, Serialize)]
pub struct FitnessRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub workout_type: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub distance_km: Option<f64>,
    pub intensity_level: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateFitnessRecord {
    pub date: NaiveDate,
    pub workout_type: String,
    pub duration_minutes: i32,
    pub calories_burned: i32,
    pub distance_km: Option<f64>,
    #[serde(default = "default_intensity")]
    pub intensity_level: String,
    pub notes: Option<String>,
}

fn default_intensity() -> String {
    "medium".to_string()
}

impl CreateFitnessRecord {
    pub fn validate(&self) -> Result<(), ApiError> {
        // Rejected before any persistence operation is attempted
        if self.date > Utc::now().date_naive() {
            return Err(ApiError::Validation("date cannot be in the future".into()));
        }
        validate_workout_fields(
            Some(&self.workout_type),
            Some(self.duration_minutes),
            Some(self.calories_burned),
            self.distance_km,
            Some(&self.intensity_level),
            self.notes.as_deref(),
        )
    }
}

/// Partial update: only the fields present are applied, everything else
/// keeps its prior value.
#[derive(Debug, Default, Deserialize)]
pub struct FitnessRecordPatch {
    pub date: Option<NaiveDate>,
    pub workout_type: Option<String>,
    pub duration_minutes: Option<i32>,
    pub calories_burned: Option<i32>,
    pub distance_km: Option<f64>,
    pub intensity_level: Option<String>,
    pub notes: Option<String>,
}

impl FitnessRecordPatch {
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(date) = self.date {
            if date > Utc::now().date_naive() {
                return Err(ApiError::Validation("date cannot be in the future".into()));
            }
        }
        validate_workout_fields(
            self.workout_type.as_deref(),
            self.duration_minutes,
            self.calories_burned,
            self.distance_km,
            self.intensity_level.as_deref(),
            self.notes.as_deref(),
        )
    }

    pub fn apply(&self, record: &mut FitnessRecord) {
        if let Some(date) = self.date {
            record.date = date;
        }
        if let Some(ref workout_type) = self.workout_type {
            record.workout_type = workout_type.clone();
        }
        if let Some(duration_minutes) = self.duration_minutes {
            record.duration_minutes = duration_minutes;
        }
        if let Some(calories_burned) = self.calories_burned {
            record.calories_burned = calories_burned;
        }
        if let Some(distance_km) = self.distance_km {
            record.distance_km = Some(distance_km);
        }
        if let Some(ref intensity_level) = self.intensity_level {
            record.intensity_level = intensity_level.clone();
        }
        if let Some(ref notes) = self.notes {
            record.notes = Some(notes.clone());
        }
    }
}

fn validate_workout_fields(
    workout_type: Option<&str>,
    duration_minutes: Option<i32>,
    calories_burned: Option<i32>,
    distance_km: Option<f64>,
    intensity_level: Option<&str>,
    notes: Option<&str>,
) -> Result<(), ApiError> {
    if let Some(workout_type) = workout_type {
        if workout_type.trim().is_empty() || workout_type.chars().count() > 50 {
            return Err(ApiError::Validation(
                "workout_type must be between 1 and 50 characters".into(),
            ));
        }
    }
    if let Some(duration_minutes) = duration_minutes {
        if !(1..=1440).contains(&duration_minutes) {
            return Err(ApiError::Validation(
                "duration_minutes must be between 1 and 1440".into(),
            ));
        }
    }
    if let Some(calories_burned) = calories_burned {
        if !(0..=10000).contains(&calories_burned) {
            return Err(ApiError::Validation(
                "calories_burned must be between 0 and 10000".into(),
            ));
        }
    }
    if let Some(distance_km) = distance_km {
        if !(0.0..=1000.0).contains(&distance_km) {
            return Err(ApiError::Validation(
                "distance_km must be between 0 and 1000".into(),
            ));
        }
    }
    if let Some(intensity_level) = intensity_level {
        if intensity_level.is_empty() || intensity_level.chars().count() > 20 {
            return Err(ApiError::Validation(
                "intensity_level must be between 1 and 20 characters".into(),
            ));
        }
    }
    if let Some(notes) = notes {
        if notes.chars().count() > 1000 {
            return Err(ApiError::Validation(
                "notes must be at most 1000 characters".into(),
            ));
        }
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct FitnessRecordQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub workout_type: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl FitnessRecordQuery {
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

pub(crate) fn validate_pagination(limit: Option<i64>, offset: Option<i64>) -> Result<(), ApiError> {
    if let Some(limit) = limit {
        if !(1..=1000).contains(&limit) {
            return Err(ApiError::Validation(
                "limit must be between 1 and 1000".into(),
            ));
        }
    }
    if let Some(offset) = offset {
        if offset < 0 {
            return Err(ApiError::Validation("offset must not be negative".into()));
        }
    }
    Ok(())
}
