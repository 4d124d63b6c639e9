//! Sensor HTTP Routes
//!
//! CRUD endpoints for sensors and their nested readings.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::store::{EntityStore, MemoryStore, Reading, Sensor, SensorStatus, SensorType};

use super::errors::ApiError;

/// Minimum length enforced on `location`
const MIN_LOCATION_LEN: usize = 3;

// ==================
// Request Types
// ==================

/// Body for sensor create and update
#[derive(Debug, Deserialize)]
pub struct SensorBody {
    pub location: String,
    #[serde(rename = "type")]
    pub sensor_type: SensorType,
    pub status: SensorStatus,
}

impl SensorBody {
    fn validate(&self) -> Result<(), ApiError> {
        if self.location.trim().len() < MIN_LOCATION_LEN {
            return Err(ApiError::bad_request(format!(
                "location must be at least {} characters",
                MIN_LOCATION_LEN
            )));
        }
        Ok(())
    }
}

/// Body for reading creation
#[derive(Debug, Deserialize)]
pub struct ReadingBody {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

// ==================
// Sensor Routes
// ==================

/// Create sensor routes
pub fn sensor_routes(store: Arc<MemoryStore>) -> Router {
    Router::new()
        .route(
            "/sensors",
            get(list_sensors_handler).post(create_sensor_handler),
        )
        .route(
            "/sensors/:id",
            get(get_sensor_handler)
                .put(update_sensor_handler)
                .delete(delete_sensor_handler),
        )
        .route(
            "/sensors/:id/readings",
            get(list_sensor_readings_handler).post(create_reading_handler),
        )
        .with_state(store)
}

fn sensor_not_found() -> ApiError {
    ApiError::not_found("Sensor with given ID not found")
}

// ==================
// Sensor Handlers
// ==================

async fn list_sensors_handler(State(store): State<Arc<MemoryStore>>) -> Json<Vec<Sensor>> {
    Json(store.sensors())
}

async fn get_sensor_handler(
    State(store): State<Arc<MemoryStore>>,
    Path(id): Path<u64>,
) -> Result<Json<Sensor>, ApiError> {
    store.sensor(id).map(Json).ok_or_else(sensor_not_found)
}

async fn create_sensor_handler(
    State(store): State<Arc<MemoryStore>>,
    Json(body): Json<SensorBody>,
) -> Result<(StatusCode, Json<Sensor>), ApiError> {
    body.validate()?;
    let sensor = store.insert_sensor(body.location, body.sensor_type, body.status);
    Ok((StatusCode::CREATED, Json(sensor)))
}

async fn update_sensor_handler(
    State(store): State<Arc<MemoryStore>>,
    Path(id): Path<u64>,
    Json(body): Json<SensorBody>,
) -> Result<Json<Sensor>, ApiError> {
    // Unknown id reports before an invalid body
    if store.sensor(id).is_none() {
        return Err(sensor_not_found());
    }
    body.validate()?;

    store
        .update_sensor(id, body.location, body.sensor_type, body.status)
        .map(Json)
        .ok_or_else(sensor_not_found)
}

async fn delete_sensor_handler(
    State(store): State<Arc<MemoryStore>>,
    Path(id): Path<u64>,
) -> Result<Json<Sensor>, ApiError> {
    store.delete_sensor(id).map(Json).ok_or_else(sensor_not_found)
}

// ==================
// Nested Reading Handlers
// ==================

async fn list_sensor_readings_handler(
    State(store): State<Arc<MemoryStore>>,
    Path(id): Path<u64>,
) -> Result<Json<Vec<Reading>>, ApiError> {
    if store.sensor(id).is_none() {
        return Err(sensor_not_found());
    }
    Ok(Json(store.readings_for(id)))
}

async fn create_reading_handler(
    State(store): State<Arc<MemoryStore>>,
    Path(id): Path<u64>,
    Json(body): Json<ReadingBody>,
) -> Result<(StatusCode, Json<Reading>), ApiError> {
    let reading = store
        .insert_reading(id, body.timestamp, body.value)
        .ok_or_else(sensor_not_found)?;
    Ok((StatusCode::CREATED, Json(reading)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensor_body_validation() {
        let body = SensorBody {
            location: "  A ".to_string(),
            sensor_type: SensorType::Temperature,
            status: SensorStatus::Active,
        };
        assert!(body.validate().is_err());

        let body = SensorBody {
            location: "Field A".to_string(),
            sensor_type: SensorType::Temperature,
            status: SensorStatus::Active,
        };
        assert!(body.validate().is_ok());
    }
}
