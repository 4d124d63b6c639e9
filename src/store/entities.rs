//! # Entity Models
//!
//! Sensor and reading records as they appear on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of quantity a sensor measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorType {
    Temperature,
    Humidity,
    Moisture,
}

impl SensorType {
    /// Get the wire spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorType::Temperature => "temperature",
            SensorType::Humidity => "humidity",
            SensorType::Moisture => "moisture",
        }
    }

    /// Parse the wire spelling; `None` for anything outside the enum
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "temperature" => Some(SensorType::Temperature),
            "humidity" => Some(SensorType::Humidity),
            "moisture" => Some(SensorType::Moisture),
            _ => None,
        }
    }
}

/// Whether a sensor is currently reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    Active,
    Inactive,
}

/// A deployed sensor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    /// Unique identifier, assigned sequentially by the store
    pub id: u64,

    /// Where the sensor is installed
    pub location: String,

    /// What the sensor measures
    #[serde(rename = "type")]
    pub sensor_type: SensorType,

    /// Reporting status
    pub status: SensorStatus,
}

/// One measurement taken by a sensor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reading {
    /// Unique identifier, assigned sequentially by the store
    pub id: u64,

    /// The sensor this reading belongs to
    pub sensor_id: u64,

    /// When the measurement was taken
    pub timestamp: DateTime<Utc>,

    /// Measured value
    pub value: f64,
}
