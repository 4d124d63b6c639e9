//! # In-Memory Store
//!
//! RwLock-backed sensor and reading collections with sequential id
//! assignment. Stands in for a real database.

use std::sync::RwLock;

use chrono::{DateTime, Utc};

use super::entities::{Reading, Sensor, SensorStatus, SensorType};

/// Read access to the entity collections.
///
/// The query engine consumes the store through this trait only; mutation
/// stays on the concrete [`MemoryStore`].
pub trait EntityStore: Send + Sync {
    /// Look up a sensor by id
    fn sensor(&self, id: u64) -> Option<Sensor>;

    /// All readings in insertion order
    fn readings(&self) -> Vec<Reading>;
}

/// In-memory entity store
#[derive(Debug, Default)]
pub struct MemoryStore {
    sensors: RwLock<Vec<Sensor>>,
    readings: RwLock<Vec<Reading>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Demo dataset the server boots with
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut sensors = store.sensors.write().unwrap();
            sensors.push(Sensor {
                id: 1,
                location: "Field A".to_string(),
                sensor_type: SensorType::Temperature,
                status: SensorStatus::Active,
            });
            sensors.push(Sensor {
                id: 2,
                location: "Field B".to_string(),
                sensor_type: SensorType::Humidity,
                status: SensorStatus::Inactive,
            });
        }
        {
            let mut readings = store.readings.write().unwrap();
            readings.push(Reading {
                id: 1,
                sensor_id: 1,
                timestamp: "2025-11-01T10:00:00Z".parse().expect("valid seed timestamp"),
                value: 23.5,
            });
            readings.push(Reading {
                id: 2,
                sensor_id: 1,
                timestamp: "2025-11-01T11:00:00Z".parse().expect("valid seed timestamp"),
                value: 24.0,
            });
        }
        store
    }

    /// All sensors in insertion order
    pub fn sensors(&self) -> Vec<Sensor> {
        self.sensors.read().unwrap().clone()
    }

    /// Insert a sensor; the id is one past the last assigned, or 1 for an
    /// empty collection
    pub fn insert_sensor(
        &self,
        location: String,
        sensor_type: SensorType,
        status: SensorStatus,
    ) -> Sensor {
        let mut sensors = self.sensors.write().unwrap();
        let id = sensors.last().map_or(1, |s| s.id + 1);
        let sensor = Sensor {
            id,
            location,
            sensor_type,
            status,
        };
        sensors.push(sensor.clone());
        sensor
    }

    /// Replace a sensor's mutable fields; `None` when the id is unknown
    pub fn update_sensor(
        &self,
        id: u64,
        location: String,
        sensor_type: SensorType,
        status: SensorStatus,
    ) -> Option<Sensor> {
        let mut sensors = self.sensors.write().unwrap();
        let sensor = sensors.iter_mut().find(|s| s.id == id)?;
        sensor.location = location;
        sensor.sensor_type = sensor_type;
        sensor.status = status;
        Some(sensor.clone())
    }

    /// Remove a sensor and return it; `None` when the id is unknown
    pub fn delete_sensor(&self, id: u64) -> Option<Sensor> {
        let mut sensors = self.sensors.write().unwrap();
        let idx = sensors.iter().position(|s| s.id == id)?;
        Some(sensors.remove(idx))
    }

    /// Insert a reading for an existing sensor; `None` when the sensor
    /// does not exist (readings never reference missing sensors at
    /// creation time)
    pub fn insert_reading(
        &self,
        sensor_id: u64,
        timestamp: DateTime<Utc>,
        value: f64,
    ) -> Option<Reading> {
        if self.sensor(sensor_id).is_none() {
            return None;
        }
        let mut readings = self.readings.write().unwrap();
        let id = readings.last().map_or(1, |r| r.id + 1);
        let reading = Reading {
            id,
            sensor_id,
            timestamp,
            value,
        };
        readings.push(reading.clone());
        Some(reading)
    }

    /// Readings belonging to one sensor, insertion order
    pub fn readings_for(&self, sensor_id: u64) -> Vec<Reading> {
        self.readings
            .read()
            .unwrap()
            .iter()
            .filter(|r| r.sensor_id == sensor_id)
            .cloned()
            .collect()
    }
}

impl EntityStore for MemoryStore {
    fn sensor(&self, id: u64) -> Option<Sensor> {
        self.sensors.read().unwrap().iter().find(|s| s.id == id).cloned()
    }

    fn readings(&self) -> Vec<Reading> {
        self.readings.read().unwrap().clone()
    }
}
