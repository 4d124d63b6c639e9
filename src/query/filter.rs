//! # Filter Composer
//!
//! Conjunctive predicate evaluation over readings. Absent predicates do
//! not filter; present predicates are ANDed, never ORed. The type
//! predicate joins to the sensor collection through the store's lookup.

use crate::store::{EntityStore, Reading};

use super::params::ReadingQuery;

/// Evaluates a validated query's predicates against readings
pub struct ReadingFilter;

impl ReadingFilter {
    /// The ordered subsequence of `readings` matching every present
    /// predicate
    pub fn apply(
        query: &ReadingQuery,
        readings: Vec<Reading>,
        store: &dyn EntityStore,
    ) -> Vec<Reading> {
        readings
            .into_iter()
            .filter(|r| Self::matches(query, r, store))
            .collect()
    }

    /// Whether one reading satisfies every present predicate
    pub fn matches(query: &ReadingQuery, reading: &Reading, store: &dyn EntityStore) -> bool {
        if let Some(wanted) = query.sensor_type {
            // Join failure = no match, not an error
            match store.sensor(reading.sensor_id) {
                Some(sensor) if sensor.sensor_type == wanted => {}
                _ => return false,
            }
        }

        if let Some(min) = query.min_value {
            if reading.value < min {
                return false;
            }
        }

        if let Some(max) = query.max_value {
            if reading.value > max {
                return false;
            }
        }

        if let Some(from) = query.from {
            if reading.timestamp < from {
                return false;
            }
        }

        if let Some(to) = query.to {
            if reading.timestamp > to {
                return false;
            }
        }

        true
    }
}
