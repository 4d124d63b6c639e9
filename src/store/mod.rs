//! # Entity Store
//!
//! In-memory sensor and reading collections. The query engine consumes the
//! store through the read-only [`EntityStore`] trait; the HTTP handlers
//! mutate it through [`MemoryStore`]'s CRUD methods.

pub mod entities;
pub mod memory;

pub use entities::{Reading, Sensor, SensorStatus, SensorType};
pub use memory::{EntityStore, MemoryStore};
