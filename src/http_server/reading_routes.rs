//! Reading HTTP Routes
//!
//! The filtered, paginated readings listing. The handler is a thin shim:
//! the raw query parameters and the store go straight to the query engine,
//! and whatever it returns (page or classified error) maps to the wire.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::query::{ReadingPage, ReadingQueryEngine};
use crate::store::MemoryStore;

use super::errors::ApiError;

/// Create reading routes
pub fn reading_routes(store: Arc<MemoryStore>) -> Router {
    Router::new()
        .route("/readings", get(list_readings_handler))
        .with_state(store)
}

async fn list_readings_handler(
    State(store): State<Arc<MemoryStore>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ReadingPage>, ApiError> {
    let page = ReadingQueryEngine::execute(&params, store.as_ref())?;
    Ok(Json(page))
}
