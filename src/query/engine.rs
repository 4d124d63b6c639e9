//! # Query Engine
//!
//! Orchestrates one readings listing request: validate the raw parameters,
//! compose the filters over the store's readings, paginate the result.

use std::collections::HashMap;

use crate::store::EntityStore;

use super::errors::QueryResult;
use super::filter::ReadingFilter;
use super::page::ReadingPage;
use super::params::ReadingQuery;

/// Stateless orchestrator for the readings listing.
///
/// Every invocation is independent and idempotent given identical store
/// contents and parameters.
pub struct ReadingQueryEngine;

impl ReadingQueryEngine {
    /// Run one query.
    ///
    /// The first validation failure short-circuits: the filter composer
    /// and paginator only run on a fully valid descriptor, so no partial
    /// filtering ever happens.
    pub fn execute(
        params: &HashMap<String, String>,
        store: &dyn EntityStore,
    ) -> QueryResult<ReadingPage> {
        let query = ReadingQuery::parse(params)?;
        let filtered = ReadingFilter::apply(&query, store.readings(), store);
        Ok(ReadingPage::paginate(filtered, query.page, query.limit))
    }
}
