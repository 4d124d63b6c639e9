//! # Parameter Validator
//!
//! Parses raw listing query parameters into a typed descriptor. The
//! validation order is fixed (page, limit, type, minValue, maxValue, the
//! min/max cross-check, from, to): when several parameters are invalid,
//! exactly the first failure in that order is reported.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::store::SensorType;

use super::errors::{QueryError, QueryResult};

/// Page number used when `page` is absent
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when `limit` is absent
pub const DEFAULT_LIMIT: usize = 10;

/// Maximum page size
pub const MAX_LIMIT: usize = 100;

/// Validated listing request
///
/// Built per request by [`ReadingQuery::parse`], consumed by the filter
/// composer and paginator, then discarded. Absent optional parameters stay
/// `None`; no downstream component ever sees a raw string.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingQuery {
    /// 1-based page number
    pub page: usize,

    /// Page size, in [1, 100]
    pub limit: usize,

    /// Restrict to readings whose sensor has this type
    pub sensor_type: Option<SensorType>,

    /// Inclusive lower bound on the reading value
    pub min_value: Option<f64>,

    /// Inclusive upper bound on the reading value
    pub max_value: Option<f64>,

    /// Inclusive lower bound on the reading timestamp
    pub from: Option<DateTime<Utc>>,

    /// Inclusive upper bound on the reading timestamp
    pub to: Option<DateTime<Utc>>,
}

impl ReadingQuery {
    /// Parse and validate raw query parameters
    pub fn parse(params: &HashMap<String, String>) -> QueryResult<Self> {
        let page = match params.get("page") {
            Some(raw) => parse_page(raw)?,
            None => DEFAULT_PAGE,
        };

        let limit = match params.get("limit") {
            Some(raw) => parse_limit(raw)?,
            None => DEFAULT_LIMIT,
        };

        let sensor_type = match params.get("type") {
            Some(raw) => Some(SensorType::parse(raw).ok_or(QueryError::InvalidType)?),
            None => None,
        };

        let min_value = match params.get("minValue") {
            Some(raw) => Some(parse_number(raw).ok_or(QueryError::InvalidMinValue)?),
            None => None,
        };

        let max_value = match params.get("maxValue") {
            Some(raw) => Some(parse_number(raw).ok_or(QueryError::InvalidMaxValue)?),
            None => None,
        };

        if let (Some(min), Some(max)) = (min_value, max_value) {
            if min > max {
                return Err(QueryError::InvalidRange);
            }
        }

        let from = match params.get("from") {
            Some(raw) => Some(parse_instant(raw).ok_or(QueryError::InvalidFromDate)?),
            None => None,
        };

        let to = match params.get("to") {
            Some(raw) => Some(parse_instant(raw).ok_or(QueryError::InvalidToDate)?),
            None => None,
        };

        Ok(Self {
            page,
            limit,
            sensor_type,
            min_value,
            max_value,
            from,
            to,
        })
    }
}

fn parse_page(raw: &str) -> QueryResult<usize> {
    match raw.trim().parse::<usize>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(QueryError::InvalidPage),
    }
}

fn parse_limit(raw: &str) -> QueryResult<usize> {
    match raw.trim().parse::<usize>() {
        Ok(limit) if (1..=MAX_LIMIT).contains(&limit) => Ok(limit),
        _ => Err(QueryError::InvalidLimit),
    }
}

/// Total number parse. `f64::from_str` accepts "NaN"; a NaN bound would
/// make every comparison false, so it is rejected as not-a-number here.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// RFC 3339 instant, or a bare `YYYY-MM-DD` date taken as midnight UTC
fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}
