//! # Query Errors
//!
//! Classified validation failures for the readings query engine. Every
//! variant is a caller-input error; the engine reports exactly the first
//! one encountered and never aggregates. Transport mapping lives in the
//! HTTP layer, not here.

use thiserror::Error;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Validation failures for the readings listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    /// `page` is not an integer >= 1
    #[error("page must be an integer >= 1")]
    InvalidPage,

    /// `limit` is not an integer in [1, 100]
    #[error("limit must be between 1 and 100")]
    InvalidLimit,

    /// `type` is outside the sensor type enum
    #[error("Invalid type: must be one of temperature, humidity, or moisture")]
    InvalidType,

    /// `minValue` is not a number
    #[error("minValue must be a number")]
    InvalidMinValue,

    /// `maxValue` is not a number
    #[error("maxValue must be a number")]
    InvalidMaxValue,

    /// Both bounds present with `minValue > maxValue`
    #[error("minValue cannot exceed maxValue")]
    InvalidRange,

    /// `from` is not a parseable instant
    #[error("Invalid date format for 'from'")]
    InvalidFromDate,

    /// `to` is not a parseable instant
    #[error("Invalid date format for 'to'")]
    InvalidToDate,
}

impl QueryError {
    /// Machine-readable error kind
    pub fn kind(&self) -> &'static str {
        match self {
            QueryError::InvalidPage => "invalid_page",
            QueryError::InvalidLimit => "invalid_limit",
            QueryError::InvalidType => "invalid_type",
            QueryError::InvalidMinValue => "invalid_min_value",
            QueryError::InvalidMaxValue => "invalid_max_value",
            QueryError::InvalidRange => "invalid_range",
            QueryError::InvalidFromDate => "invalid_from_date",
            QueryError::InvalidToDate => "invalid_to_date",
        }
    }
}
