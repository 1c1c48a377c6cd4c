use thiserror::Error;

use crate::scope::ScopeError;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Invalid table name: {0}")]
    InvalidTableName(String),

    #[error("Invalid column name: {0}")]
    InvalidColumn(String),

    #[error("Too many additional filters: {count} exceeds limit of {max}")]
    TooManyFilters { count: usize, max: usize },

    #[error(transparent)]
    Scope(#[from] ScopeError),
}
