//! Error types for the pagestore crate
//!
//! This module contains all error types that can be returned by pagination operations.

use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PagestoreError {
    #[error("Invalid page limit: {0} (must be greater than zero)")]
    InvalidLimit(u32),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Invalid sort expression: {0}")]
    InvalidSort(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
