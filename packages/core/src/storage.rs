// ABOUTME: Storage error types shared by all storage modules
// ABOUTME: Maps IO, migration, and database failures into one enum

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("task date {0} is in the future")]
    FutureDate(DateTime<Utc>),
}

pub type StorageResult<T> = Result<T, StorageError>;
