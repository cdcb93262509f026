//! Storage crate: append-only persistence of user activity logs.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – LogRecord
//! - [`log_repo`] – LogRepository (SQLite, insert-only)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod log_repo;
mod models;
mod sqlite_pool;


pub use error::StorageError;
pub use log_repo::LogRepository;
pub use models::LogRecord;
pub use sqlite_pool::SqlitePoolManager;
