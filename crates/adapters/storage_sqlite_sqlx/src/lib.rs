//! # reportdesk-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `reportdesk-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and joined database rows
//!
//! ## Dependency rule
//! Depends on `reportdesk-app` (for port traits) and `reportdesk-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod pool;
mod report_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use report_repo::SqliteReportRepository;
