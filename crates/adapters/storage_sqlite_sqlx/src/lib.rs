//! # scurry-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port defined in `scurry-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//! - Provide the file-backed [`FileStringStore`](string_store::FileStringStore)
//!   string-list helper
//!
//! ## Dependency rule
//! Depends on `scurry-app` (for the port trait) and `scurry-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod error;
pub mod pool;
pub mod squirrel_repo;
pub mod string_store;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use squirrel_repo::SqliteSquirrelRepository;
pub use string_store::FileStringStore;
