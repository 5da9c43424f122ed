//! Database layer for the user data server
//!
//! Both dialects implement the same backend traits with their own SQL.
//!
//! # Architecture
//!
//! ```text
//! backend traits (UserBackend, TodoBackend)
//!     ↓
//! Database-specific implementations
//!     ├── postgres/ (PostgreSQL-specific code)
//!     └── sqlite/   (SQLite-specific code)
//! ```

pub mod config;
pub mod postgres;
pub mod sqlite;

pub use config::DatabaseBackendConfig;

pub use postgres::PostgresBackend;
pub use sqlite::SqliteBackend;
