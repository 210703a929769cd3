//! sf-db - Execution-context layer for Schemaflow
//!
//! Defines the [`MigrationContext`] capability that accepts prepared SQL
//! text and runs it against the live migration connection, the statement
//! splitter that handles delimiters on its behalf, and a DuckDB-backed
//! implementation.

pub mod context;
pub mod duckdb;
pub mod error;
pub mod script;

pub use context::MigrationContext;
pub use duckdb::DuckDbContext;
pub use error::{DbError, DbResult};
pub use script::{split_statements, DEFAULT_DELIMITER};
