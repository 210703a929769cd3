//! DuckDB-backed migration context

use crate::context::MigrationContext;
use crate::error::{DbError, DbResult};
use crate::script::{split_statements, DEFAULT_DELIMITER};
use duckdb::Connection;
use std::path::Path;
use std::sync::Mutex;

/// Migration context over a DuckDB connection
pub struct DuckDbContext {
    conn: Mutex<Connection>,
}

impl DuckDbContext {
    /// Open an in-memory database
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open a database file
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path).map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open from a path string (handles the `:memory:` special case)
    pub fn new(path: &str) -> DbResult<Self> {
        if path == ":memory:" {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(path))
        }
    }

    /// Query a single count, for verification in tests and commands
    pub fn query_count(&self, sql: &str) -> DbResult<usize> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn
            .query_row(&format!("SELECT COUNT(*) FROM ({})", sql), [], |row| {
                row.get(0)
            })
            .map_err(|e| DbError::ExecutionError(e.to_string()))?;
        Ok(count as usize)
    }
}

impl MigrationContext for DuckDbContext {
    fn execute_sql(&self, script: &str) -> DbResult<()> {
        let statements = split_statements(script, DEFAULT_DELIMITER);
        log::debug!("Executing {} statement(s)", statements.len());
        let conn = self.conn.lock().unwrap();
        for statement in &statements {
            conn.execute_batch(statement)
                .map_err(|e| DbError::ExecutionError(format!("{}: {}", e, statement)))?;
        }
        Ok(())
    }

    fn db_type(&self) -> &'static str {
        "duckdb"
    }
}
