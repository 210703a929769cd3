//! Migration context trait definition

use crate::error::DbResult;

/// Capability that runs prepared SQL text against the live migration
/// connection.
///
/// The context owns the connection and the statement-delimiter convention;
/// callers hand over raw script text and never see the connection itself.
/// Implementations must be Send + Sync so a context can be shared behind
/// `Arc<dyn MigrationContext>`.
pub trait MigrationContext: Send + Sync {
    /// Execute a SQL script, splitting it into statements as needed.
    fn execute_sql(&self, script: &str) -> DbResult<()>;

    /// Backend identifier for logging
    fn db_type(&self) -> &'static str;
}
