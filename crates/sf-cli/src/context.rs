//! Runtime context for CLI commands

use anyhow::{Context, Result};
use sf_core::{Config, ProcessEnv};
use sf_db::{DuckDbContext, MigrationContext};
use std::sync::Arc;

use crate::cli::GlobalArgs;

/// Runtime context containing the resolved configuration and the
/// migration database connection
pub struct RuntimeContext {
    /// Configuration resolved once at startup
    pub config: Config,

    /// Migration execution context
    pub db: Arc<dyn MigrationContext>,

    /// Verbose output enabled
    pub verbose: bool,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub fn new(global: &GlobalArgs) -> Result<Self> {
        let config = Config::resolve(&ProcessEnv);

        // --target wins over the db_path property; no configuration at all
        // falls back to an in-memory database.
        let db_path = global
            .target
            .clone()
            .or_else(|| config.option("db_path").map(String::from))
            .unwrap_or_else(|| ":memory:".to_string());
        let db: Arc<dyn MigrationContext> = Arc::new(
            DuckDbContext::new(&db_path)
                .with_context(|| format!("Failed to open migration database '{}'", db_path))?,
        );
        log::debug!("Opened {} database at {}", db.db_type(), db_path);

        Ok(Self {
            config,
            db,
            verbose: global.verbose,
        })
    }

    /// Print verbose output if enabled
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }
}
