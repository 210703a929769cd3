//! sf-hook - Hook-script layer for Schemaflow
//!
//! A hook script is a SQL file run automatically at a defined point in a
//! migration step's lifecycle. This crate loads one script, merges
//! invocation-time `key=value` options into its variable mapping, decodes
//! the file with a configured charset, substitutes `${name}` placeholders,
//! and hands the result to a [`sf_db::MigrationContext`].

pub mod error;
pub mod lifecycle;
pub mod script;
pub mod sink;

pub use error::{HookError, HookResult};
pub use lifecycle::MigrationHook;
pub use script::SqlHookScript;
pub use sink::{ConsoleSink, ProgressSink};
