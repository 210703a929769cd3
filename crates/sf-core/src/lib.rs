//! sf-core - Core library for Schemaflow
//!
//! This crate provides configuration resolution (migrations-home and the
//! `migration.properties` file), the placeholder replacer applied to hook
//! scripts before execution, and small formatting/classification utilities
//! shared across the Schemaflow crates.

pub mod config;
pub mod error;
pub mod util;
pub mod variables;

pub use config::{migrations_home, Config, Lookup, ProcessEnv, Properties};
pub use error::{CoreError, CoreResult};
pub use variables::VariableReplacer;
