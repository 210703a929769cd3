//! Error types for sf-hook

use sf_db::DbError;
use thiserror::Error;

/// Hook-script errors
#[derive(Error, Debug)]
pub enum HookError {
    /// Script file could not be opened or fully read (H001)
    #[error("[H001] Error occurred while running SQL hook script '{script}': {source}")]
    ScriptIo {
        script: String,
        source: std::io::Error,
    },

    /// Encoding label is not a registered charset (H002)
    #[error("[H002] Unsupported encoding '{label}'")]
    UnsupportedEncoding { label: String },

    /// Script bytes are not valid for the configured charset (H003)
    #[error("[H003] Script '{script}' is not valid {encoding} text")]
    Decode { script: String, encoding: String },

    /// SQL execution failure, propagated verbatim from the context
    #[error(transparent)]
    Execution(#[from] DbError),
}

/// Result type alias for HookError
pub type HookResult<T> = Result<T, HookError>;
