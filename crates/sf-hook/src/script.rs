//! SQL hook-script loading and execution

use crate::error::{HookError, HookResult};
use crate::sink::ProgressSink;
use encoding_rs::Encoding;
use sf_core::util::horizontal_line;
use sf_core::VariableReplacer;
use sf_db::MigrationContext;
use std::collections::HashMap;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Width of the console banner announcing hook execution
const BANNER_WIDTH: usize = 80;

/// Read granularity when draining the script file
const READ_CHUNK: usize = 1024;

/// One SQL hook script: a file path, a charset, and a finalized variable
/// mapping.
///
/// The script is re-read on every [`execute`](Self::execute) call, so
/// repeated execution against an unchanged file and mapping is idempotent.
/// The variable mapping is sealed at construction: per-invocation
/// `key=value` options are merged over the caller's base variables into a
/// new owned map, later entries overriding earlier ones.
pub struct SqlHookScript {
    script_file: PathBuf,
    encoding: &'static Encoding,
    replacer: VariableReplacer,
    sink: Arc<dyn ProgressSink>,
}

impl std::fmt::Debug for SqlHookScript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqlHookScript")
            .field("script_file", &self.script_file)
            .field("encoding", &self.encoding.name())
            .field("variables", self.replacer.variables())
            .finish_non_exhaustive()
    }
}

impl SqlHookScript {
    /// Build a hook script.
    ///
    /// Fails with [`HookError::UnsupportedEncoding`] when `encoding_label`
    /// is not a registered charset. Each option containing `=` is split at
    /// the first occurrence and inserted over the base mapping; options
    /// without `=` are silently skipped.
    pub fn new(
        script_file: impl Into<PathBuf>,
        encoding_label: &str,
        options: &[String],
        base_variables: HashMap<String, String>,
        sink: Arc<dyn ProgressSink>,
    ) -> HookResult<Self> {
        let encoding = Encoding::for_label(encoding_label.as_bytes()).ok_or_else(|| {
            HookError::UnsupportedEncoding {
                label: encoding_label.to_string(),
            }
        })?;
        let variables = merge_options(base_variables, options);
        Ok(Self {
            script_file: script_file.into(),
            encoding,
            replacer: VariableReplacer::new(variables),
            sink,
        })
    }

    /// Path of the script file
    pub fn script_file(&self) -> &Path {
        &self.script_file
    }

    /// The finalized variable mapping
    pub fn variables(&self) -> &HashMap<String, String> {
        self.replacer.variables()
    }

    /// Run the script against the migration context.
    ///
    /// Emits the banner, reads and decodes the file, substitutes
    /// placeholders, and hands the result to `ctx`. I/O failures are
    /// wrapped as [`HookError::ScriptIo`]; context failures propagate
    /// unchanged. The banner is emitted before any file I/O so the
    /// operator always sees which script was attempted.
    pub fn execute(&self, ctx: &dyn MigrationContext) -> HookResult<()> {
        self.sink.line(&horizontal_line(
            &format!("Applying SQL hook: {}", self.file_name()),
            BANNER_WIDTH,
        ));

        let bytes = self.read_script()?;
        let text = self.decode(&bytes)?;
        let substituted = self.replacer.replace(&text);
        log::debug!(
            "Hook script {} prepared ({} chars) for {}",
            self.file_name(),
            substituted.len(),
            ctx.db_type()
        );
        ctx.execute_sql(&substituted)?;
        Ok(())
    }

    fn file_name(&self) -> String {
        self.script_file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.script_file.display().to_string())
    }

    /// Drain the script file in bounded chunks until end-of-stream.
    fn read_script(&self) -> HookResult<Vec<u8>> {
        let wrap = |source| HookError::ScriptIo {
            script: self.file_name(),
            source,
        };
        let mut file = File::open(&self.script_file).map_err(wrap)?;
        let mut bytes = Vec::new();
        let mut chunk = [0u8; READ_CHUNK];
        loop {
            match file.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => bytes.extend_from_slice(&chunk[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(wrap(e)),
            }
        }
        Ok(bytes)
    }

    /// Strict decode: malformed input is an error, never a replacement
    /// character reaching the database.
    fn decode(&self, bytes: &[u8]) -> HookResult<String> {
        let (text, had_errors) = self.encoding.decode_without_bom_handling(bytes);
        if had_errors {
            return Err(HookError::Decode {
                script: self.file_name(),
                encoding: self.encoding.name().to_string(),
            });
        }
        Ok(text.into_owned())
    }
}

/// Merge `key=value` option strings over a base variable mapping.
///
/// Splits each option at the first `=` (the value keeps any further `=`
/// characters); later duplicates win; options without `=` are skipped.
/// Returns a new owned map so callers can reuse their base across hooks.
fn merge_options(
    base: HashMap<String, String>,
    options: &[String],
) -> HashMap<String, String> {
    let mut variables = base;
    for option in options {
        if let Some((key, value)) = option.split_once('=') {
            variables.insert(key.to_string(), value.to_string());
        }
    }
    variables
}

#[cfg(test)]
#[path = "script_test.rs"]
mod tests;
