use super::*;
use crate::error::HookError;
use sf_db::{DbError, DbResult};
use std::sync::Mutex;

/// Context double that records every script it receives
#[derive(Default)]
struct RecordingContext {
    scripts: Mutex<Vec<String>>,
}

impl MigrationContext for RecordingContext {
    fn execute_sql(&self, script: &str) -> DbResult<()> {
        self.scripts.lock().unwrap().push(script.to_string());
        Ok(())
    }

    fn db_type(&self) -> &'static str {
        "recording"
    }
}

/// Context double that always fails
struct FailingContext;

impl MigrationContext for FailingContext {
    fn execute_sql(&self, _script: &str) -> DbResult<()> {
        Err(DbError::ExecutionError("syntax error near 'boom'".into()))
    }

    fn db_type(&self) -> &'static str {
        "failing"
    }
}

/// Sink double collecting emitted lines
#[derive(Default)]
struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl ProgressSink for MemorySink {
    fn line(&self, text: &str) {
        self.lines.lock().unwrap().push(text.to_string());
    }
}

fn opts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn write_script(dir: &tempfile::TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_options_merge_first_equals_and_last_wins() {
    let sink = Arc::new(MemorySink::default());
    let hook = SqlHookScript::new(
        "unused.sql",
        "utf-8",
        &opts(&["a=1", "b=2", "a=3"]),
        HashMap::new(),
        sink,
    )
    .unwrap();

    assert_eq!(hook.variables().get("a").map(String::as_str), Some("3"));
    assert_eq!(hook.variables().get("b").map(String::as_str), Some("2"));
}

#[test]
fn test_option_value_keeps_further_equals() {
    let sink = Arc::new(MemorySink::default());
    let hook = SqlHookScript::new(
        "unused.sql",
        "utf-8",
        &opts(&["url=host?a=b=c"]),
        HashMap::new(),
        sink,
    )
    .unwrap();

    assert_eq!(
        hook.variables().get("url").map(String::as_str),
        Some("host?a=b=c")
    );
}

#[test]
fn test_options_override_base_variables() {
    let sink = Arc::new(MemorySink::default());
    let base: HashMap<String, String> =
        [("env".to_string(), "dev".to_string())].into_iter().collect();
    let hook =
        SqlHookScript::new("unused.sql", "utf-8", &opts(&["env=prod"]), base, sink).unwrap();

    assert_eq!(hook.variables().get("env").map(String::as_str), Some("prod"));
}

#[test]
fn test_option_without_separator_is_silently_skipped() {
    let sink = Arc::new(MemorySink::default());
    let hook = SqlHookScript::new(
        "unused.sql",
        "utf-8",
        &opts(&["no-separator"]),
        HashMap::new(),
        sink,
    )
    .unwrap();

    assert!(hook.variables().is_empty());
}

#[test]
fn test_unsupported_encoding_fails_construction() {
    let sink = Arc::new(MemorySink::default());
    let err = SqlHookScript::new(
        "unused.sql",
        "not-a-charset",
        &[],
        HashMap::new(),
        sink,
    )
    .unwrap_err();

    assert!(matches!(err, HookError::UnsupportedEncoding { ref label } if label == "not-a-charset"));
}

#[test]
fn test_execute_substitutes_and_delivers() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_script(&dir, "greet.sql", b"SELECT '${greeting}';");
    let ctx = RecordingContext::default();
    let sink = Arc::new(MemorySink::default());

    let hook = SqlHookScript::new(
        &path,
        "utf-8",
        &opts(&["greeting=Hello"]),
        HashMap::new(),
        sink,
    )
    .unwrap();
    hook.execute(&ctx).unwrap();

    assert_eq!(
        ctx.scripts.lock().unwrap().as_slice(),
        ["SELECT 'Hello';"]
    );
}

#[test]
fn test_execute_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_script(&dir, "twice.sql", b"INSERT INTO t VALUES ('${v}');");
    let ctx = RecordingContext::default();
    let sink = Arc::new(MemorySink::default());

    let hook =
        SqlHookScript::new(&path, "utf-8", &opts(&["v=x"]), HashMap::new(), sink).unwrap();
    hook.execute(&ctx).unwrap();
    hook.execute(&ctx).unwrap();

    let scripts = ctx.scripts.lock().unwrap();
    assert_eq!(scripts.len(), 2);
    assert_eq!(scripts[0], scripts[1]);
}

#[test]
fn test_empty_script_still_reaches_context() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_script(&dir, "empty.sql", b"");
    let ctx = RecordingContext::default();
    let sink = Arc::new(MemorySink::default());

    let hook = SqlHookScript::new(&path, "utf-8", &[], HashMap::new(), sink).unwrap();
    hook.execute(&ctx).unwrap();

    assert_eq!(ctx.scripts.lock().unwrap().as_slice(), [""]);
}

#[test]
fn test_banner_emitted_before_any_file_io() {
    let ctx = RecordingContext::default();
    let sink = Arc::new(MemorySink::default());

    let hook = SqlHookScript::new(
        "/definitely/not/there/foo.sql",
        "utf-8",
        &[],
        HashMap::new(),
        sink.clone(),
    )
    .unwrap();
    let err = hook.execute(&ctx).unwrap_err();

    assert!(matches!(err, HookError::ScriptIo { .. }));
    // The banner still announced the attempt, and nothing reached the
    // context.
    let lines = sink.lines.lock().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].chars().count(), 80);
    assert!(lines[0].contains("Applying SQL hook: foo.sql"));
    assert!(ctx.scripts.lock().unwrap().is_empty());
}

#[test]
fn test_execution_failure_propagates_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_script(&dir, "bad.sql", b"SELECT boom;");
    let sink = Arc::new(MemorySink::default());

    let hook = SqlHookScript::new(&path, "utf-8", &[], HashMap::new(), sink).unwrap();
    let err = hook.execute(&FailingContext).unwrap_err();

    assert_eq!(
        err.to_string(),
        DbError::ExecutionError("syntax error near 'boom'".into()).to_string()
    );
}

#[test]
fn test_invalid_bytes_for_encoding_fail_decode() {
    let dir = tempfile::tempdir().unwrap();
    // 0xC3 0x28 is malformed UTF-8
    let path = write_script(&dir, "garbled.sql", b"SELECT '\xC3\x28';");
    let ctx = RecordingContext::default();
    let sink = Arc::new(MemorySink::default());

    let hook = SqlHookScript::new(&path, "utf-8", &[], HashMap::new(), sink).unwrap();
    let err = hook.execute(&ctx).unwrap_err();

    assert!(matches!(err, HookError::Decode { .. }));
    assert!(ctx.scripts.lock().unwrap().is_empty());
}

#[test]
fn test_hook_runs_against_duckdb() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_script(
        &dir,
        "audit.sql",
        b"CREATE TABLE ${table} (id INT);\nINSERT INTO ${table} VALUES (1);",
    );
    let db = sf_db::DuckDbContext::in_memory().unwrap();
    let sink = Arc::new(MemorySink::default());

    let hook = SqlHookScript::new(
        &path,
        "utf-8",
        &opts(&["table=audit_log"]),
        HashMap::new(),
        sink,
    )
    .unwrap();
    hook.execute(&db).unwrap();

    assert_eq!(db.query_count("SELECT * FROM audit_log").unwrap(), 1);
}

#[test]
fn test_non_utf8_encoding_decodes() {
    let dir = tempfile::tempdir().unwrap();
    // "café" in windows-1252: e9 is é
    let path = write_script(&dir, "latin.sql", b"SELECT 'caf\xE9';");
    let ctx = RecordingContext::default();
    let sink = Arc::new(MemorySink::default());

    let hook =
        SqlHookScript::new(&path, "windows-1252", &[], HashMap::new(), sink).unwrap();
    hook.execute(&ctx).unwrap();

    assert_eq!(
        ctx.scripts.lock().unwrap().as_slice(),
        ["SELECT 'café';"]
    );
}
