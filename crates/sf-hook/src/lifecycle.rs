//! Lifecycle bundle of hook scripts for one migration operation
//!
//! A migration step can carry up to four hooks: one before the whole
//! operation, one before each script, one after each script, and one after
//! the whole operation. Absent hooks are no-ops.

use crate::error::HookResult;
use crate::script::SqlHookScript;
use sf_db::MigrationContext;

/// Hook scripts attached to a migration operation
#[derive(Default)]
pub struct MigrationHook {
    before: Option<SqlHookScript>,
    before_each: Option<SqlHookScript>,
    after_each: Option<SqlHookScript>,
    after: Option<SqlHookScript>,
}

impl MigrationHook {
    /// Attach the before-operation hook
    pub fn with_before(mut self, script: SqlHookScript) -> Self {
        self.before = Some(script);
        self
    }

    /// Attach the before-each-script hook
    pub fn with_before_each(mut self, script: SqlHookScript) -> Self {
        self.before_each = Some(script);
        self
    }

    /// Attach the after-each-script hook
    pub fn with_after_each(mut self, script: SqlHookScript) -> Self {
        self.after_each = Some(script);
        self
    }

    /// Attach the after-operation hook
    pub fn with_after(mut self, script: SqlHookScript) -> Self {
        self.after = Some(script);
        self
    }

    /// Run the before-operation hook, if any
    pub fn before(&self, ctx: &dyn MigrationContext) -> HookResult<()> {
        run(&self.before, ctx)
    }

    /// Run the before-each-script hook, if any
    pub fn before_each(&self, ctx: &dyn MigrationContext) -> HookResult<()> {
        run(&self.before_each, ctx)
    }

    /// Run the after-each-script hook, if any
    pub fn after_each(&self, ctx: &dyn MigrationContext) -> HookResult<()> {
        run(&self.after_each, ctx)
    }

    /// Run the after-operation hook, if any
    pub fn after(&self, ctx: &dyn MigrationContext) -> HookResult<()> {
        run(&self.after, ctx)
    }
}

fn run(script: &Option<SqlHookScript>, ctx: &dyn MigrationContext) -> HookResult<()> {
    match script {
        Some(script) => script.execute(ctx),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::ProgressSink;
    use sf_db::DbResult;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

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

    struct NullSink;

    impl ProgressSink for NullSink {
        fn line(&self, _text: &str) {}
    }

    fn script(dir: &tempfile::TempDir, name: &str, content: &str) -> SqlHookScript {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        SqlHookScript::new(path, "utf-8", &[], HashMap::new(), Arc::new(NullSink)).unwrap()
    }

    #[test]
    fn test_empty_bundle_is_a_no_op() {
        let ctx = RecordingContext::default();
        let hook = MigrationHook::default();

        hook.before(&ctx).unwrap();
        hook.before_each(&ctx).unwrap();
        hook.after_each(&ctx).unwrap();
        hook.after(&ctx).unwrap();

        assert!(ctx.scripts.lock().unwrap().is_empty());
    }

    #[test]
    fn test_attached_hooks_run_at_their_points() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = RecordingContext::default();
        let hook = MigrationHook::default()
            .with_before(script(&dir, "before.sql", "SELECT 'before';"))
            .with_after(script(&dir, "after.sql", "SELECT 'after';"));

        hook.before(&ctx).unwrap();
        hook.before_each(&ctx).unwrap();
        hook.after(&ctx).unwrap();

        assert_eq!(
            ctx.scripts.lock().unwrap().as_slice(),
            ["SELECT 'before';", "SELECT 'after';"]
        );
    }
}
