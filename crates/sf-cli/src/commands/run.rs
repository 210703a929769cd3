//! Run command implementation

use anyhow::{Context, Result};
use sf_core::util::is_option;
use sf_hook::{ConsoleSink, SqlHookScript};
use std::collections::HashMap;
use std::sync::Arc;

use crate::cli::{GlobalArgs, RunArgs};
use crate::context::RuntimeContext;

/// Execute the run command
pub fn execute(args: &RunArgs, global: &GlobalArgs) -> Result<()> {
    let ctx = RuntimeContext::new(global)?;

    // Base variables come from migration.properties; --set values and
    // trailing key=value operands are layered over them in that order.
    let base: HashMap<String, String> = ctx
        .config
        .properties()
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    let mut options = args.set.clone();
    options.extend(args.vars.iter().filter(|v| !is_option(v)).cloned());

    ctx.verbose(&format!(
        "Preparing {} ({} override(s), encoding {})",
        args.script,
        options.len(),
        args.encoding
    ));

    let hook = SqlHookScript::new(
        &args.script,
        &args.encoding,
        &options,
        base,
        Arc::new(ConsoleSink),
    )
    .context("Failed to prepare hook script")?;

    hook.execute(ctx.db.as_ref())
        .with_context(|| format!("Hook script failed: {}", args.script))?;

    println!("Hook script applied: {}", args.script);
    Ok(())
}
