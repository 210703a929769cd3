//! Info command implementation

use anyhow::Result;
use sf_core::util::horizontal_line;
use sf_core::{Config, ProcessEnv};

use crate::cli::GlobalArgs;

/// Execute the info command
pub fn execute(global: &GlobalArgs) -> Result<()> {
    let config = Config::resolve(&ProcessEnv);

    println!("{}", horizontal_line("Schemaflow configuration", 80));
    match config.migrations_home() {
        Some(home) => println!("Migrations home: {}", home.display()),
        None => println!("Migrations home: (not set)"),
    }

    if config.properties().is_empty() {
        println!("migration.properties: (no entries)");
        return Ok(());
    }

    println!("migration.properties:");
    let mut entries: Vec<(&str, &str)> = config.properties().iter().collect();
    entries.sort();
    for (key, value) in entries {
        if global.verbose || !key.to_ascii_lowercase().contains("password") {
            println!("  {} = {}", key, value);
        } else {
            println!("  {} = ********", key);
        }
    }
    Ok(())
}
