//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// Schemaflow - runs SQL hook scripts against a migration database
#[derive(Parser, Debug)]
#[command(name = "sflow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the database path (default: `db_path` property, else in-memory)
    #[arg(short, long, global = true)]
    pub target: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a SQL hook script
    Run(RunArgs),

    /// Show the resolved configuration
    Info,
}

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the hook script file
    pub script: String,

    /// Charset used to decode the script file
    #[arg(short, long, default_value = "utf-8")]
    pub encoding: String,

    /// Variable override in key=value form (repeatable)
    #[arg(short = 's', long = "set")]
    pub set: Vec<String>,

    /// Trailing key=value operands, merged as overrides after --set;
    /// tokens that look like flags are skipped
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub vars: Vec<String>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
