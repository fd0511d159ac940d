//! CLI argument parsing for management entity lookups.
//!
//! The command tree is plain clap derive data; `main` builds it once via
//! `RootArgs::parse()` and routes on the resulting enum.
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "mi",
    version,
    about = "Inspect entities exposed by a management REST API",
    after_help = "Examples:\n  mi show sequence -n TestSequence\n  mi --url https://localhost:9164/management/ show sequence --name TestSequence",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Connection and diagnostics flags shared by every command.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Management API base URL (overrides MI_MANAGEMENT_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub url: Option<String>,

    /// Access token sent as a bearer Authorization header
    #[arg(long, global = true, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Path to a JSON config file (overrides MI_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log request URLs and response statuses to stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

/// Top-level command groups.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get information about a management entity
    #[command(subcommand)]
    Show(ShowCommand),
}

/// Entities reachable under `show`.
#[derive(Subcommand, Debug)]
pub enum ShowCommand {
    Sequence(SequenceArgs),
}

/// Show sequence command inputs.
#[derive(Parser, Debug)]
#[command(
    about = "Get information about the specified Sequence",
    long_about = "Get information about the Sequence specified by the flag --name, -n",
    after_help = "Example:\n  mi show sequence -n TestSequence"
)]
pub struct SequenceArgs {
    /// Name of the Sequence
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: String,
}
