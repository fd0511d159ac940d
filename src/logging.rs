//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout carries only rendered tables.
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit `EnvFilter` directive.
pub const LOG_ENV: &str = "MI_LOG";

/// Install the global fmt subscriber. Call once, before any command runs.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "info"
    } else {
        "warn"
    }
}
