//! Logging initialization

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::args::Args;

/// Initialize logging based on CLI arguments.
///
/// Logs go to stderr; stdout carries the report and nothing else.
pub fn init(args: &Args) {
    let level = if args.quiet {
        Level::ERROR
    } else {
        match args.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(args.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();
}
