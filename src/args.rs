//! Command-line argument parsing

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// outscope - out-of-scope filter for subdomain and URL lists
///
/// Processes a list of subdomains or URLs, removing entries that match
/// out-of-scope domains (exact or wildcard) or URL patterns (in URL mode).
/// Run without --urls for subdomain mode, or with --urls for URL mode.
#[derive(Parser, Debug)]
#[command(name = "outscope")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input file containing subdomains or URLs, one per line
    #[arg(short = 'i', long, value_name = "FILE")]
    pub input: PathBuf,

    /// File with out-of-scope domains or URL patterns,
    /// e.g. *.example.com or https://example.com/private/*
    #[arg(short = 's', long, value_name = "FILE")]
    pub outscope: PathBuf,

    /// Output file for in-scope entries
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: PathBuf,

    /// Process URLs instead of subdomains; removes URLs matching
    /// out-of-scope domains or URL patterns
    #[arg(long)]
    pub urls: bool,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Decision cache capacity
    #[arg(long, value_name = "N", default_value_t = outscope::DEFAULT_CACHE_SIZE)]
    pub cache_size: usize,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Report output format
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
}
