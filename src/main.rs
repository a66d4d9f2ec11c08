//! outscope CLI
//!
//! Filters out-of-scope subdomains or URLs from a list and reports what was
//! removed, why, and by which pattern.

mod args;
mod logging;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};

use outscope::{output, parser, report, ScopeFilter, ScopeMode};

use args::{Args, ReportFormat};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(&args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let candidates = parser::read_list(&args.input).context("failed to load input list")?;
    let patterns = parser::read_list(&args.outscope).context("failed to load out-of-scope list")?;

    let mode = if args.urls {
        ScopeMode::Url
    } else {
        ScopeMode::Subdomain
    };
    debug!(
        candidates = candidates.len(),
        patterns = patterns.len(),
        ?mode,
        "starting run"
    );

    let filter = ScopeFilter::with_cache_size(&patterns, mode, args.cache_size);
    let verdicts = filter.evaluate(&candidates);

    match args.format {
        ReportFormat::Text => {
            let table = match mode {
                ScopeMode::Subdomain => report::render_subdomain_report(&verdicts),
                ScopeMode::Url => report::render_url_report(&verdicts),
            };
            print!("{}", table);
        }
        ReportFormat::Json => {
            let json =
                report::render_json(&verdicts, mode).context("failed to serialize report")?;
            println!("{}", json);
        }
    }

    output::write_kept(&args.output, &verdicts)?;

    if args.format == ReportFormat::Text {
        println!("\nResults saved to {}", args.output.display());
        print!("{}", report::render_summary(&report::summarize(&verdicts)));
    }

    Ok(())
}
