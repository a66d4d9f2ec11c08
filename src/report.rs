//! Reporting over verdict sequences.
//!
//! Everything here is a derived view: tables, host groups, and the summary
//! are computed from the verdicts the engine produced, never recounted from
//! the input files.

use std::collections::HashMap;
use std::fmt::Write;

use serde::Serialize;

use crate::matcher::Target;
use crate::types::{Reason, ScopeMode, Summary, Verdict};

const RULE_WIDTH: usize = 80;

/// Removed URLs grouped by host, in order of first appearance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostGroup {
    pub host: String,
    pub removed: usize,
    /// Reason of the first removed URL seen for this host
    pub reason: Reason,
    /// Pattern credited on that first removal
    pub matched_pattern: String,
}

/// Totals for a verdict sequence
pub fn summarize(verdicts: &[Verdict]) -> Summary {
    let removed = verdicts.iter().filter(|v| !v.kept).count();
    Summary {
        total: verdicts.len(),
        removed,
        kept: verdicts.len() - removed,
    }
}

/// Group removed URL verdicts by host.
///
/// Keyed on the parsed host; a removed URL with no parsable host groups
/// under its own full text. First-seen reason and pattern stick for the
/// whole group.
pub fn group_removed_by_host(verdicts: &[Verdict]) -> Vec<HostGroup> {
    let mut groups: Vec<HostGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for verdict in verdicts.iter().filter(|v| !v.kept) {
        let target = Target::url(&verdict.candidate);
        let host = if target.host.is_empty() {
            verdict.candidate.clone()
        } else {
            target.host
        };

        match index.get(&host) {
            Some(&i) => groups[i].removed += 1,
            None => {
                index.insert(host.clone(), groups.len());
                groups.push(HostGroup {
                    host,
                    removed: 1,
                    reason: verdict.reason,
                    matched_pattern: verdict.matched_pattern.clone().unwrap_or_default(),
                });
            }
        }
    }

    groups
}

/// Table of removed subdomains
pub fn render_subdomain_report(verdicts: &[Verdict]) -> String {
    let removed: Vec<&Verdict> = verdicts.iter().filter(|v| !v.kept).collect();
    if removed.is_empty() {
        return "\nNo subdomains were removed.\n".to_string();
    }

    let mut out = String::new();
    out.push_str("\nRemoved Subdomains:\n");
    rule(&mut out);
    let _ = writeln!(
        out,
        "{:<40} {:<22} {:<17}",
        "Subdomain", "Reason", "Matched Pattern"
    );
    rule(&mut out);
    for v in removed {
        let _ = writeln!(
            out,
            "{:<40} {:<22} {:<17}",
            v.candidate,
            v.reason.label(),
            v.matched_pattern.as_deref().unwrap_or("")
        );
    }
    rule(&mut out);
    out
}

/// Table of hosts whose URLs were removed
pub fn render_url_report(verdicts: &[Verdict]) -> String {
    let groups = group_removed_by_host(verdicts);
    if groups.is_empty() {
        return "\nNo URLs were removed.\n".to_string();
    }

    let mut out = String::new();
    out.push_str("\nDomains with Removed URLs:\n");
    rule(&mut out);
    let _ = writeln!(
        out,
        "{:<30} {:<13} {:<22} {:<13}",
        "Domain", "URLs Removed", "Reason", "Matched Pattern"
    );
    rule(&mut out);
    for g in &groups {
        let _ = writeln!(
            out,
            "{:<30} {:<13} {:<22} {:<13}",
            g.host,
            g.removed,
            g.reason.label(),
            g.matched_pattern
        );
    }
    rule(&mut out);
    out
}

/// Run summary block
pub fn render_summary(summary: &Summary) -> String {
    format!(
        "\nSummary:\nTotal items: {}\nOut of scope removed: {}\nIn scope items: {}\n",
        summary.total, summary.removed, summary.kept
    )
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: Summary,
    removed: Vec<&'a Verdict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hosts: Option<Vec<HostGroup>>,
}

/// Machine-readable report: summary plus removed verdicts, with the host
/// grouping included in URL mode.
pub fn render_json(verdicts: &[Verdict], mode: ScopeMode) -> serde_json::Result<String> {
    let report = JsonReport {
        summary: summarize(verdicts),
        removed: verdicts.iter().filter(|v| !v.kept).collect(),
        hosts: match mode {
            ScopeMode::Url => Some(group_removed_by_host(verdicts)),
            ScopeMode::Subdomain => None,
        },
    };
    serde_json::to_string_pretty(&report)
}

fn rule(out: &mut String) {
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');
}
