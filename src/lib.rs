//! outscope - an out-of-scope filter for subdomain and URL lists
//!
//! This library removes entries that match out-of-scope patterns from recon
//! lists, with support for:
//! - Exact matching (subdomains and whole URLs)
//! - Anchored wildcard matching (`*.example.com`, `https://example.com/private/*`)
//! - Host-level matching of URLs against bare-domain patterns
//! - Per-candidate verdicts crediting the pattern that removed each entry
//! - Removal reports grouped by host in URL mode
//!
//! # Example
//!
//! ```rust
//! use outscope::{evaluate, Reason, ScopeMode};
//!
//! let candidates: Vec<String> = [
//!     "sub1.example.com",
//!     "sub2.example.com",
//!     "test.example.org",
//! ]
//! .into_iter()
//! .map(String::from)
//! .collect();
//!
//! let patterns: Vec<String> = ["*.example.com", "test.com"]
//!     .into_iter()
//!     .map(String::from)
//!     .collect();
//!
//! let verdicts = evaluate(&candidates, &patterns, ScopeMode::Subdomain);
//!
//! let kept: Vec<&str> = verdicts
//!     .iter()
//!     .filter(|v| v.kept)
//!     .map(|v| v.candidate.as_str())
//!     .collect();
//! assert_eq!(kept, ["test.example.org"]);
//!
//! assert_eq!(verdicts[0].reason, Reason::WildcardMatch);
//! assert_eq!(verdicts[0].matched_pattern.as_deref(), Some("*.example.com"));
//! ```
//!
//! # Pattern Syntax
//!
//! Patterns are evaluated in list order; the first match wins and is
//! credited in the verdict.
//!
//! | Pattern | Mode | Matches |
//! |---------|------|---------|
//! | `admin.example.com` | subdomain | exactly that subdomain |
//! | `*.example.com` | subdomain | any subdomain under example.com, not example.com itself |
//! | `test.com` | url | any URL whose host is test.com, regardless of scheme or path |
//! | `*.example.com` | url | any URL whose host wildcard-matches, regardless of path |
//! | `https://example.com/login` | url | exactly that URL |
//! | `https://example.com/private/*` | url | that scheme+host with any path under /private/ |
//!
//! `*` matches zero or more characters at its position, anchored to the full
//! string. It never degrades into a substring search.

pub mod engine;
pub mod error;
pub mod matcher;
pub mod output;
pub mod parser;
pub mod report;
pub mod types;

// Re-export commonly used items
pub use engine::{evaluate, CompiledPattern, ScopeFilter, DEFAULT_CACHE_SIZE};
pub use error::{Result, ScopeError};
pub use report::{group_removed_by_host, summarize, HostGroup};
pub use types::{Reason, ScopeMode, Summary, Verdict};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow() {
        let candidates = parser::parse_list(
            "
sub1.example.com
sub2.example.com

test.example.org
admin.test.com
",
        );
        let patterns = parser::parse_list("*.example.com\nadmin.test.com\n");

        let filter = ScopeFilter::new(&patterns, ScopeMode::Subdomain);
        assert_eq!(filter.pattern_count(), 2);

        let verdicts = filter.evaluate(&candidates);
        assert_eq!(verdicts.len(), 4);

        // sub1/sub2 fall to the wildcard
        assert_eq!(verdicts[0].reason, Reason::WildcardMatch);
        assert_eq!(verdicts[1].reason, Reason::WildcardMatch);

        // test.example.org survives
        assert!(verdicts[2].kept);

        // admin.test.com is named outright
        assert_eq!(verdicts[3].reason, Reason::ExactMatch);
        assert_eq!(
            verdicts[3].matched_pattern.as_deref(),
            Some("admin.test.com")
        );

        let summary = summarize(&verdicts);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.removed, 3);
        assert_eq!(summary.kept, 1);

        assert_eq!(output::kept_items(&verdicts), ["test.example.org"]);
    }
}
