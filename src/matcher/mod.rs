pub mod wildcard;

mod domain;
mod url_pattern;

pub use domain::{DomainMatchMode, DomainMatcher};
pub use url_pattern::{UrlMatchMode, UrlMatcher};

use url::Url;

/// A candidate prepared for matching.
///
/// Preparation fixes the two comparison axes up front: the whole-string text
/// and the host component. Mode-specific case handling happens here, not in
/// the matchers.
#[derive(Debug, Clone)]
pub struct Target {
    /// Original trimmed text, as it appears in the verdict
    pub raw: String,
    /// Text used for whole-string comparison
    pub text: String,
    /// Host component used for domain comparison; empty when a URL has no
    /// parsable host
    pub host: String,
}

impl Target {
    /// Prepare a bare subdomain. The whole candidate doubles as the host and
    /// is compared as written.
    pub fn subdomain(raw: &str) -> Self {
        let raw = raw.trim().to_string();
        Self {
            text: raw.clone(),
            host: raw.clone(),
            raw,
        }
    }

    /// Prepare a full URL. The host comes from the `url` crate, lower-cased;
    /// the whole string is lower-cased for one-unit comparison. A candidate
    /// that does not parse keeps an empty host and can still be removed by a
    /// full-URL pattern comparing literally.
    pub fn url(raw: &str) -> Self {
        let raw = raw.trim().to_string();
        let text = raw.to_lowercase();
        let host = Url::parse(&raw)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_lowercase()))
            .unwrap_or_default();
        Self { raw, text, host }
    }
}

/// Trait for scope pattern matchers
pub trait PatternMatcher {
    /// Check if the prepared candidate matches this pattern
    fn matches(&self, target: &Target) -> bool;
}

/// Enum wrapper for all matcher types
#[derive(Debug, Clone)]
pub enum Matcher {
    Domain(DomainMatcher),
    Url(UrlMatcher),
}

impl PatternMatcher for Matcher {
    fn matches(&self, target: &Target) -> bool {
        match self {
            Matcher::Domain(m) => m.matches(target),
            Matcher::Url(m) => m.matches(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subdomain_target_keeps_case() {
        let target = Target::subdomain("  Sub.Example.COM  ");
        assert_eq!(target.raw, "Sub.Example.COM");
        assert_eq!(target.host, "Sub.Example.COM");
    }

    #[test]
    fn test_url_target_extracts_host() {
        let target = Target::url("https://Admin.Test.com/Dashboard?x=1");
        assert_eq!(target.host, "admin.test.com");
        assert_eq!(target.text, "https://admin.test.com/dashboard?x=1");
        assert_eq!(target.raw, "https://Admin.Test.com/Dashboard?x=1");
    }

    #[test]
    fn test_unparsable_url_degrades_to_empty_host() {
        let target = Target::url("::not-a-url::");
        assert!(target.host.is_empty());
        assert_eq!(target.text, "::not-a-url::");
    }

    #[test]
    fn test_url_without_scheme_has_no_host() {
        // Bare domains are not URLs; host extraction requires a scheme.
        let target = Target::url("example.com/path");
        assert!(target.host.is_empty());
    }
}
