use super::{wildcard, PatternMatcher, Target};

/// Domain matching mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainMatchMode {
    /// Exact match: "example.com" matches only "example.com"
    Exact,
    /// Wildcard match: "*.example.com" matches "foo.example.com",
    /// "bar.foo.example.com", etc., but not "example.com" itself
    Wildcard,
}

/// Matches the host component of a candidate.
///
/// Comparison is verbatim against the pattern as stored; case normalization
/// is the caller's choice (URL mode lower-cases both sides, subdomain mode
/// compares as written).
#[derive(Debug, Clone)]
pub struct DomainMatcher {
    pattern: String,
    mode: DomainMatchMode,
}

impl DomainMatcher {
    /// Create a matcher from a pattern, picking the mode from the presence
    /// of `*`.
    pub fn new(pattern: &str) -> Self {
        let mode = if pattern.contains('*') {
            DomainMatchMode::Wildcard
        } else {
            DomainMatchMode::Exact
        };
        Self {
            pattern: pattern.to_string(),
            mode,
        }
    }

    /// Create a domain matcher with explicit mode
    pub fn with_mode(pattern: &str, mode: DomainMatchMode) -> Self {
        Self {
            pattern: pattern.to_string(),
            mode,
        }
    }

    pub fn mode(&self) -> DomainMatchMode {
        self.mode
    }
}

impl PatternMatcher for DomainMatcher {
    fn matches(&self, target: &Target) -> bool {
        if target.host.is_empty() {
            return false;
        }

        match self.mode {
            DomainMatchMode::Exact => target.host == self.pattern,
            DomainMatchMode::Wildcard => wildcard::matches(&target.host, &self.pattern),
        }
    }
}
