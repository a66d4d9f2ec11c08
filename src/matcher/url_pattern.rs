use super::{wildcard, PatternMatcher, Target};

/// URL matching mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlMatchMode {
    /// The whole URL string must equal the pattern
    Exact,
    /// The whole URL string must satisfy the wildcard pattern
    Wildcard,
}

/// Matches a candidate URL as one unit, scheme and host included.
///
/// `http://example.com/*` therefore never matches a different host, even
/// when the path alone would.
#[derive(Debug, Clone)]
pub struct UrlMatcher {
    pattern: String,
    mode: UrlMatchMode,
}

impl UrlMatcher {
    /// Create a matcher from a pattern, picking the mode from the presence
    /// of `*`.
    pub fn new(pattern: &str) -> Self {
        let mode = if pattern.contains('*') {
            UrlMatchMode::Wildcard
        } else {
            UrlMatchMode::Exact
        };
        Self {
            pattern: pattern.to_string(),
            mode,
        }
    }

    /// Create a URL matcher with explicit mode
    pub fn with_mode(pattern: &str, mode: UrlMatchMode) -> Self {
        Self {
            pattern: pattern.to_string(),
            mode,
        }
    }

    pub fn mode(&self) -> UrlMatchMode {
        self.mode
    }
}

impl PatternMatcher for UrlMatcher {
    fn matches(&self, target: &Target) -> bool {
        match self.mode {
            UrlMatchMode::Exact => target.text == self.pattern,
            UrlMatchMode::Wildcard => wildcard::matches(&target.text, &self.pattern),
        }
    }
}
