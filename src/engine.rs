//! Pattern compilation and scope evaluation.
//!
//! Pattern strings are classified once into [`CompiledPattern`]s, then every
//! candidate is evaluated first-match-wins against the compiled list in its
//! original order. The first pattern that hits decides the verdict and is
//! credited in it, whether it is an exact or a wildcard pattern.

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;
use tracing::debug;

use crate::matcher::{
    DomainMatchMode, DomainMatcher, Matcher, PatternMatcher, Target, UrlMatchMode, UrlMatcher,
};
use crate::types::{Reason, ScopeMode, Verdict};

/// Default decision cache size
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// A single out-of-scope pattern compiled for matching
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// Pattern text as written in the scope list; credited in verdicts
    pub raw: String,
    matcher: Matcher,
    reason: Reason,
}

impl CompiledPattern {
    /// The reason reported when this pattern removes a candidate
    pub fn reason(&self) -> Reason {
        self.reason
    }

    fn matches(&self, target: &Target) -> bool {
        self.matcher.matches(target)
    }
}

/// Decision for one candidate, cached by candidate text
#[derive(Debug, Clone)]
struct Decision {
    reason: Reason,
    matched: Option<String>,
}

/// Compiled pattern set with memoized per-candidate decisions.
///
/// Scope lists routinely repeat hosts and URLs; the LRU cache makes duplicate
/// candidates O(1). Decisions are pure, so caching never changes a verdict.
pub struct ScopeFilter {
    patterns: Vec<CompiledPattern>,
    mode: ScopeMode,
    cache: Mutex<LruCache<String, Decision>>,
}

impl ScopeFilter {
    /// Compile a pattern list for the given mode.
    ///
    /// Patterns are trimmed; blank entries are skipped entirely. Duplicates
    /// are permitted and harmless (the earlier one wins the credit).
    pub fn new(patterns: &[String], mode: ScopeMode) -> Self {
        Self::with_cache_size(patterns, mode, DEFAULT_CACHE_SIZE)
    }

    /// Compile with an explicit decision cache capacity.
    pub fn with_cache_size(patterns: &[String], mode: ScopeMode, cache_size: usize) -> Self {
        let patterns = patterns
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(|p| compile_pattern(p, mode))
            .collect();

        let cache_size = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::new(1).unwrap());
        Self {
            patterns,
            mode,
            cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    pub fn mode(&self) -> ScopeMode {
        self.mode
    }

    /// Number of compiled (non-blank) patterns
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Evaluate a batch of candidates in order.
    ///
    /// Blank candidates are skipped and not counted; every other candidate
    /// yields exactly one verdict, in input order.
    pub fn evaluate(&self, candidates: &[String]) -> Vec<Verdict> {
        candidates
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(|c| self.verdict(c))
            .collect()
    }

    /// Decide a single candidate.
    pub fn verdict(&self, candidate: &str) -> Verdict {
        let candidate = candidate.trim();
        let decision = self.decide(candidate);
        Verdict {
            candidate: candidate.to_string(),
            kept: decision.matched.is_none(),
            reason: decision.reason,
            matched_pattern: decision.matched,
        }
    }

    fn decide(&self, candidate: &str) -> Decision {
        let mut cache = self.cache.lock();

        if let Some(hit) = cache.get(candidate) {
            return hit.clone();
        }

        // Miss: compute while holding the lock. Matching is CPU-only.
        let decision = self.find_match(candidate);
        cache.put(candidate.to_string(), decision.clone());
        decision
    }

    /// First-match-wins walk over the compiled patterns, without caching
    fn find_match(&self, candidate: &str) -> Decision {
        let target = match self.mode {
            ScopeMode::Subdomain => Target::subdomain(candidate),
            ScopeMode::Url => Target::url(candidate),
        };

        for pattern in &self.patterns {
            if pattern.matches(&target) {
                debug!(candidate, pattern = %pattern.raw, "out of scope");
                return Decision {
                    reason: pattern.reason,
                    matched: Some(pattern.raw.clone()),
                };
            }
        }

        Decision {
            reason: Reason::None,
            matched: None,
        }
    }

    /// Clear the decision cache
    pub fn clear_cache(&self) {
        let mut cache = self.cache.lock();
        cache.clear();
    }
}

/// One-shot evaluation: compile `patterns` for `mode` and run `candidates`
/// through them.
pub fn evaluate(candidates: &[String], patterns: &[String], mode: ScopeMode) -> Vec<Verdict> {
    ScopeFilter::new(patterns, mode).evaluate(candidates)
}

/// Classify one pattern for the given mode.
///
/// Subdomain mode knows exact and wildcard patterns over the whole candidate.
/// URL mode splits on the scheme delimiter: a pattern containing `://` is a
/// full-URL pattern compared as one unit, anything else is a bare-domain
/// pattern compared against the candidate's host. URL-mode comparisons are
/// case-insensitive, so the matcher is built over the lower-cased pattern
/// while the credited text keeps its original spelling.
fn compile_pattern(pattern: &str, mode: ScopeMode) -> CompiledPattern {
    let raw = pattern.to_string();

    match mode {
        ScopeMode::Subdomain => {
            let (matcher_mode, reason) = if pattern.contains('*') {
                (DomainMatchMode::Wildcard, Reason::WildcardMatch)
            } else {
                (DomainMatchMode::Exact, Reason::ExactMatch)
            };
            CompiledPattern {
                raw,
                matcher: Matcher::Domain(DomainMatcher::with_mode(pattern, matcher_mode)),
                reason,
            }
        }
        ScopeMode::Url => {
            let lowered = pattern.to_lowercase();
            if lowered.contains("://") {
                let (matcher_mode, reason) = if lowered.contains('*') {
                    (UrlMatchMode::Wildcard, Reason::WildcardUrlMatch)
                } else {
                    (UrlMatchMode::Exact, Reason::ExactUrlMatch)
                };
                CompiledPattern {
                    raw,
                    matcher: Matcher::Url(UrlMatcher::with_mode(&lowered, matcher_mode)),
                    reason,
                }
            } else {
                let (matcher_mode, reason) = if lowered.contains('*') {
                    (DomainMatchMode::Wildcard, Reason::WildcardDomainMatch)
                } else {
                    (DomainMatchMode::Exact, Reason::ExactDomainMatch)
                };
                CompiledPattern {
                    raw,
                    matcher: Matcher::Domain(DomainMatcher::with_mode(&lowered, matcher_mode)),
                    reason,
                }
            }
        }
    }
}
