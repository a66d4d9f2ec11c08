use serde::Serialize;

/// Matching mode for a filtering run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeMode {
    /// Candidates are bare subdomains, matched as whole strings
    Subdomain,
    /// Candidates are full URLs, matched by host or as whole strings
    Url,
}

/// Why a candidate was removed (or `None` when it was kept)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Reason {
    None,
    ExactMatch,
    WildcardMatch,
    ExactDomainMatch,
    WildcardDomainMatch,
    ExactUrlMatch,
    WildcardUrlMatch,
}

impl Reason {
    /// Human-readable label used in report tables
    pub fn label(&self) -> &'static str {
        match self {
            Reason::None => "none",
            Reason::ExactMatch => "exact match",
            Reason::WildcardMatch => "wildcard match",
            Reason::ExactDomainMatch => "exact domain match",
            Reason::WildcardDomainMatch => "wildcard domain match",
            Reason::ExactUrlMatch => "exact URL match",
            Reason::WildcardUrlMatch => "wildcard URL match",
        }
    }
}

/// Result of matching one candidate against the pattern set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// Original candidate text, whitespace-trimmed
    pub candidate: String,
    /// True when the candidate stays in scope
    pub kept: bool,
    pub reason: Reason,
    /// Pattern credited with the removal; `None` when kept
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_pattern: Option<String>,
}

/// Run totals derived from a verdict sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub removed: usize,
    pub kept: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_labels() {
        assert_eq!(Reason::ExactMatch.label(), "exact match");
        assert_eq!(Reason::WildcardDomainMatch.label(), "wildcard domain match");
        assert_eq!(Reason::None.label(), "none");
    }

    #[test]
    fn test_reason_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Reason::WildcardUrlMatch).unwrap(),
            "\"wildcard-url-match\""
        );
        assert_eq!(serde_json::to_string(&Reason::None).unwrap(), "\"none\"");
    }

    #[test]
    fn test_kept_verdict_omits_pattern_field() {
        let verdict = Verdict {
            candidate: "a.example.org".to_string(),
            kept: true,
            reason: Reason::None,
            matched_pattern: None,
        };
        let json = serde_json::to_string(&verdict).unwrap();
        assert!(!json.contains("matched_pattern"), "got: {}", json);
    }
}
