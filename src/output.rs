//! In-scope output writing.

use std::fs;
use std::path::Path;

use crate::error::{Result, ScopeError};
use crate::types::Verdict;

/// Kept candidates in verdict order
pub fn kept_items(verdicts: &[Verdict]) -> Vec<&str> {
    verdicts
        .iter()
        .filter(|v| v.kept)
        .map(|v| v.candidate.as_str())
        .collect()
}

/// Write kept candidates to `path`, one per line, input order preserved.
pub fn write_kept(path: impl AsRef<Path>, verdicts: &[Verdict]) -> Result<()> {
    let path = path.as_ref();
    let mut text = kept_items(verdicts).join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    fs::write(path, text).map_err(|e| ScopeError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Reason;

    fn verdict(candidate: &str, kept: bool) -> Verdict {
        Verdict {
            candidate: candidate.to_string(),
            kept,
            reason: if kept { Reason::None } else { Reason::ExactMatch },
            matched_pattern: if kept {
                None
            } else {
                Some(candidate.to_string())
            },
        }
    }

    #[test]
    fn test_kept_items_preserve_order() {
        let verdicts = vec![
            verdict("b.com", true),
            verdict("x.com", false),
            verdict("a.com", true),
        ];
        assert_eq!(kept_items(&verdicts), ["b.com", "a.com"]);
    }

    #[test]
    fn test_write_kept_one_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inscope.txt");

        let verdicts = vec![
            verdict("b.com", true),
            verdict("x.com", false),
            verdict("a.com", true),
        ];
        write_kept(&path, &verdicts).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "b.com\na.com\n");
    }

    #[test]
    fn test_write_kept_empty_result() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inscope.txt");

        write_kept(&path, &[verdict("x.com", false)]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_to_bad_path_fails() {
        let verdicts = vec![verdict("a.com", true)];
        let result = write_kept("/nonexistent/dir/inscope.txt", &verdicts);
        assert!(matches!(result, Err(ScopeError::WriteFailed { .. })));
    }
}
