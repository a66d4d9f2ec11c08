//! Input list loading.
//!
//! Candidate and pattern sources share one format: one item per line,
//! leading/trailing whitespace trimmed, blank lines dropped, order preserved.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::warn;

use crate::error::{Result, ScopeError};

/// Parse a line-oriented list from text.
pub fn parse_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Load a list file.
///
/// The file is read fully into memory and decoded as UTF-8. A file that is
/// not valid UTF-8 is decoded again as Latin-1 with a warning, so a single
/// mangled byte cannot abort a run. A missing file is fatal.
pub fn read_list(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ScopeError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => ScopeError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!(
                path = %path.display(),
                "UTF-8 decoding failed, falling back to Latin-1"
            );
            err.into_bytes().iter().map(|&b| b as char).collect()
        }
    };

    Ok(parse_list(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_trims_and_drops_blanks() {
        let text = "  a.example.com \n\n\tb.example.com\n   \nc.example.com";
        let items = parse_list(text);
        assert_eq!(items, ["a.example.com", "b.example.com", "c.example.com"]);
    }

    #[test]
    fn test_parse_preserves_order_and_duplicates() {
        let text = "b.com\na.com\nb.com\n";
        let items = parse_list(text);
        assert_eq!(items, ["b.com", "a.com", "b.com"]);
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_list("").is_empty());
        assert!(parse_list("\n\n  \n").is_empty());
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_list("/nonexistent/path/subs.txt");
        assert!(matches!(result, Err(ScopeError::InputNotFound { .. })));
    }

    #[test]
    fn test_read_utf8_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("subs.txt");
        fs::write(&path, "a.example.com\nb.example.com\n").unwrap();

        let items = read_list(&path).unwrap();
        assert_eq!(items, ["a.example.com", "b.example.com"]);
    }

    #[test]
    fn test_read_falls_back_to_latin1() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("subs.txt");
        let mut f = fs::File::create(&path).unwrap();
        // 0xE9 is 'é' in Latin-1 and invalid as a standalone UTF-8 byte.
        f.write_all(b"caf\xe9.example.com\nplain.example.com\n")
            .unwrap();
        drop(f);

        let items = read_list(&path).unwrap();
        assert_eq!(items, ["café.example.com", "plain.example.com"]);
    }
}
