//! Prompt template loading.
//!
//! The prompt is re-read on every analysis call — no caching — so edits to
//! the prompt file take effect immediately. A missing file falls back to
//! [`FALLBACK_PROMPT`]; any other read failure propagates to the caller.

use std::io;
use std::path::Path;
use tracing::debug;

/// Prompt used when no prompt file exists at the configured path.
pub const FALLBACK_PROMPT: &str = "Please analyze this PDF cover page and provide a \
detailed analysis with Title, Authors, Institution, Date, Visual Elements, \
Document Type, and Identifiers.";

/// Load the prompt template from `path`, trimming surrounding whitespace.
///
/// Returns [`FALLBACK_PROMPT`] if the file does not exist. Other I/O
/// failures (permissions, invalid UTF-8) are returned as errors.
pub fn load_prompt(path: &Path) -> io::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text.trim().to_string()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("prompt file '{}' not found, using fallback", path.display());
            Ok(FALLBACK_PROMPT.to_string())
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_returns_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let prompt = load_prompt(&dir.path().join("no-such-prompt.md")).unwrap();
        assert!(!prompt.is_empty());
        for field in ["Title", "Authors", "Institution", "Date", "Identifiers"] {
            assert!(prompt.contains(field), "fallback missing field '{field}'");
        }
    }

    #[test]
    fn present_file_returns_trimmed_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prompt.md");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(f, "\n  Describe the cover page.  \n\n").unwrap();
        assert_eq!(load_prompt(&path).unwrap(), "Describe the cover page.");
    }

    #[test]
    fn unreadable_file_propagates_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory at the prompt path is readable as a path but not as a file.
        let path = dir.path().join("prompt.md");
        std::fs::create_dir(&path).unwrap();
        assert!(load_prompt(&path).is_err());
    }
}
