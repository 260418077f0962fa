//! Flat JSON-array archive of past analysis results.
//!
//! Append-only in intent, implemented as a whole-file rewrite: each append
//! reads the full array, pushes one entry, and writes the file back with
//! human-readable indentation. There is no locking — two concurrent writers
//! race and the last write wins. The crate targets a single-user context;
//! callers needing multi-writer correctness must serialise appends
//! themselves.

use crate::error::ArchiveError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// One archived analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Name of the uploaded document, as supplied by the caller.
    pub pdf_name: String,
    /// Free-text analysis returned by the vision model.
    pub analysis_result: String,
    /// Local-clock RFC 3339 timestamp taken at append time.
    pub timestamp: String,
}

/// Handle on the archive file. Stateless; every operation re-reads disk.
#[derive(Debug, Clone)]
pub struct ResponseArchive {
    path: PathBuf,
}

impl ResponseArchive {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying archive file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry, stamping it with the current local time.
    ///
    /// Creates the parent directory and the file as needed. Errors
    /// propagate unmodified; a failed append leaves no partial entry
    /// only if the write itself failed before replacing the file.
    pub fn append(&self, pdf_name: &str, analysis_result: &str) -> Result<(), ArchiveError> {
        let mut entries = self.entries()?;
        entries.push(ArchiveEntry {
            pdf_name: pdf_name.to_string(),
            analysis_result: analysis_result.to_string(),
            timestamp: chrono::Local::now().to_rfc3339(),
        });

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
            }
        }

        // serde_json writes non-ASCII characters literally, so entries in
        // any script survive a read-back byte-for-byte.
        let json = serde_json::to_string_pretty(&entries).map_err(|e| self.parse_err(e))?;
        std::fs::write(&self.path, json).map_err(|e| self.io_err(e))?;

        debug!(
            "archived analysis for '{}' ({} entries total)",
            pdf_name,
            entries.len()
        );
        Ok(())
    }

    /// Read all entries. An absent file is an empty archive; a present but
    /// malformed file is an error.
    pub fn entries(&self) -> Result<Vec<ArchiveEntry>, ArchiveError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text).map_err(|e| self.parse_err(e)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(self.io_err(e)),
        }
    }

    fn io_err(&self, source: std::io::Error) -> ArchiveError {
        ArchiveError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn parse_err(&self, source: serde_json::Error) -> ArchiveError {
        ArchiveError::Parse {
            path: self.path.clone(),
            source,
        }
    }
}
