//! Error types for the coverlens library.
//!
//! Three enums reflect three distinct boundaries:
//!
//! * [`CoverLensError`] — top-level pipeline failures returned by
//!   [`crate::analyze::analyze_pdf`].
//! * [`VisionApiError`] — anything that goes wrong during the single
//!   outbound API call. The pipeline collapses every variant into one
//!   user-visible `"Error analyzing image: …"` message; the variants exist
//!   so logs can still tell a transport failure from a malformed response.
//! * [`ArchiveError`] — archive I/O and parse failures. These are never
//!   caught inside the library; callers see them unmodified.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the top-level analysis pipeline.
#[derive(Debug, Error)]
pub enum CoverLensError {
    /// API key was empty or whitespace-only. Rejected before any network call.
    #[error("API key must not be empty")]
    InvalidApiKey,

    /// First-page rasterisation failed. The underlying cause (corrupt
    /// stream, zero pages, render error) is logged, not carried here.
    #[error("Failed to extract the cover page from the PDF")]
    ExtractionFailed,

    /// The prompt file exists but could not be read.
    #[error("Failed to read prompt file '{path}': {source}")]
    PromptIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The remote analysis call failed. Message format matches the
    /// user-visible contract.
    #[error("Error analyzing image: {0}")]
    Analysis(#[from] VisionApiError),

    /// Archive read or write failed. Propagated uncaught.
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failures during the outbound vision-API call.
///
/// All variants are terminal for the call: no retries, no backoff.
#[derive(Debug, Error)]
pub enum VisionApiError {
    /// Request could not be sent or the response body could not be read.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("API request failed with status {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The response parsed but carried no choices.
    #[error("API response contained no completion choices")]
    EmptyResponse,
}

/// Archive I/O failures. Fatal for the append; nothing rolls back.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Archive I/O failed for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The archive file exists but is not a valid JSON array of entries.
    #[error("Archive file '{path}' is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
