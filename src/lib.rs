//! # coverlens
//!
//! Analyse PDF cover pages with a vision language model.
//!
//! The pipeline is a single synchronous chain per document:
//!
//! ```text
//! PDF bytes
//!  │
//!  ├─ 1. Rasterise  first page → 300 DPI RGB PNG via pdfium
//!  ├─ 2. Prompt     load prompts/prompt.md (or built-in fallback)
//!  ├─ 3. Analyse    one chat-completions call with a base64 data URL
//!  └─ 4. Archive    append {pdf_name, analysis_result, timestamp}
//!                   to responses/responses.json
//! ```
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use coverlens::{analyze_pdf, AnalysisConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bytes = std::fs::read("paper.pdf")?;
//!     let config = AnalysisConfig::default();
//!     let analysis = analyze_pdf("my-api-key", "paper.pdf", &bytes, &config).await?;
//!     println!("{analysis}");
//!     Ok(())
//! }
//! ```
//!
//! ## Failure model
//!
//! Rasterisation failures collapse to an absent result (the cause is logged,
//! not surfaced). Remote-call failures collapse to one
//! `"Error analyzing image: …"` message. Archive failures propagate
//! unmodified. There are no retries anywhere.
//!
//! The archive is a whole-file rewrite on every append with no locking;
//! concurrent writers can lose updates. This matches the single-user
//! operating context the crate targets.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod analyze;
pub mod archive;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod prompt;
pub mod rasterize;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use analyze::{analyze_pdf, analyze_pdf_sync};
pub use archive::{ArchiveEntry, ResponseArchive};
pub use client::{validate_api_key, VisionClient};
pub use config::{AnalysisConfig, AnalysisConfigBuilder};
pub use error::{ArchiveError, CoverLensError, VisionApiError};
pub use format::format_analysis;
pub use prompt::{load_prompt, FALLBACK_PROMPT};
pub use rasterize::{rasterize_first_page, rasterize_first_page_blocking};
