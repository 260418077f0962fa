//! Top-level analysis pipeline.
//!
//! One synchronous call chain per document: validate the key, rasterise
//! the first page, load the prompt, make one API call, archive the result.
//! No background work, no cancellation — the caller waits for completion
//! or failure. All state travels through explicit parameters.

use crate::archive::ResponseArchive;
use crate::client::{validate_api_key, VisionClient};
use crate::config::AnalysisConfig;
use crate::error::CoverLensError;
use crate::prompt::load_prompt;
use crate::rasterize::rasterize_first_page;
use tracing::info;

/// Analyse the cover page of a PDF and archive the result.
///
/// # Arguments
/// * `api_key`   — bearer key for the vision endpoint
/// * `pdf_name`  — document name recorded in the archive
/// * `pdf_bytes` — raw PDF bytes; not required to be valid
/// * `config`    — endpoint and file-path settings
///
/// # Errors
/// * [`CoverLensError::InvalidApiKey`] — empty or whitespace-only key,
///   rejected before any network traffic
/// * [`CoverLensError::ExtractionFailed`] — the bytes did not yield a
///   renderable first page
/// * [`CoverLensError::PromptIo`] — the prompt file exists but is unreadable
/// * [`CoverLensError::Analysis`] — any failure of the remote call,
///   collapsed into one message
/// * [`CoverLensError::Archive`] — archive I/O failed after a successful
///   analysis
pub async fn analyze_pdf(
    api_key: &str,
    pdf_name: &str,
    pdf_bytes: &[u8],
    config: &AnalysisConfig,
) -> Result<String, CoverLensError> {
    if !validate_api_key(api_key) {
        return Err(CoverLensError::InvalidApiKey);
    }

    info!("analysing '{}' ({} bytes)", pdf_name, pdf_bytes.len());

    let image = rasterize_first_page(pdf_bytes)
        .await
        .ok_or(CoverLensError::ExtractionFailed)?;

    let prompt = load_prompt(&config.prompt_path).map_err(|e| CoverLensError::PromptIo {
        path: config.prompt_path.clone(),
        source: e,
    })?;

    let client = VisionClient::new(config);
    let analysis = client.analyze(api_key, &image, &prompt).await?;

    ResponseArchive::new(&config.archive_path).append(pdf_name, &analysis)?;

    info!("analysis of '{}' complete ({} chars)", pdf_name, analysis.len());
    Ok(analysis)
}

/// Synchronous wrapper around [`analyze_pdf`].
///
/// Creates a temporary tokio runtime internally.
pub fn analyze_pdf_sync(
    api_key: &str,
    pdf_name: &str,
    pdf_bytes: &[u8],
    config: &AnalysisConfig,
) -> Result<String, CoverLensError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CoverLensError::Internal(format!("Failed to create tokio runtime: {e}")))?
        .block_on(analyze_pdf(api_key, pdf_name, pdf_bytes, config))
}
