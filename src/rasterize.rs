//! First-page rasterisation: PDF bytes → PNG bytes via pdfium.
//!
//! The contract is deliberately lossy: every failure collapses to `None`.
//! Callers cannot distinguish a corrupt stream from a zero-page document;
//! the distinction exists only as a [`RasterizeFailure`] tag in the logs.
//!
//! pdfium wraps a C++ library with thread-local state and is not safe to
//! call from async contexts, so the public async entry point moves the work
//! onto the blocking thread pool via `tokio::task::spawn_blocking`.

use image::{DynamicImage, ImageFormat};
use pdfium_render::prelude::*;
use std::io::Cursor;
use thiserror::Error;
use tracing::{debug, warn};

/// Render scale applied to the page's point dimensions: 300 DPI over the
/// PDF's native 72 points per inch.
pub const RENDER_SCALE: f32 = 300.0 / 72.0;

/// Internal failure taxonomy. Logged for diagnostics, never surfaced:
/// the public contract is a single absent result.
#[derive(Debug, Error)]
enum RasterizeFailure {
    #[error("pdfium binding failed: {0}")]
    Binding(String),
    #[error("document decode failed: {0}")]
    Decode(String),
    #[error("document has no pages")]
    EmptyDocument,
    #[error("page render failed: {0}")]
    Render(String),
    #[error("PNG encode failed: {0}")]
    Encode(String),
}

/// Rasterise the first page of a PDF held in memory.
///
/// Returns the page as PNG-encoded bytes at a 300/72 scale on the page's
/// point dimensions, or `None` if the bytes are not a renderable PDF.
/// Never panics on malformed input.
pub async fn rasterize_first_page(pdf_bytes: &[u8]) -> Option<Vec<u8>> {
    let bytes = pdf_bytes.to_vec();
    match tokio::task::spawn_blocking(move || rasterize_first_page_blocking(&bytes)).await {
        Ok(result) => result,
        Err(e) => {
            warn!("rasterisation task panicked: {e}");
            None
        }
    }
}

/// Blocking variant of [`rasterize_first_page`] for synchronous callers.
pub fn rasterize_first_page_blocking(pdf_bytes: &[u8]) -> Option<Vec<u8>> {
    match rasterize_inner(pdf_bytes) {
        Ok(png) => Some(png),
        Err(e) => {
            warn!("first-page rasterisation failed: {e}");
            None
        }
    }
}

fn rasterize_inner(pdf_bytes: &[u8]) -> Result<Vec<u8>, RasterizeFailure> {
    let pdfium = Pdfium::new(
        Pdfium::bind_to_system_library().map_err(|e| RasterizeFailure::Binding(e.to_string()))?,
    );

    let document = pdfium
        .load_pdf_from_byte_slice(pdf_bytes, None)
        .map_err(|e| RasterizeFailure::Decode(e.to_string()))?;

    let pages = document.pages();
    if pages.len() == 0 {
        return Err(RasterizeFailure::EmptyDocument);
    }

    let page = pages
        .get(0)
        .map_err(|e| RasterizeFailure::Render(e.to_string()))?;

    let width = (page.width().value * RENDER_SCALE).round() as i32;
    let height = (page.height().value * RENDER_SCALE).round() as i32;

    let bitmap = page
        .render_with_config(
            &PdfRenderConfig::new()
                .set_target_width(width)
                .set_target_height(height),
        )
        .map_err(|e| RasterizeFailure::Render(e.to_string()))?;

    // RGB, no alpha: the downstream API has no use for transparency.
    let image = DynamicImage::ImageRgb8(bitmap.as_image().to_rgb8());
    debug!(
        "rendered first page → {}x{} px",
        image.width(),
        image.height()
    );

    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| RasterizeFailure::Encode(e.to_string()))?;

    // `document` drops on return, releasing all pdfium resources.
    Ok(png)
}
