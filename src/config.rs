//! Configuration for a cover-page analysis run.
//!
//! Every knob lives in [`AnalysisConfig`], built via its
//! [`AnalysisConfigBuilder`]. The defaults reproduce the canonical layout:
//! a prompt file under `prompts/`, an archive under `responses/`, and the
//! Moondream chat-completions endpoint.

use crate::error::CoverLensError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default prompt file location, relative to the working directory.
pub const DEFAULT_PROMPT_PATH: &str = "prompts/prompt.md";

/// Default archive file location, relative to the working directory.
pub const DEFAULT_ARCHIVE_PATH: &str = "responses/responses.json";

/// Default OpenAI-compatible endpoint base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.moondream.ai/v1";

/// Default vision model identifier sent with every request.
pub const DEFAULT_MODEL: &str = "moondream-2B";

/// Configuration for the analysis pipeline.
///
/// # Example
/// ```rust
/// use coverlens::AnalysisConfig;
///
/// let config = AnalysisConfig::builder()
///     .archive_path("/var/lib/coverlens/responses.json")
///     .model("moondream-2B")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Path of the UTF-8 prompt template. If the file is absent the
    /// built-in fallback prompt is used instead.
    pub prompt_path: PathBuf,

    /// Path of the JSON-array archive file. Created (with its parent
    /// directory) on first append.
    pub archive_path: PathBuf,

    /// Base URL of the chat-completions endpoint, without the
    /// `/chat/completions` suffix.
    pub base_url: String,

    /// Model identifier sent in the request body.
    pub model: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            prompt_path: PathBuf::from(DEFAULT_PROMPT_PATH),
            archive_path: PathBuf::from(DEFAULT_ARCHIVE_PATH),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl AnalysisConfig {
    /// Create a new builder seeded with the defaults.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`AnalysisConfig`].
#[derive(Debug)]
pub struct AnalysisConfigBuilder {
    config: AnalysisConfig,
}

impl AnalysisConfigBuilder {
    pub fn prompt_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.prompt_path = path.into();
        self
    }

    pub fn archive_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.archive_path = path.into();
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        // Trailing slashes would produce a double slash when the
        // /chat/completions suffix is appended.
        let mut url = url.into();
        while url.ends_with('/') {
            url.pop();
        }
        self.config.base_url = url;
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<AnalysisConfig, CoverLensError> {
        let c = &self.config;
        if !c.base_url.starts_with("http://") && !c.base_url.starts_with("https://") {
            return Err(CoverLensError::InvalidConfig(format!(
                "base_url must be an HTTP(S) URL, got '{}'",
                c.base_url
            )));
        }
        if c.model.trim().is_empty() {
            return Err(CoverLensError::InvalidConfig(
                "model must not be empty".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_match_canonical_layout() {
        let c = AnalysisConfig::default();
        assert_eq!(c.prompt_path, PathBuf::from("prompts/prompt.md"));
        assert_eq!(c.archive_path, PathBuf::from("responses/responses.json"));
        assert_eq!(c.base_url, "https://api.moondream.ai/v1");
        assert_eq!(c.model, "moondream-2B");
    }

    #[test]
    fn builder_strips_trailing_slash() {
        let c = AnalysisConfig::builder()
            .base_url("http://localhost:9000/v1/")
            .build()
            .unwrap();
        assert_eq!(c.base_url, "http://localhost:9000/v1");
    }

    #[test]
    fn builder_rejects_non_http_url() {
        let err = AnalysisConfig::builder()
            .base_url("ftp://example.com")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("HTTP"));
    }

    #[test]
    fn builder_rejects_empty_model() {
        let err = AnalysisConfig::builder().model("  ").build().unwrap_err();
        assert!(err.to_string().contains("model"));
    }
}
