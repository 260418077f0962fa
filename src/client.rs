//! Vision-API interaction: one image, one prompt, one synchronous call.
//!
//! The request follows the OpenAI chat-completions shape: a single user
//! message whose content array carries an image data-URL part followed by a
//! text part. There are no retries and no timeout beyond the HTTP client's
//! defaults; every failure is terminal for the call.

use crate::config::AnalysisConfig;
use crate::error::VisionApiError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Check whether an API key is usable: non-empty after trimming.
///
/// This is the entire validation — no length, prefix, or charset rules.
pub fn validate_api_key(api_key: &str) -> bool {
    !api_key.trim().is_empty()
}

/// Client for a chat-completions-style vision endpoint.
pub struct VisionClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl VisionClient {
    /// Build a client from the endpoint settings in `config`.
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        }
    }

    /// Send `image_bytes` and `prompt` to the endpoint and return the first
    /// completion's text content verbatim.
    ///
    /// `image_bytes` is expected to be a PNG from
    /// [`crate::rasterize::rasterize_first_page`].
    pub async fn analyze(
        &self,
        api_key: &str,
        image_bytes: &[u8],
        prompt: &str,
    ) -> Result<String, VisionApiError> {
        let request = ChatRequest::new(&self.model, image_bytes, prompt);
        let url = format!("{}/chat/completions", self.base_url);
        debug!("POST {url} ({} byte image)", image_bytes.len());

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VisionApiError::Api { status, body });
        }

        let completion: ChatResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(VisionApiError::EmptyResponse)
    }
}

// ── Wire types ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

impl<'a> ChatRequest<'a> {
    fn new(model: &'a str, image_bytes: &[u8], prompt: &'a str) -> Self {
        let b64 = STANDARD.encode(image_bytes);
        Self {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: vec![
                    // The payload is PNG but the declared MIME type is jpeg.
                    // The label mismatch is part of the wire contract;
                    // the endpoint sniffs the actual content.
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: format!("data:image/jpeg;base64,{b64}"),
                        },
                    },
                    ContentPart::Text { text: prompt },
                ],
            }],
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: Vec<ContentPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    ImageUrl { image_url: ImageUrl },
    Text { text: &'a str },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_is_invalid() {
        assert!(!validate_api_key(""));
    }

    #[test]
    fn whitespace_key_is_invalid() {
        assert!(!validate_api_key("   \t\n"));
    }

    #[test]
    fn any_other_key_is_valid() {
        assert!(validate_api_key("x"));
        assert!(validate_api_key("  md-1234  "));
        assert!(validate_api_key("not-a-real-key-format"));
    }

    #[test]
    fn request_body_shape() {
        let request = ChatRequest::new("moondream-2B", &[1, 2, 3], "describe this");
        let v = serde_json::to_value(&request).unwrap();

        assert_eq!(v["model"], "moondream-2B");
        assert_eq!(v["messages"][0]["role"], "user");

        let parts = v["messages"][0]["content"].as_array().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0]["type"], "image_url");
        let url = parts[0]["image_url"]["url"].as_str().unwrap();
        assert!(url.starts_with("data:image/jpeg;base64,"));
        assert_eq!(&url["data:image/jpeg;base64,".len()..], "AQID");
        assert_eq!(parts[1]["type"], "text");
        assert_eq!(parts[1]["text"], "describe this");
    }

    #[test]
    fn response_parses_first_choice() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"Title: Foo"}}]}"#;
        let resp: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.choices[0].message.content, "Title: Foo");
    }
}
