use base64::{Engine as _, engine::general_purpose};
use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    domain::{
        analysis::ports::AnalysisClient,
        common::{LLMConfig, entities::app_errors::CoreError},
        storage::entities::JPEG_CONTENT_TYPE,
    },
    infrastructure::media::jpeg::spawn_reencode_jpeg,
};

/// Anthropic Messages API client for meal photo analysis.
#[derive(Debug, Clone)]
pub struct AnthropicClient {
    api_key: String,
    model_name: String,
    api_version: String,
    messages_url: String,
    max_tokens: u32,
    upload_quality: u8,
    client: Client,
}

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: Vec<ContentBlock>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum ContentBlock {
    Image { source: ImageSource },
    Text { text: String },
}

#[derive(Debug, Serialize)]
struct ImageSource {
    #[serde(rename = "type")]
    kind: &'static str,
    media_type: &'static str,
    data: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ResponseBlock>,
}

#[derive(Debug, Deserialize)]
struct ResponseBlock {
    #[serde(default)]
    text: Option<String>,
}

impl AnthropicClient {
    /// Fails with `Auth` when no API key is configured.
    pub fn new(config: LLMConfig) -> Result<Self, CoreError> {
        if config.anthropic_api_key.trim().is_empty() {
            return Err(CoreError::Auth("ANTHROPIC_API_KEY is not set".to_string()));
        }

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                CoreError::Config(format!("failed to build HTTP client: {e}"))
            })?;

        tracing::info!(
            model = %config.anthropic_model,
            timeout_secs = config.request_timeout.as_secs(),
            "Initializing Anthropic client"
        );

        Ok(Self {
            api_key: config.anthropic_api_key,
            model_name: config.anthropic_model,
            api_version: config.anthropic_version,
            messages_url: format!("{}/v1/messages", config.base_url.trim_end_matches('/')),
            max_tokens: config.max_tokens,
            upload_quality: config.upload_jpeg_quality,
            client,
        })
    }

    fn build_request(&self, prompt: String, jpeg: &[u8]) -> MessagesRequest {
        MessagesRequest {
            model: self.model_name.clone(),
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user",
                content: vec![
                    ContentBlock::Image {
                        source: ImageSource {
                            kind: "base64",
                            media_type: JPEG_CONTENT_TYPE,
                            data: general_purpose::STANDARD.encode(jpeg),
                        },
                    },
                    ContentBlock::Text { text: prompt },
                ],
            }],
        }
    }

    async fn call_messages_api(&self, request: MessagesRequest) -> Result<String, CoreError> {
        let response = self
            .client
            .post(&self.messages_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(timeout = e.is_timeout(), "Anthropic API request failed: {}", e);
                CoreError::Network(format!("analysis request failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Anthropic API error: {} - {}", status, error_text);
            return Err(CoreError::Network(format!(
                "analysis API returned {status}: {error_text}"
            )));
        }

        let body: MessagesResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to read Anthropic response body: {}", e);
            CoreError::Network(format!("unreadable analysis API response: {e}"))
        })?;

        first_text(body).ok_or(CoreError::EmptyResponse)
    }
}

/// Text of the first content block. Later blocks are ignored.
fn first_text(response: MessagesResponse) -> Option<String> {
    response
        .content
        .into_iter()
        .next()
        .and_then(|block| block.text)
        .filter(|text| !text.trim().is_empty())
}

impl AnalysisClient for AnthropicClient {
    #[instrument(skip(self, prompt, image), fields(image_bytes = image.len()))]
    async fn analyze_meal_image(&self, prompt: String, image: Bytes) -> Result<String, CoreError> {
        let jpeg = spawn_reencode_jpeg(image, self.upload_quality).await?;
        tracing::debug!(jpeg_bytes = jpeg.len(), "Sending meal photo for analysis");

        let request = self.build_request(prompt, &jpeg);
        self.call_messages_api(request).await
    }
}
