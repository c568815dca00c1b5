//! Gemini generateContent provider

use super::{Generation, GenerationParams, TextGenerator};
use crate::error::ProviderError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::timeout as tokio_timeout;
use tracing::debug;

pub struct GeminiRunner {
    client: Client,
    api_url: String,
    model: String,
    api_key: Option<String>,
    api_key_env: String,
    timeout: Duration,
}

impl GeminiRunner {
    pub fn new(
        api_url: String,
        model: String,
        api_key: Option<String>,
        api_key_env: String,
        timeout: Duration,
    ) -> Self {
        Self {
            client: Client::new(),
            api_url,
            model,
            api_key,
            api_key_env,
            timeout,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }

    async fn call(
        &self,
        api_key: &str,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<(u16, String), ProviderError> {
        let body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiTextPart {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: params.temperature,
                max_output_tokens: params.max_output_tokens,
            },
        };

        let request = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&body)
            .send();

        // The body read counts against the same deadline as the headers
        let exchange = async {
            let response = request.await?;
            let status = response.status().as_u16();
            let text = response.text().await?;
            Ok::<_, ProviderError>((status, text))
        };

        tokio_timeout(self.timeout, exchange)
            .await
            .map_err(|_| ProviderError::Timeout(self.timeout))?
    }
}

// ============================================================================
// API Types
// ============================================================================

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Serialize)]
struct GeminiContent {
    parts: Vec<GeminiTextPart>,
}

#[derive(Serialize, Deserialize)]
struct GeminiTextPart {
    text: String,
}

#[derive(Serialize)]
struct GeminiGenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContentResponse>,
}

#[derive(Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Deserialize)]
struct GeminiPartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct GeminiErrorBody {
    error: Option<GeminiError>,
}

#[derive(Deserialize)]
struct GeminiError {
    message: String,
}

/// Turn a raw HTTP status and body into a tagged generation outcome
fn interpret_response(status: u16, body: &str) -> Generation {
    if !(200..300).contains(&status) {
        // Best effort: the error body usually carries a readable message
        let detail = serde_json::from_str::<GeminiErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .map(|e| e.message)
            .unwrap_or_else(|| "API call failed".to_string());
        return Generation::Failure {
            status: Some(status),
            message: format!("Gemini Error: {}", detail),
        };
    }

    let response: GeminiResponse = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => {
            return Generation::Failure {
                status: Some(status),
                message: format!("Unreadable Gemini response: {}", e),
            }
        }
    };

    let text = response
        .candidates
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text);

    match text {
        Some(text) => Generation::Success { text },
        None => Generation::Failure {
            status: Some(status),
            message: "No response from Gemini".to_string(),
        },
    }
}

#[async_trait]
impl TextGenerator for GeminiRunner {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Generation {
        let Some(api_key) = self.api_key.as_deref() else {
            return ProviderError::MissingApiKey(self.api_key_env.clone()).into();
        };

        debug!("Sending prompt to {}", self.endpoint());
        match self.call(api_key, prompt, params).await {
            Ok((status, body)) => {
                debug!("Gemini response status: {}", status);
                interpret_response(status, &body)
            }
            Err(e) => e.into(),
        }
    }
}
