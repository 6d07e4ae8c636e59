//! Gemini-backed greeting generator.
//!
//! One round-trip per request, no retry. Sampling parameters and
//! safety thresholds are fixed; failure detail is logged server-side and the
//! caller only sees a fixed message.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use tahniyat_application::{GenerationRequest, GreetingGenerator, MODEL_ACKNOWLEDGEMENT};
use tahniyat_core::{AppError, AppResult};

/// Default base URL of the generative language API.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const MODEL_NAME: &str = "gemini-1.5-flash";
const UPSTREAM_FAILURE_MESSAGE: &str = "failed to generate response or content blocked";

const SAFETY_CATEGORIES: [&str; 4] = [
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];
const SAFETY_THRESHOLD: &str = "BLOCK_MEDIUM_AND_ABOVE";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

impl Content {
    fn new(role: &str, text: &str) -> Self {
        Self {
            role: role.to_owned(),
            parts: vec![Part {
                text: Some(text.to_owned()),
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_k: i32,
    top_p: f64,
    max_output_tokens: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SafetySetting {
    category: &'static str,
    threshold: &'static str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

/// Gemini implementation of the greeting generator port.
pub struct GeminiGreetingGenerator {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiGreetingGenerator {
    /// Creates a generator against the given API base URL.
    #[must_use]
    pub fn new(
        http_client: reqwest::Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    fn request_body(request: &GenerationRequest) -> GenerateContentBody {
        GenerateContentBody {
            // The system instruction travels as conversation history with a
            // synthetic acknowledgement turn, followed by the live prompt.
            contents: vec![
                Content::new("user", &request.system_instruction),
                Content::new("model", MODEL_ACKNOWLEDGEMENT),
                Content::new("user", &request.prompt),
            ],
            generation_config: GenerationConfig {
                temperature: 0.7,
                top_k: 1,
                top_p: 1.0,
                max_output_tokens: 400,
            },
            safety_settings: SAFETY_CATEGORIES
                .iter()
                .map(|category| SafetySetting {
                    category,
                    threshold: SAFETY_THRESHOLD,
                })
                .collect(),
        }
    }
}

fn extract_text(response: GenerateContentResponse) -> Option<String> {
    let candidate = response.candidates?.into_iter().next()?;
    let parts = candidate.content?.parts;

    let text: String = parts.into_iter().filter_map(|part| part.text).collect();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[async_trait]
impl GreetingGenerator for GeminiGreetingGenerator {
    async fn generate(&self, request: GenerationRequest) -> AppResult<String> {
        let url = format!(
            "{}/v1beta/models/{MODEL_NAME}:generateContent?key={}",
            self.base_url, self.api_key
        );
        let body = Self::request_body(&request);

        let response = self
            .http_client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|error| {
                warn!(error = %error, "generation request transport error");
                AppError::Upstream(UPSTREAM_FAILURE_MESSAGE.to_owned())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "<response body unavailable>".to_owned());
            warn!(%status, detail, "generation request rejected upstream");
            return Err(AppError::Upstream(UPSTREAM_FAILURE_MESSAGE.to_owned()));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|error| {
            warn!(error = %error, "generation response could not be decoded");
            AppError::Upstream(UPSTREAM_FAILURE_MESSAGE.to_owned())
        })?;

        extract_text(parsed).ok_or_else(|| {
            warn!("generation response carried no candidate text");
            AppError::Upstream(UPSTREAM_FAILURE_MESSAGE.to_owned())
        })
    }
}
