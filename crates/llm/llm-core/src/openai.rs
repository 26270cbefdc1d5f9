//! OpenAI-compatible completion client
//!
//! Posts to the legacy `/completions` endpoint, which any compatible server
//! (hosted or local) can serve.
//!
//! # Example
//!
//! ```rust,no_run
//! use llm_api::LlmConfig;
//! use llm_core::{sentiment_request, OpenAiCompleter, TextCompleter};
//!
//! let config = LlmConfig::builder().api_key("sk-...").build().unwrap();
//! let completer = OpenAiCompleter::new(&config).unwrap();
//! let completion = completer.complete(&sentiment_request("AAPL")).unwrap();
//! println!("{}", completion.text);
//! ```

use llm_api::LlmConfig;
use llm_spi::{Completion, CompletionRequest, LlmError, Result, TextCompleter};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    text: String,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Completion client for OpenAI-compatible APIs.
#[derive(Debug, Clone)]
pub struct OpenAiCompleter {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiCompleter {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/completions", self.base_url)
    }

    /// Interpret a response body given its HTTP status.
    fn parse_response(&self, status: u16, body: &str) -> Result<Completion> {
        if !(200..300).contains(&status) {
            let message = serde_json::from_str::<ErrorResponse>(body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| body.chars().take(200).collect());
            return Err(LlmError::ApiError { status, message });
        }

        let response: CompletionResponse =
            serde_json::from_str(body).map_err(|e| LlmError::ParseError(e.to_string()))?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(LlmError::EmptyResponse)?;

        let text = choice.text.trim();
        if text.is_empty() {
            return Err(LlmError::EmptyResponse);
        }

        Ok(Completion {
            text: text.to_string(),
            model: response.model.unwrap_or_else(|| self.model.clone()),
            finish_reason: choice.finish_reason,
        })
    }
}

impl TextCompleter for OpenAiCompleter {
    fn name(&self) -> &str {
        "openai"
    }

    fn complete(&self, request: &CompletionRequest) -> Result<Completion> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingCredential("OPENAI_API_KEY"))?;

        if request.prompt.trim().is_empty() {
            return Err(LlmError::EmptyPrompt);
        }

        debug!(
            model = %self.model,
            max_tokens = request.max_tokens,
            "Requesting completion"
        );

        let body = CompletionBody {
            model: &self.model,
            prompt: &request.prompt,
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .map_err(|e| LlmError::RequestFailed(e.without_url().to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .map_err(|e| LlmError::RequestFailed(e.without_url().to_string()))?;

        let result = self.parse_response(status, &text);
        if let Err(e) = &result {
            warn!(error = %e, "Completion failed");
        }
        result
    }
}
