use anyhow::Result;
use log::{debug, error};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::OracleError;
use crate::oracle::{prompts, response_token_limit, OracleRequest, TranslationOracle};
use async_trait::async_trait;

/// Oracle adapter for an Ollama-compatible generation endpoint.
#[derive(Debug)]
pub struct OllamaOracle {
    /// Base URL of the endpoint
    base_url: String,
    /// Model name to generate with
    model: String,
    /// HTTP client for making requests
    client: Client,
}

/// Generate request for the Ollama API
#[derive(Debug, Serialize)]
struct GenerationRequest {
    /// Model name to use for generation
    model: String,
    /// Prompt to generate from
    prompt: String,
    /// System message to guide the model
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
    /// Additional model parameters
    options: GenerationOptions,
    /// Whether to stream the response
    stream: bool,
}

/// Generation options for the Ollama API
#[derive(Debug, Serialize)]
struct GenerationOptions {
    /// Temperature for generation, 0 for deterministic translation
    temperature: f32,
    /// Maximum number of tokens to generate, derived from input length
    num_predict: u64,
}

/// Generation response from the Ollama API
#[derive(Debug, Deserialize)]
struct GenerationResponse {
    /// Generated text
    #[serde(default)]
    response: String,
    /// Whether the generation is complete
    #[serde(default)]
    done: bool,
}

impl OllamaOracle {
    /// Create a new oracle client against the given endpoint and model.
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self, OracleError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| OracleError::ConnectionError(e.to_string()))?;

        Ok(OllamaOracle {
            base_url: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client,
        })
    }
}

#[async_trait]
impl TranslationOracle for OllamaOracle {
    async fn translate(&self, request: &OracleRequest) -> Result<String, OracleError> {
        let url = format!("{}/api/generate", self.base_url);
        let num_predict = response_token_limit(request.text.chars().count());
        let body = GenerationRequest {
            model: self.model.clone(),
            prompt: request.text.clone(),
            system: Some(prompts::system_prompt(
                request.role,
                &request.language_name,
                request.guidance.as_deref(),
            )),
            options: GenerationOptions {
                temperature: 0.0,
                num_predict,
            },
            stream: false,
        };

        debug!(
            "oracle call: {} chars, cap {} tokens, role {:?}",
            request.text.chars().count(),
            num_predict,
            request.role
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| OracleError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error response body".to_string());
            error!("Ollama API error ({}): {}", status, message);
            return Err(OracleError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let parsed: GenerationResponse = response
            .json()
            .await
            .map_err(|e| OracleError::ParseError(e.to_string()))?;

        if !parsed.done {
            debug!("oracle response flagged incomplete, keeping partial text");
        }

        let text = parsed.response.trim().to_string();
        if text.is_empty() {
            return Err(OracleError::EmptyResponse);
        }

        Ok(text)
    }

    async fn test_connection(&self) -> Result<(), OracleError> {
        let url = format!("{}/api/version", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| OracleError::ConnectionError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(OracleError::ConnectionError(format!(
                "endpoint {} responded with status {}",
                self.base_url,
                response.status()
            )));
        }

        Ok(())
    }
}
