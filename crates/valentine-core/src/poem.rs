//! Love poem generation
//!
//! One optional call to a hosted text-generation API. The public surface
//! never fails: a missing credential, a provider error, or blank output each
//! map to their own canned fallback line. Exactly one attempt per call, no
//! retries.

use reqwest::Client;
use serde_json::{json, Value};

use crate::config::PoemConfig;
use crate::error::{CardError, CardResult};

/// Fixed prompt sent to the provider.
pub const POEM_PROMPT: &str = "Write a very short, cute, funny, \
    pixel-video-game themed love poem (max 4 lines). Mention 'player 2' or \
    'level up'. Do not include markdown formatting like backticks.";

/// Returned when no credential is configured (no network attempt).
pub const NO_KEY_FALLBACK: &str = "Roses are red, violets are blue, \
    I don't have an API key, but I still love you!";

/// Returned when the provider answers with blank text.
pub const BLANK_FALLBACK: &str = "You are my favorite player 2!";

/// Returned on any provider failure.
pub const FAILURE_FALLBACK: &str = "Error loading love module... but I still love you!";

/// Client for the poem provider.
pub struct PoemService {
    client: Client,
    config: PoemConfig,
}

impl PoemService {
    pub fn new(config: PoemConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Build a service from process environment.
    pub fn from_env() -> Self {
        Self::new(PoemConfig::from_env())
    }

    /// Generate a short love poem. Never raises; every failure path
    /// resolves to a fixed fallback line.
    pub async fn generate_poem(&self) -> String {
        if !self.config.has_credential() {
            tracing::warn!("no poem credential configured, using fallback poem");
            return NO_KEY_FALLBACK.to_string();
        }

        match self.request_poem().await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => BLANK_FALLBACK.to_string(),
            Err(e) => {
                tracing::warn!("poem generation failed: {}", e);
                FAILURE_FALLBACK.to_string()
            }
        }
    }

    /// One provider attempt. Blank or missing text comes back as an empty
    /// string; the caller decides the fallback.
    async fn request_poem(&self) -> CardResult<String> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(CardError::MissingCredential)?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint, self.config.model
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": POEM_PROMPT }] }],
            "generationConfig": {
                "maxOutputTokens": self.config.max_output_tokens,
                "temperature": self.config.temperature,
            },
        });

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CardError::ProviderStatus(response.status().as_u16()));
        }

        let payload: Value = response.json().await?;
        let text = payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .unwrap_or_default();
        Ok(text.to_string())
    }
}
