//! Poem provider configuration
//!
//! All settings come from process environment; a missing credential is a
//! normal state (the service degrades to a canned poem), never an error.

use std::env;

/// Default provider endpoint base.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default text-generation model.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Settings for the poem provider call.
#[derive(Debug, Clone)]
pub struct PoemConfig {
    /// Endpoint base, overridable for tests
    pub endpoint: String,
    /// Model identifier
    pub model: String,
    /// Provider credential; `None` means no network attempt is ever made
    pub api_key: Option<String>,
    /// Output length bound passed to the provider
    pub max_output_tokens: u32,
    /// Sampling temperature passed to the provider
    pub temperature: f32,
}

impl PoemConfig {
    /// Read configuration from the environment.
    ///
    /// The credential is taken from `GEMINI_API_KEY`, falling back to
    /// `API_KEY`; blank values count as absent.
    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .or_else(|| env::var("API_KEY").ok())
            .filter(|key| !key.trim().is_empty());
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key,
            max_output_tokens: 100,
            temperature: 0.8,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}
