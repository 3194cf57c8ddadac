//! Prompt-to-theme adapter.
//!
//! Turns a free-text mood description into a [`ThemeSuggestion`] by asking
//! a generative model for the grid parameters. One request per call, no
//! streaming, no retries: a failure is a single terminal [`GenerationError`].
//!
//! The adapter only rejects structurally invalid answers. It does not clamp
//! the numbers; callers apply [`GridConfig::sanitized`] before use.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::models::{ColumnMode, GridConfig, ThemeSuggestion};
use crate::palette::sampler::RANDOM_GRID_SIZE;

/// Failure of a theme generation request.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// No API key was available.
    #[error("no API key found: set the {0} environment variable")]
    MissingApiKey(String),
    /// The prompt was empty.
    #[error("prompt cannot be empty")]
    EmptyPrompt,
    /// The HTTP request could not be completed.
    #[error("request to model failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The model endpoint answered with a non-success status.
    #[error("model returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as returned
        body: String,
    },
    /// The response carried no text candidate.
    #[error("model returned no content")]
    EmptyResponse,
    /// The returned payload did not match the theme schema.
    #[error("invalid theme payload: {0}")]
    InvalidPayload(String),
}

/// Turns a prompt into a suggested configuration plus name and description.
#[async_trait]
pub trait PromptToThemeAdapter: Send + Sync {
    /// Generates a theme suggestion for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<ThemeSuggestion, GenerationError>;
}

/// Adapter for the Gemini `generateContent` endpoint.
pub struct GeminiAdapter {
    endpoint: String,
    model: String,
    api_key: String,
    temperature: f32,
    client: reqwest::Client,
}

/// Theme fields as returned by the model. Every field is required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTheme {
    base_hue: f64,
    base_sat: f64,
    base_light: f64,
    hue_step: f64,
    sat_step: f64,
    light_step: f64,
    column_mode: ColumnMode,
    name: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiAdapter {
    /// Creates an adapter from generator settings, reading the API key from
    /// the configured environment variable.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, GenerationError> {
        let api_key = config
            .api_key()
            .ok_or_else(|| GenerationError::MissingApiKey(config.api_key_env.clone()))?;
        Self::new(config, api_key)
    }

    /// Creates an adapter with an explicit API key.
    pub fn new(config: &GeneratorConfig, api_key: impl Into<String>) -> Result<Self, GenerationError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: api_key.into(),
            temperature: config.temperature,
            client,
        })
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "contents": [
                { "role": "user", "parts": [ { "text": build_prompt(prompt) } ] }
            ],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
                "temperature": self.temperature,
            }
        })
    }
}

#[async_trait]
impl PromptToThemeAdapter for GeminiAdapter {
    async fn generate(&self, prompt: &str) -> Result<ThemeSuggestion, GenerationError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(GenerationError::EmptyPrompt);
        }

        let url = format!("{}/v1beta/models/{}:generateContent", self.endpoint, self.model);
        info!(model = %self.model, "Requesting theme from model");

        let res = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&self.request_body(prompt))
            .send()
            .await?;

        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| GenerationError::InvalidPayload(format!("unexpected response envelope: {e}")))?;

        let content = parsed
            .candidates
            .into_iter()
            .filter_map(|candidate| candidate.content)
            .flat_map(|content| content.parts)
            .find_map(|part| part.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or(GenerationError::EmptyResponse)?;

        debug!(bytes = content.len(), "Received theme payload");
        parse_suggestion(&content)
    }
}

/// Builds the instruction text sent to the model.
fn build_prompt(concept: &str) -> String {
    format!(
        "Create a color grid configuration based on the concept: \"{concept}\".\n\
         The grid has rows that vary by Hue, and columns that vary by either Lightness or Saturation.\n\
         Ensure the steps create a visually pleasing and coherent palette.\n\
         For 'baseLight' or 'baseSat', try to pick values that allow the steps to not clip immediately.\n\
         If columnMode is 'lightness', lightStep is used. If 'saturation', satStep is used."
    )
}

/// JSON schema the model must answer with.
fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "baseHue": { "type": "NUMBER", "description": "Starting Hue (0-360)" },
            "baseSat": { "type": "NUMBER", "description": "Starting Saturation (0-100)" },
            "baseLight": { "type": "NUMBER", "description": "Starting Lightness (0-100)" },
            "hueStep": { "type": "NUMBER", "description": "Step size for Hue change per row" },
            "satStep": { "type": "NUMBER", "description": "Step size for Saturation change (can be negative)" },
            "lightStep": { "type": "NUMBER", "description": "Step size for Lightness change (can be negative)" },
            "columnMode": {
                "type": "STRING",
                "enum": ["lightness", "saturation"],
                "description": "Whether columns vary lightness or saturation"
            },
            "name": { "type": "STRING", "description": "A creative name for this theme" },
            "description": { "type": "STRING", "description": "Short explanation of the theme choice" }
        },
        "required": [
            "baseHue", "baseSat", "baseLight", "hueStep", "satStep", "lightStep",
            "columnMode", "name", "description"
        ]
    })
}

/// Parses the model's JSON text into a suggestion.
///
/// Tolerates markdown code fences around the object. Rows and columns are
/// not model-chosen; they are fixed so the grid stays stable.
pub fn parse_suggestion(raw: &str) -> Result<ThemeSuggestion, GenerationError> {
    let trimmed = raw.trim();
    let json_str = match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => trimmed,
    };

    let theme: RawTheme =
        serde_json::from_str(json_str).map_err(|e| GenerationError::InvalidPayload(e.to_string()))?;

    let numbers = [
        ("baseHue", theme.base_hue),
        ("baseSat", theme.base_sat),
        ("baseLight", theme.base_light),
        ("hueStep", theme.hue_step),
        ("satStep", theme.sat_step),
        ("lightStep", theme.light_step),
    ];
    if let Some((field, _)) = numbers.iter().find(|(_, value)| !value.is_finite()) {
        return Err(GenerationError::InvalidPayload(format!("{field} is not a finite number")));
    }

    Ok(ThemeSuggestion {
        name: theme.name,
        description: theme.description,
        config: GridConfig {
            base_hue: theme.base_hue,
            base_sat: theme.base_sat,
            base_light: theme.base_light,
            hue_step: theme.hue_step,
            sat_step: theme.sat_step,
            light_step: theme.light_step,
            rows: RANDOM_GRID_SIZE,
            cols: RANDOM_GRID_SIZE,
            column_mode: theme.column_mode,
        },
    })
}
