//! Blocking client for the Gemini `generateContent` endpoint.

use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use slidesmith_core::Definitions;

use crate::error::{LlmError, Result};
use crate::prompt::{design_doc_prompt, markup_prompt, strip_code_fence, Prompt};
use crate::settings::GenerationSettings;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const API_KEY_HEADER: &str = "x-goog-api-key";
const MAX_OUTPUT_TOKENS: u32 = 8192;
const DESIGN_DOC_TEMPERATURE: f32 = 0.2;
const MARKUP_TEMPERATURE: f32 = 0.1;

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Debug)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize, Debug)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize, Debug, Default)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug, Default)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Deserialize, Debug, Default)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug, Default)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// Standard Google API error body.
#[derive(Deserialize, Debug)]
struct GoogleApiErrorResponse {
    error: GoogleApiErrorDetail,
}

#[derive(Deserialize, Debug)]
struct GoogleApiErrorDetail {
    message: String,
}

/// Client for one API key and model.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a client for the default model. Rejects an empty key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LlmError::InvalidInput("API key cannot be empty".to_string()));
        }

        Ok(Self {
            http: reqwest::blocking::Client::new(),
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point the client at another endpoint root, e.g. a local proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Draft a design document from a manuscript.
    pub fn generate_design_doc(
        &self,
        manuscript: &str,
        definitions: &Definitions,
        settings: &GenerationSettings,
    ) -> Result<String> {
        if manuscript.trim().is_empty() {
            return Err(LlmError::InvalidInput("Manuscript cannot be empty".to_string()));
        }

        let prompt = design_doc_prompt(manuscript, definitions, settings);
        self.generate(&prompt, DESIGN_DOC_TEMPERATURE)
    }

    /// Produce Marp markup from a design document. A code fence around the
    /// answer is removed.
    pub fn generate_markup(
        &self,
        design_doc: &str,
        definitions: &Definitions,
        stylesheet: &str,
    ) -> Result<String> {
        if design_doc.trim().is_empty() {
            return Err(LlmError::InvalidInput("Design document cannot be empty".to_string()));
        }

        let prompt = markup_prompt(design_doc, definitions, stylesheet);
        let text = self.generate(&prompt, MARKUP_TEMPERATURE)?;
        Ok(strip_code_fence(&text).to_string())
    }

    /// Send one prompt and return the generated text.
    pub fn generate(&self, prompt: &Prompt, temperature: f32) -> Result<String> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let body = request_body(prompt, temperature);

        debug!("POST {} ({} prompt bytes)", url, prompt.user.len());
        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()?;

        let status = response.status();
        let text = response.text()?;
        decode_response(status, &text)
    }
}

fn request_body(prompt: &Prompt, temperature: f32) -> GenerateRequest<'_> {
    GenerateRequest {
        contents: vec![Content {
            parts: vec![Part { text: &prompt.user }],
        }],
        system_instruction: Content {
            parts: vec![Part {
                text: &prompt.system,
            }],
        },
        generation_config: GenerationConfig {
            temperature,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        },
    }
}

/// Turn a status and response body into generated text or an error.
pub fn decode_response(status: StatusCode, body: &str) -> Result<String> {
    if !status.is_success() {
        let message = match serde_json::from_str::<GoogleApiErrorResponse>(body) {
            Ok(api_error) => api_error.error.message,
            Err(_) => format!("API request failed with status {}: {}", status, body),
        };
        return Err(LlmError::Api { status, message });
    }

    let response: GenerateResponse = serde_json::from_str(body)?;
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .map(|c| {
            c.content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(LlmError::EmptyResponse);
    }
    Ok(text)
}
