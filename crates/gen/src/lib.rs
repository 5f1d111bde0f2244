#![forbid(unsafe_code)]

use serde::Deserialize;
use serde_json::{Value, json};
use std::time::Duration;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

// A hung upstream must not wedge the stdio session forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

const MAX_ERROR_BODY_CHARS: usize = 400;

#[derive(Debug)]
pub enum GenError {
    MissingApiKey,
    Http(reqwest::Error),
    Api { status: u16, message: String },
    Empty,
}

impl std::fmt::Display for GenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "missing api key"),
            Self::Http(err) => write!(f, "http: {err}"),
            Self::Api { status, message } => {
                write!(f, "upstream status {status}: {message}")
            }
            Self::Empty => write!(f, "upstream returned no text"),
        }
    }
}

impl std::error::Error for GenError {}

impl From<reqwest::Error> for GenError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

/// One generation request. Optional fields are omitted from the wire body
/// when unset so the model's own defaults apply.
#[derive(Clone, Debug)]
pub struct GenRequest {
    pub prompt: String,
    pub system_prompt: Option<String>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
}

/// Blocking client for the `generateContent` REST endpoint.
pub struct GenClient {
    http: reqwest::blocking::Client,
    model: String,
    api_key: String,
}

impl GenClient {
    /// Fails when the credential is empty; callers are expected to keep
    /// running with generation disabled rather than abort.
    pub fn new(model: &str, api_key: &str) -> Result<Self, GenError> {
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(GenError::MissingApiKey);
        }
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            model: model.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn generate(&self, request: &GenRequest) -> Result<String, GenError> {
        let url = format!("{API_BASE}/models/{}:generateContent", self.model);
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&build_body(request))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = truncate(&response.text().unwrap_or_default(), MAX_ERROR_BODY_CHARS);
            return Err(GenError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = response.json()?;
        let text = extract_text(&parsed);
        if text.trim().is_empty() {
            return Err(GenError::Empty);
        }
        Ok(text)
    }
}

fn build_body(request: &GenRequest) -> Value {
    let mut body = json!({
        "contents": [
            { "role": "user", "parts": [ { "text": request.prompt } ] }
        ]
    });

    if let Some(system_prompt) = request.system_prompt.as_deref() {
        body["systemInstruction"] = json!({ "parts": [ { "text": system_prompt } ] });
    }

    let mut generation_config = serde_json::Map::new();
    if let Some(temperature) = request.temperature {
        generation_config.insert("temperature".to_string(), json!(temperature));
    }
    if let Some(top_p) = request.top_p {
        generation_config.insert("topP".to_string(), json!(top_p));
    }
    if !generation_config.is_empty() {
        body["generationConfig"] = Value::Object(generation_config);
    }

    body
}

fn extract_text(response: &GenerateResponse) -> String {
    let Some(candidate) = response.candidates.first() else {
        return String::new();
    };
    let Some(content) = candidate.content.as_ref() else {
        return String::new();
    };
    content
        .parts
        .iter()
        .filter_map(|part| part.text.as_deref())
        .collect::<Vec<_>>()
        .join("")
}

fn truncate(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
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
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
