//! Boundary to the generative model that proposes wing parameters.
//!
//! The model itself is reached through a [`WingModelClient`]; this module
//! owns prompt construction, response extraction and validation. A request is
//! a single attempt: failures are reported, never retried.

mod input;
mod prompt;
mod response;

pub use input::{MultimodalInput, SketchData, StrokePoint, TextInput, VoiceInput};
pub use prompt::{Prompt, PromptPart, build_prompt};
pub use response::{extract_json, parse_response};

use crate::errors::WingError;
use crate::wing::WingParameters;
use serde_json::{Value, json};

/// Why a generation request produced no usable parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    /// No sketch, voice or text was supplied.
    #[error("nothing to generate from: add a sketch, voice command or text description")]
    EmptyInput,
    /// The model could not be reached or refused the request.
    #[error("model request failed: {0}")]
    Client(String),
    /// The response held no parseable parameter object.
    #[error("failed to parse wing parameters from model response: {message}")]
    Parse { message: String, raw: String },
    /// The parameters parsed but cannot be meshed.
    #[error("model proposed invalid wing parameters: {source}")]
    Invalid {
        #[source]
        source: WingError,
        raw: String,
    },
}

impl GenerationError {
    /// The raw model text, when the model answered at all.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Self::EmptyInput | Self::Client(_) => None,
            Self::Parse { raw, .. } | Self::Invalid { raw, .. } => Some(raw),
        }
    }
}

/// Anything able to answer a [`Prompt`] with text.
pub trait WingModelClient {
    fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError>;
}

impl<F> WingModelClient for F
where
    F: Fn(&Prompt) -> Result<String, GenerationError>,
{
    fn generate(&self, prompt: &Prompt) -> Result<String, GenerationError> {
        self(prompt)
    }
}

/// Result of one generation request.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    Generated {
        parameters: WingParameters,
        raw_response: String,
    },
    Failed {
        reason: GenerationError,
    },
}

impl GenerationOutcome {
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Generated { .. })
    }

    pub fn parameters(&self) -> Option<&WingParameters> {
        match self {
            Self::Generated { parameters, .. } => Some(parameters),
            Self::Failed { .. } => None,
        }
    }

    pub fn raw_response(&self) -> Option<&str> {
        match self {
            Self::Generated { raw_response, .. } => Some(raw_response),
            Self::Failed { reason } => reason.raw_response(),
        }
    }

    /// JSON body in the shape the configurator front end expects:
    /// `{ success, parameters, rawResponse }` or `{ success: false, error }`.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Generated {
                parameters,
                raw_response,
            } => json!({
                "success": true,
                "parameters": parameters,
                "rawResponse": raw_response,
            }),
            Self::Failed { reason } => {
                let mut body = json!({ "success": false, "error": reason.to_string() });
                if let Some(raw) = reason.raw_response() {
                    body["rawResponse"] = json!(raw);
                }
                body
            },
        }
    }
}

/// Asks `client` for wing parameters matching `input`.
///
/// Empty input is refused without contacting the client.
pub fn generate_wing<C: WingModelClient + ?Sized>(
    client: &C,
    input: &MultimodalInput,
) -> GenerationOutcome {
    if input.is_empty() {
        tracing::warn!("refusing to generate a wing from empty input");
        return GenerationOutcome::Failed {
            reason: GenerationError::EmptyInput,
        };
    }

    let prompt = build_prompt(input);
    tracing::info!(
        texts = input.text.len(),
        voice = input.voice.len(),
        sketch = prompt.has_image(),
        "requesting wing parameters"
    );

    let raw_response = match client.generate(&prompt) {
        Ok(text) => text,
        Err(reason) => {
            tracing::error!(%reason, "wing generation request failed");
            return GenerationOutcome::Failed { reason };
        },
    };

    match parse_response(&raw_response) {
        Ok(parameters) => GenerationOutcome::Generated {
            parameters,
            raw_response,
        },
        Err(reason) => GenerationOutcome::Failed { reason },
    }
}
