//! Multimodal design input collected before a generation request

use crate::float_types::Real;
use serde::{Deserialize, Serialize};

/// A freehand sketch: the rendered canvas plus the raw strokes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SketchData {
    /// PNG data URL (`data:image/png;base64,...`) or bare base64.
    pub image_data: String,
    #[serde(default)]
    pub strokes: Vec<Vec<StrokePoint>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokePoint {
    pub x: Real,
    pub y: Real,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<Real>,
    /// Milliseconds since the epoch.
    pub timestamp: u64,
}

/// One recognised utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceInput {
    pub transcript: String,
    pub confidence: Real,
    pub timestamp: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInput {
    pub text: String,
    pub timestamp: u64,
}

/// Everything the user has sketched, said or typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultimodalInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sketch: Option<SketchData>,
    #[serde(default)]
    pub voice: Vec<VoiceInput>,
    #[serde(default)]
    pub text: Vec<TextInput>,
}

impl MultimodalInput {
    /// `true` when there is nothing to send.
    pub fn is_empty(&self) -> bool {
        self.voice.is_empty()
            && self.text.is_empty()
            && self
                .sketch
                .as_ref()
                .is_none_or(|sketch| sketch.image_data.is_empty())
    }
}
