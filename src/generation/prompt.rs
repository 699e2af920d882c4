//! Prompt construction for the wing parameter model

use crate::generation::MultimodalInput;
use std::fmt::Write;

const PREAMBLE: &str = "You are an expert aerospace engineer specializing in aircraft wing design.
Based on the following input, generate detailed wing parameters in JSON format.
";

const SCHEMA: &str = r##"
Please analyze the requirements and generate wing parameters with the following structure:
{
  "airfoilType": "NACA XXXX",
  "wingspan": number (in mm, range 1000-5000),
  "rootChord": number (in mm, range 200-1500),
  "tipChord": number (calculated based on taper ratio),
  "taperRatio": number (range 0.3-1.0),
  "sweepAngle": number (in degrees, range 0-45),
  "dihedralAngle": number (in degrees, range -5 to 15),
  "nRibs": number (range 4-20),
  "sparCount": number (range 1-4),
  "hasLighteningHoles": boolean,
  "holeRadius": number (in mm, range 10-50),
  "holeSpacing": number (in mm, range 50-200),
  "material": string (e.g., "Aluminum 2mm", "Titanium 3mm", "Composite"),
  "thickness": number (in mm, range 1-5),
  "color": string (hex color - greys, whites or pastels such as #9ca3af, #d8b4fe, #a7f3d0, #fbbf24, #fca5a5; no blues),
  "opacity": number (range 0.1-1.0)
}

Important considerations:
- Fighter jets: high sweep (25-45°), symmetric airfoils (NACA 00XX), lower aspect ratio, grey colors
- Commercial aircraft: moderate sweep (20-30°), cambered airfoils (NACA 2XXX), higher aspect ratio, positive dihedral (3-7°), pastel lavender
- Cargo aircraft: low sweep (10-20°), thick airfoils (NACA 4XXX), positive dihedral (2-5°), pastel mint green
- Delta/triangular wings ("pointed like pizza"): very low taper ratio (0.2-0.3), high sweep (40-60°), symmetric airfoils
- Taper ratio = tipChord / rootChord (lower = more pointed/triangular)
- Calculate tipChord from rootChord and the taper ratio
- Use monochrome or pastel colors only, no blues

Provide ONLY the JSON object, no additional text or explanation."##;

const SKETCH_HINT: &str =
    "\nThe above sketch shows the desired wing shape. Consider the proportions and angles shown.";

/// One piece of a multimodal prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptPart {
    Text(String),
    /// Base64 payload without any data-URL prefix.
    InlineImage { mime_type: String, data: String },
}

/// An ordered multimodal prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prompt {
    pub parts: Vec<PromptPart>,
}

impl Prompt {
    /// The instruction text (the first part).
    pub fn text(&self) -> &str {
        match self.parts.first() {
            Some(PromptPart::Text(text)) => text,
            _ => "",
        }
    }

    pub fn has_image(&self) -> bool {
        self.parts
            .iter()
            .any(|part| matches!(part, PromptPart::InlineImage { .. }))
    }
}

/// Strips a `data:<mime>;base64,` prefix, returning the mime type if one was present.
fn split_data_url(image_data: &str) -> (Option<&str>, &str) {
    match image_data.split_once(',') {
        Some((header, payload)) => {
            let mime = header
                .strip_prefix("data:")
                .and_then(|rest| rest.split(';').next())
                .filter(|mime| !mime.is_empty());
            (mime, payload)
        },
        None => (None, image_data),
    }
}

/// Builds the prompt: instructions with every text description and voice
/// transcript, followed by the sketch image and a hint about it when a sketch
/// is present.
pub fn build_prompt(input: &MultimodalInput) -> Prompt {
    let mut text = String::from(PREAMBLE);

    if !input.text.is_empty() {
        text.push_str("\nText descriptions:\n");
        for entry in &input.text {
            let _ = writeln!(text, "- {}", entry.text);
        }
    }

    if !input.voice.is_empty() {
        text.push_str("\nVoice commands:\n");
        for entry in &input.voice {
            let _ = writeln!(text, "- {}", entry.transcript);
        }
    }

    text.push('\n');
    text.push_str(SCHEMA);

    let mut parts = vec![PromptPart::Text(text)];

    if let Some(sketch) = input.sketch.as_ref().filter(|s| !s.image_data.is_empty()) {
        let (mime, payload) = split_data_url(&sketch.image_data);
        parts.push(PromptPart::InlineImage {
            mime_type: mime.unwrap_or("image/png").to_string(),
            data: payload.to_string(),
        });
        parts.push(PromptPart::Text(SKETCH_HINT.to_string()));
    }

    Prompt { parts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::{SketchData, TextInput, VoiceInput};

    #[test]
    fn text_and_voice_are_listed() {
        let input = MultimodalInput {
            text: vec![TextInput {
                text: "swept delta wing".to_string(),
                timestamp: 1,
            }],
            voice: vec![VoiceInput {
                transcript: "make it pointed like pizza".to_string(),
                confidence: 0.9,
                timestamp: 2,
            }],
            sketch: None,
        };
        let prompt = build_prompt(&input);
        assert_eq!(prompt.parts.len(), 1);
        assert!(prompt.text().contains("Text descriptions:\n- swept delta wing\n"));
        assert!(prompt.text().contains("Voice commands:\n- make it pointed like pizza\n"));
        assert!(prompt.text().ends_with("no additional text or explanation."));
        assert!(!prompt.has_image());
    }

    #[test]
    fn sketch_becomes_inline_image() {
        let input = MultimodalInput {
            sketch: Some(SketchData {
                image_data: "data:image/png;base64,iVBORw0KGgo=".to_string(),
                strokes: vec![],
            }),
            ..MultimodalInput::default()
        };
        let prompt = build_prompt(&input);
        assert_eq!(prompt.parts.len(), 3);
        assert_eq!(
            prompt.parts[1],
            PromptPart::InlineImage {
                mime_type: "image/png".to_string(),
                data: "iVBORw0KGgo=".to_string(),
            }
        );
        assert!(!prompt.text().contains("Text descriptions"));
    }
}
