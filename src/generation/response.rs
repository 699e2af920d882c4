//! Parsing model responses into wing parameters

use crate::generation::GenerationError;
use crate::wing::WingParameters;

/// Body of the first fenced block opened by `fence`, if any.
fn fenced_block<'a>(text: &'a str, fence: &str) -> Option<&'a str> {
    let start = text.find(fence)? + fence.len();
    let rest = &text[start..];
    // the fence line must end right after the opener
    let body_start = rest.find('\n')?;
    if !rest[..body_start].trim().is_empty() {
        return None;
    }
    let body = &rest[body_start + 1..];
    let end = body.find("```")?;
    Some(body[..end].trim())
}

/// Pulls the JSON object out of a model response.
///
/// Handles ```` ```json ```` fences, bare ```` ``` ```` fences and unfenced
/// text. Unfenced text with surrounding prose is cut down to the outermost
/// `{ ... }`.
pub fn extract_json(text: &str) -> &str {
    if let Some(body) = fenced_block(text, "```json").or_else(|| fenced_block(text, "```")) {
        return body;
    }

    let trimmed = text.trim();
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(open), Some(close)) if open < close => &trimmed[open..=close],
        _ => trimmed,
    }
}

/// Parses a model response into validated parameters.
///
/// A missing or inconsistent `tipChord` is backfilled from
/// `rootChord * taperRatio`. The raw text is kept in the error for
/// diagnostics.
pub fn parse_response(text: &str) -> Result<WingParameters, GenerationError> {
    let json = extract_json(text);
    let params: WingParameters = serde_json::from_str(json).map_err(|err| {
        tracing::error!(%err, raw = text, "failed to parse wing parameters from model response");
        GenerationError::Parse {
            message: err.to_string(),
            raw: text.to_string(),
        }
    })?;

    let params = params.normalized();
    params.validate().map_err(|source| GenerationError::Invalid {
        source,
        raw: text.to_string(),
    })?;
    Ok(params)
}
