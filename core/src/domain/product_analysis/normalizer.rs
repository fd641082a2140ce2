use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;

use crate::domain::common::entities::app_errors::{
    CoreError, RAW_TEXT_PREVIEW_LIMIT, truncate_chars,
};

static OPENING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^```(?:json|JSON)?[ \t]*\r?\n?").expect("valid fence regex"));

static CLOSING_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n?```\s*$").expect("valid fence regex"));

/// Removes a leading code fence (optionally tagged `json`) and its matching closing fence.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(opening) = OPENING_FENCE.find(trimmed) else {
        return trimmed;
    };

    let body = &trimmed[opening.end()..];
    match CLOSING_FENCE.find(body) {
        Some(closing) => &body[..closing.start()],
        None => body,
    }
}

/// Returns the span of the first complete JSON object, scanning brace depth from the first `{`.
///
/// Braces inside string literals are ignored. When the object never closes, the span from the
/// first `{` to the last `}` is returned so the parser can report the problem.
pub fn find_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Some(&text[start..end]);
                }
            }
            _ => {}
        }
    }

    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Strips fences and prose from a model answer, leaving the embedded JSON object text.
pub fn extract_json(raw: &str) -> Result<&str, CoreError> {
    let unfenced = strip_code_fences(raw);

    find_json_object(unfenced).ok_or_else(|| {
        let preview = truncate_chars(raw.trim(), RAW_TEXT_PREVIEW_LIMIT);
        warn!(preview = %preview, "No JSON object found in model response");
        CoreError::MalformedResponse(format!("no JSON object found. Response: {preview}"))
    })
}
