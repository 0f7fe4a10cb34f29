//! Response parsing: extract one JSON object from free-form model text.
//!
//! Hosted completion services do not reliably honor "JSON only"
//! instructions; the object may arrive wrapped in prose or markdown
//! fencing. Extraction is an ordered list of independent strategies, first
//! success wins, and only exhaustion of all of them is an error.
use anyhow::Result;
use regex::Regex;
use serde_json::Value;

use crate::error::GeneratorError;

/// Maximum number of response characters echoed in a parse failure.
const EXCERPT_CHARS: usize = 500;

/// Parse a completion response into a JSON value.
pub fn parse_response(text: &str) -> Result<Value> {
    const STRATEGIES: [fn(&str) -> Option<Value>; 3] =
        [parse_direct, parse_fenced, parse_brace_span];

    for strategy in STRATEGIES {
        if let Some(value) = strategy(text) {
            return Ok(value);
        }
    }

    Err(GeneratorError::Parse {
        excerpt: excerpt(text),
    }
    .into())
}

/// Strategy 1: the whole response is already valid JSON.
fn parse_direct(text: &str) -> Option<Value> {
    serde_json::from_str(text).ok()
}

/// Strategy 2: a fenced code block, optionally tagged as json.
fn parse_fenced(text: &str) -> Option<Value> {
    let fence = Regex::new(r#"(?s)```(?:json)?\s*(\{\s*".*?\})\s*```"#).unwrap();
    let captures = fence.captures(text)?;
    serde_json::from_str(captures.get(1)?.as_str()).ok()
}

/// Strategy 3: the span from the first `{` to the last `}`.
fn parse_brace_span(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

fn excerpt(text: &str) -> String {
    text.chars().take(EXCERPT_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: &str = r#"{"name": "Piano", "duration": 4, "workouts": []}"#;

    #[test]
    fn test_direct_json_parses() {
        let value = parse_response(PLAN).expect("direct parse");
        assert_eq!(value, serde_json::from_str::<Value>(PLAN).unwrap());
    }

    #[test]
    fn test_tagged_fence_with_surrounding_prose() {
        let text = format!("Ecco il piano richiesto:\n```json\n{PLAN}\n```\nBuon allenamento!");
        let value = parse_response(&text).expect("fenced parse");
        assert_eq!(value, serde_json::from_str::<Value>(PLAN).unwrap());
    }

    #[test]
    fn test_untagged_fence() {
        let text = format!("```\n{PLAN}\n```");
        let value = parse_response(&text).expect("fenced parse");
        assert_eq!(value, serde_json::from_str::<Value>(PLAN).unwrap());
    }

    #[test]
    fn test_object_embedded_mid_paragraph() {
        let text = format!("Il piano e' il seguente: {PLAN} come da richiesta.");
        let value = parse_response(&text).expect("brace-span parse");
        assert_eq!(value, serde_json::from_str::<Value>(PLAN).unwrap());
    }

    #[test]
    fn test_fence_preferred_over_stray_braces() {
        let text = format!("Nota su {{parentesi}} nel testo:\n```json\n{PLAN}\n```");
        let value = parse_response(&text).expect("fenced parse");
        assert_eq!(value, serde_json::from_str::<Value>(PLAN).unwrap());
    }

    #[test]
    fn test_unparseable_text_reports_excerpt() {
        let err = parse_response("nessun oggetto qui").expect_err("must fail");
        let message = format!("{err}");
        assert!(message.contains("nessun oggetto qui"));
    }

    #[test]
    fn test_excerpt_is_truncated_to_limit() {
        let text = "x".repeat(EXCERPT_CHARS + 200);
        let err = parse_response(&text).expect_err("must fail");
        match err.downcast_ref::<GeneratorError>() {
            Some(GeneratorError::Parse { excerpt }) => {
                assert_eq!(excerpt.chars().count(), EXCERPT_CHARS);
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
