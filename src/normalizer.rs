//! Response normalization
//!
//! Converts the model's raw text into a well-typed [`ModelReply`]: strips a
//! markdown code fence when the model disobeys the no-markdown instruction,
//! parses the remainder as JSON, and checks the minimal required shape.

use serde_json::Value;
use tracing::warn;

use crate::error::{ServerError, ServerResult};
use crate::flowchart::ModelReply;

/// Strip a fenced code block wrapper, if present.
///
/// Handles both ``` and ```json openers; the info string on the opening line
/// is discarded along with the delimiters.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    warn!("Model response was wrapped in a code fence despite instructions");

    // Drop the info string (e.g. "json") up to the end of the opening line.
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
}

/// Normalize the model's raw text into a validated reply.
///
/// The parsed object is passed through unchanged; only the presence of the
/// discriminating keys is checked here.
pub fn normalize(raw: &str) -> ServerResult<ModelReply> {
    let cleaned = strip_code_fence(raw);

    let value: Value = serde_json::from_str(cleaned).map_err(|_| ServerError::MalformedResponse {
        raw: raw.to_string(),
    })?;

    let Value::Object(map) = value else {
        return Err(ServerError::InvalidShape(
            "model response is not a JSON object".to_string(),
        ));
    };

    if map.contains_key("nodes") && map.contains_key("edges") {
        Ok(ModelReply::Graph(map))
    } else if map.contains_key("requires_clarification") {
        Ok(ModelReply::Clarification(map))
    } else {
        Err(ServerError::InvalidShape(
            "model response is missing both a nodes/edges graph and a clarification".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plain_text_is_left_untouched() {
        assert_eq!(strip_code_fence(r#"{"nodes": []}"#), r#"{"nodes": []}"#);
    }

    #[test]
    fn json_fence_is_stripped() {
        let fenced = "```json\n{\"nodes\": [], \"edges\": []}\n```";
        assert_eq!(strip_code_fence(fenced), "{\"nodes\": [], \"edges\": []}");
    }

    #[test]
    fn bare_fence_is_stripped() {
        let fenced = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_code_fence(fenced), "{\"a\": 1}");
    }

    #[test]
    fn fence_stripping_round_trips() {
        let body = r#"{"nodes": [{"id": "1"}], "edges": []}"#;
        let fenced = format!("```json\n{}\n```", body);
        assert_eq!(strip_code_fence(&fenced), strip_code_fence(body));
    }

    #[test]
    fn graph_reply_passes_through_unchanged() {
        let body = json!({
            "nodes": [{ "id": "1", "extra": "kept" }],
            "edges": [],
            "vendor_key": "also kept"
        });
        let reply = normalize(&body.to_string()).unwrap();
        assert!(reply.is_graph());
        assert_eq!(Value::Object(reply.as_object().clone()), body);
    }

    #[test]
    fn clarification_reply_is_recognized() {
        let body = json!({
            "requires_clarification": true,
            "message": "What process should I chart?"
        });
        let reply = normalize(&body.to_string()).unwrap();
        assert!(reply.is_clarification());
    }

    #[test]
    fn malformed_response_keeps_the_exact_raw_text() {
        let raw = "I'm sorry, I can't do that.";
        let err = normalize(raw).unwrap_err();
        match err {
            ServerError::MalformedResponse { raw: kept } => assert_eq!(kept, raw),
            other => panic!("expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn valid_json_without_required_keys_is_rejected() {
        let err = normalize(r#"{"answer": 42}"#).unwrap_err();
        assert!(matches!(err, ServerError::InvalidShape(_)));
    }

    #[test]
    fn non_object_json_is_rejected() {
        let err = normalize("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, ServerError::InvalidShape(_)));
    }
}
