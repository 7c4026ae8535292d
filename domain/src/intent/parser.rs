//! Intent parsing from task-model responses.
//!
//! Extracts structured [`ResolvedIntent`]s from the free-text completion the
//! task model returns. Two response shapes are accepted, probed in order:
//!
//! 1. A single JSON object `{"name": ..., "parameters": {...}}`
//! 2. A JSON object with a `tool_calls` array of such objects
//!
//! Anything else is malformed and yields no intents. Validation is
//! per-entry: a `tool_calls` array mixing valid and malformed/unknown
//! entries still yields the valid ones, in their order of appearance.

use serde::{Deserialize, Serialize};

use crate::tool::entities::ToolSpec;

/// A structured `{tool_name, parameters}` extracted from model output.
///
/// Ephemeral: produced and consumed within a single handler invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedIntent {
    pub tool_name: String,
    pub parameters: serde_json::Map<String, serde_json::Value>,
}

impl ResolvedIntent {
    pub fn new(
        tool_name: impl Into<String>,
        parameters: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            tool_name: tool_name.into(),
            parameters,
        }
    }
}

/// Parse a task-model response into zero or more intents.
///
/// Returns an empty vec for non-JSON responses, JSON of an unexpected shape,
/// or entries that fail per-entry validation — tool use is best-effort and a
/// malformed response never fails the turn.
pub fn parse_intent_response(response: &str, specs: &[ToolSpec]) -> Vec<ResolvedIntent> {
    let Ok(parsed) = serde_json::from_str::<serde_json::Value>(response.trim()) else {
        return Vec::new();
    };

    // Shape 1: single intent object
    if parsed.get("name").is_some() {
        return parse_single_intent(&parsed, specs).into_iter().collect();
    }

    // Shape 2: wrapped tool_calls array
    if let Some(calls) = parsed.get("tool_calls").and_then(|v| v.as_array()) {
        return calls
            .iter()
            .filter_map(|entry| parse_single_intent(entry, specs))
            .collect();
    }

    Vec::new()
}

/// Parse one `{name, parameters}` object into an intent.
///
/// Returns `None` when the value is not an object, `name` is missing or
/// empty, or the name is not among the supplied specs. A missing
/// `parameters` object defaults to empty.
pub fn parse_single_intent(
    value: &serde_json::Value,
    specs: &[ToolSpec],
) -> Option<ResolvedIntent> {
    let name = value.get("name")?.as_str()?;
    if name.is_empty() || !specs.iter().any(|s| s.name == name) {
        return None;
    }

    let parameters = value
        .get("parameters")
        .and_then(|v| v.as_object())
        .cloned()
        .unwrap_or_default();

    Some(ResolvedIntent::new(name, parameters))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs() -> Vec<ToolSpec> {
        vec![
            ToolSpec::new("test_tool", "A tool for testing"),
            ToolSpec::new("second_tool", "Another tool"),
        ]
    }

    #[test]
    fn test_parse_single_intent_shape() {
        let response = r#"{"name": "test_tool", "parameters": {"param1": "value1"}}"#;
        let intents = parse_intent_response(response, &specs());

        assert_eq!(intents.len(), 1);
        assert_eq!(intents[0].tool_name, "test_tool");
        assert_eq!(
            intents[0].parameters.get("param1"),
            Some(&serde_json::Value::String("value1".to_string()))
        );
    }

    #[test]
    fn test_parse_tool_calls_array_preserves_order() {
        let response = r#"{"tool_calls": [
            {"name": "test_tool", "parameters": {"param1": "value1"}},
            {"name": "second_tool", "parameters": {"param2": "value2"}}
        ]}"#;
        let intents = parse_intent_response(response, &specs());

        assert_eq!(intents.len(), 2);
        assert_eq!(intents[0].tool_name, "test_tool");
        assert_eq!(intents[1].tool_name, "second_tool");
    }

    #[test]
    fn test_plain_text_yields_nothing() {
        let response = "I don't think any tool is needed here.";
        assert!(parse_intent_response(response, &specs()).is_empty());
    }

    #[test]
    fn test_malformed_json_yields_nothing() {
        let response = r#"{"name": "test_tool", "parameters": "#;
        assert!(parse_intent_response(response, &specs()).is_empty());
    }

    #[test]
    fn test_missing_name_yields_nothing() {
        let response = r#"{"parameters": {"param1": "value1"}}"#;
        assert!(parse_intent_response(response, &specs()).is_empty());
    }

    #[test]
    fn test_unknown_tool_name_is_dropped() {
        let response = r#"{"name": "not_registered", "parameters": {}}"#;
        assert!(parse_intent_response(response, &specs()).is_empty());
    }

    #[test]
    fn test_partial_success_keeps_valid_entries() {
        // One valid, one unknown, one with no name: only the valid survives
        let response = r#"{"tool_calls": [
            {"name": "unknown_tool", "parameters": {}},
            {"name": "second_tool", "parameters": {"param2": "v"}},
            {"parameters": {"x": 1}}
        ]}"#;
        let intents = parse_intent_response(response, &specs());

        assert_eq!(intents.len(), 1);
        assert_eq!(intents[0].tool_name, "second_tool");
    }

    #[test]
    fn test_missing_parameters_default_to_empty() {
        let response = r#"{"name": "test_tool"}"#;
        let intents = parse_intent_response(response, &specs());

        assert_eq!(intents.len(), 1);
        assert!(intents[0].parameters.is_empty());
    }

    #[test]
    fn test_non_object_json_yields_nothing() {
        assert!(parse_intent_response(r#""just a string""#, &specs()).is_empty());
        assert!(parse_intent_response("[1, 2, 3]", &specs()).is_empty());
        assert!(parse_intent_response("42", &specs()).is_empty());
    }

    #[test]
    fn test_tool_calls_not_an_array_yields_nothing() {
        let response = r#"{"tool_calls": {"name": "test_tool"}}"#;
        assert!(parse_intent_response(response, &specs()).is_empty());
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        let response = "\n  {\"name\": \"test_tool\", \"parameters\": {}}  \n";
        assert_eq!(parse_intent_response(response, &specs()).len(), 1);
    }
}
