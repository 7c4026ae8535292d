//! Prompt template for the tool-selection completion.
//!
//! The resolver asks the task model to pick a tool by sending a single
//! prompt built from this template. Two placeholders are substituted:
//! `{{TOOLS}}` (the available specs rendered as JSON) and
//! `{{USER_MESSAGE}}` (the latest user turn).

use crate::tool::entities::ToolSpec;

/// Built-in template used when no custom template is configured.
const DEFAULT_TEMPLATE: &str = r#"Available tools:

{{TOOLS}}

Based on the user's message, decide whether one of the available tools should be used. If so, respond with ONLY a JSON object of the form {"name": "tool name", "parameters": {"parameter name": "value"}}. To use several tools, respond with {"tool_calls": [{"name": ..., "parameters": ...}, ...]}. If no tool is appropriate, respond with an empty JSON object: {}.

User message:
{{USER_MESSAGE}}"#;

/// Template for generating the tool-selection prompt.
#[derive(Debug, Clone)]
pub struct ToolPromptTemplate {
    template: String,
}

impl ToolPromptTemplate {
    /// Use a custom template string. An empty string falls back to the
    /// built-in default, matching the configuration contract.
    pub fn new(template: impl Into<String>) -> Self {
        let template = template.into();
        if template.trim().is_empty() {
            Self::default()
        } else {
            Self { template }
        }
    }

    /// Render the prompt for the given tool specs and user message.
    pub fn render(&self, specs: &[ToolSpec], user_message: &str) -> String {
        let tools_json = Self::render_specs(specs);
        self.template
            .replace("{{TOOLS}}", &tools_json)
            .replace("{{USER_MESSAGE}}", user_message)
    }

    /// Render tool specs as a JSON array of `{name, description, parameters}`.
    fn render_specs(specs: &[ToolSpec]) -> String {
        let entries: Vec<serde_json::Value> = specs
            .iter()
            .map(|spec| {
                serde_json::json!({
                    "name": spec.name,
                    "description": spec.description,
                    "parameters": spec.parameters_schema(),
                })
            })
            .collect();
        serde_json::Value::Array(entries).to_string()
    }
}

impl Default for ToolPromptTemplate {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::entities::ToolParameter;

    fn spec() -> ToolSpec {
        ToolSpec::new("test_tool", "A tool for testing")
            .with_parameter(ToolParameter::new("param1", "First parameter", true))
    }

    #[test]
    fn test_default_render_embeds_tools_and_message() {
        let prompt =
            ToolPromptTemplate::default().render(&[spec()], "Please use the test tool");

        assert!(prompt.contains("test_tool"));
        assert!(prompt.contains("A tool for testing"));
        assert!(prompt.contains("param1"));
        assert!(prompt.contains("Please use the test tool"));
        assert!(!prompt.contains("{{TOOLS}}"));
        assert!(!prompt.contains("{{USER_MESSAGE}}"));
    }

    #[test]
    fn test_custom_template() {
        let template = ToolPromptTemplate::new("Tools: {{TOOLS}}\nQ: {{USER_MESSAGE}}");
        let prompt = template.render(&[spec()], "hello");

        assert!(prompt.starts_with("Tools: ["));
        assert!(prompt.ends_with("Q: hello"));
    }

    #[test]
    fn test_empty_template_falls_back_to_default() {
        let prompt = ToolPromptTemplate::new("").render(&[spec()], "hi");
        assert!(prompt.contains("Available tools:"));
    }

    #[test]
    fn test_specs_render_as_json_array() {
        let rendered = ToolPromptTemplate::render_specs(&[spec()]);
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(parsed[0]["name"], "test_tool");
        assert_eq!(parsed[0]["parameters"]["properties"]["param1"]["type"], "string");
    }
}
