//! Tool domain entities

use serde::{Deserialize, Serialize};

/// Specification of a registered tool: identity, parameter schema, and a
/// free-text description. Immutable once registered; owned by the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Unique name of the tool (e.g., "web_search")
    pub name: String,
    /// Identifier of the owning tool module/server
    pub tool_id: String,
    /// Human-readable description
    pub description: String,
    /// Parameter specifications
    pub parameters: Vec<ToolParameter>,
}

/// Parameter specification for a tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Whether this parameter is required
    pub required: bool,
    /// Parameter type hint (e.g., "string", "number")
    pub param_type: String,
}

impl ToolSpec {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            tool_id: name.clone(),
            name,
            description: description.into(),
            parameters: Vec::new(),
        }
    }

    pub fn with_tool_id(mut self, tool_id: impl Into<String>) -> Self {
        self.tool_id = tool_id.into();
        self
    }

    pub fn with_parameter(mut self, param: ToolParameter) -> Self {
        self.parameters.push(param);
        self
    }

    /// Render the parameter declarations as a JSON-schema-shaped object,
    /// the form embedded into the resolver prompt:
    /// `{"properties": {name: {"type", "description"}}, "required": [...]}`.
    pub fn parameters_schema(&self) -> serde_json::Value {
        let mut properties = serde_json::Map::new();
        let mut required = Vec::new();
        for param in &self.parameters {
            properties.insert(
                param.name.clone(),
                serde_json::json!({
                    "type": param.param_type,
                    "description": param.description,
                }),
            );
            if param.required {
                required.push(serde_json::Value::String(param.name.clone()));
            }
        }
        serde_json::json!({
            "properties": properties,
            "required": required,
        })
    }
}

impl ToolParameter {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
            param_type: "string".to_string(),
        }
    }

    pub fn with_type(mut self, param_type: impl Into<String>) -> Self {
        self.param_type = param_type.into();
        self
    }
}

/// Per-tool flags attached 1:1 with the registered callable.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ToolMetadata {
    /// Surface invocation results as citation events
    #[serde(default)]
    pub citation: bool,
    /// Tool consumes uploaded files itself; caller can skip re-attaching them
    #[serde(default)]
    pub file_handler: bool,
}

impl ToolMetadata {
    pub fn with_citation(mut self, citation: bool) -> Self {
        self.citation = citation;
        self
    }

    pub fn with_file_handler(mut self, file_handler: bool) -> Self {
        self.file_handler = file_handler;
        self
    }
}
