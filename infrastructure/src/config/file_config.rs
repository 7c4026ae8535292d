//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Conversion to the application-layer [`ToolHandlerConfig`] happens here;
//! the gateway and event sections are consumed at wiring time.

use serde::{Deserialize, Serialize};

use toolweave_application::config::ToolHandlerConfig;

fn default_true() -> bool {
    true
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Handler policy and task-model routing
    pub handler: FileHandlerConfig,
    /// Completion gateway settings
    pub gateway: FileGatewayConfig,
    /// Event sink settings
    pub events: FileEventsConfig,
}

impl FileConfig {
    /// Build the per-invocation handler configuration.
    pub fn to_handler_config(&self) -> ToolHandlerConfig {
        ToolHandlerConfig {
            task_model: self.handler.task_model.clone(),
            task_model_external: self.handler.task_model_external.clone(),
            prompt_template: self.handler.prompt_template.clone(),
            persist_tool_results: self.handler.persist_tool_results,
        }
    }
}

/// `[handler]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHandlerConfig {
    /// Model the tool-selection prompt is sent to
    pub task_model: String,
    /// External-provider fallback model
    pub task_model_external: Option<String>,
    /// Custom selection prompt template; empty uses the built-in default
    pub prompt_template: String,
    /// Whether tool exchanges are written into the conversation history
    #[serde(default = "default_true")]
    pub persist_tool_results: bool,
}

impl Default for FileHandlerConfig {
    fn default() -> Self {
        Self {
            task_model: String::new(),
            task_model_external: None,
            prompt_template: String::new(),
            persist_tool_results: true,
        }
    }
}

/// `[gateway]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGatewayConfig {
    /// Base URL of the OpenAI-compatible endpoint
    pub base_url: String,
    /// Bearer token; omit for servers that don't check it
    pub api_key: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for FileGatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: None,
            timeout_secs: 60,
        }
    }
}

/// `[events]` section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEventsConfig {
    /// Path of the JSONL event log; unset disables the file sink
    pub jsonl_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[handler]
task_model = "test-model"
task_model_external = "test-model-external"
persist_tool_results = false

[gateway]
base_url = "http://localhost:8080/v1"
api_key = "sk-local"
timeout_secs = 10

[events]
jsonl_path = "events.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.handler.task_model, "test-model");
        assert_eq!(
            config.handler.task_model_external.as_deref(),
            Some("test-model-external")
        );
        assert!(!config.handler.persist_tool_results);
        assert_eq!(config.gateway.base_url, "http://localhost:8080/v1");
        assert_eq!(config.gateway.timeout_secs, 10);
        assert_eq!(config.events.jsonl_path.as_deref(), Some("events.jsonl"));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[handler]
task_model = "test-model"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.handler.task_model, "test-model");
        // Defaults apply
        assert!(config.handler.persist_tool_results);
        assert!(config.handler.task_model_external.is_none());
        assert_eq!(config.gateway.timeout_secs, 60);
        assert!(config.events.jsonl_path.is_none());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.handler.task_model.is_empty());
        assert!(config.handler.persist_tool_results);
        assert_eq!(config.gateway.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn test_to_handler_config() {
        let toml_str = r#"
[handler]
task_model = "test-model"
persist_tool_results = false
prompt_template = "Pick a tool: {{TOOLS}} for {{USER_MESSAGE}}"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let handler = config.to_handler_config();

        assert_eq!(handler.task_model, "test-model");
        assert!(!handler.persist_tool_results);
        assert!(handler.prompt_template.contains("{{TOOLS}}"));
    }
}
