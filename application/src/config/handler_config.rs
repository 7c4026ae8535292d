//! Handler configuration — per-invocation policy and task-model routing.
//!
//! [`ToolHandlerConfig`] is an explicit value threaded into the handler's
//! entry point and read once per invocation. There is deliberately no
//! process-wide mutable flag: the embedding application owns configuration
//! management and passes the current snapshot with each call.

use serde::{Deserialize, Serialize};

/// Configuration for one tool-handler invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolHandlerConfig {
    /// Model the resolver sends the tool-selection prompt to.
    pub task_model: String,
    /// External-provider fallback, tried when the primary call fails.
    pub task_model_external: Option<String>,
    /// Tool-selection prompt template; empty selects the built-in default.
    pub prompt_template: String,
    /// Whether tool-call/tool-result messages are written into the
    /// conversation history. Toggling this never changes whether tools run.
    pub persist_tool_results: bool,
}

impl Default for ToolHandlerConfig {
    fn default() -> Self {
        Self {
            task_model: String::new(),
            task_model_external: None,
            prompt_template: String::new(),
            persist_tool_results: true,
        }
    }
}

impl ToolHandlerConfig {
    pub fn new(task_model: impl Into<String>) -> Self {
        Self {
            task_model: task_model.into(),
            ..Self::default()
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_task_model_external(mut self, model: impl Into<String>) -> Self {
        self.task_model_external = Some(model.into());
        self
    }

    pub fn with_prompt_template(mut self, template: impl Into<String>) -> Self {
        self.prompt_template = template.into();
        self
    }

    pub fn with_persist_tool_results(mut self, persist: bool) -> Self {
        self.persist_tool_results = persist;
        self
    }
}
