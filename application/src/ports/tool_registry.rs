//! Tool Registry port
//!
//! Defines the read-only interface over the externally-owned registry of
//! callables, and the uniform invocation capability every registered tool
//! exposes.

use std::sync::Arc;

use async_trait::async_trait;
use toolweave_domain::{ToolMetadata, ToolSpec};

/// The uniform invoke-and-settle capability of a registered tool.
///
/// Callables may be synchronous or genuinely asynchronous underneath; the
/// invoker is agnostic. An implementation must always settle — return a
/// value or a human-readable error message — and never leave a pending
/// operation dangling.
#[async_trait]
pub trait ToolCallable: Send + Sync {
    /// Invoke the tool with the intent's parameters, passed through
    /// verbatim. Schema validation, if any, is the callable's own concern.
    async fn invoke(
        &self,
        parameters: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<serde_json::Value, String>;
}

/// A registry entry: spec, per-tool flags, and the executable behavior.
#[derive(Clone)]
pub struct RegisteredTool {
    pub spec: ToolSpec,
    pub metadata: ToolMetadata,
    pub callable: Arc<dyn ToolCallable>,
}

impl RegisteredTool {
    pub fn new(spec: ToolSpec, metadata: ToolMetadata, callable: Arc<dyn ToolCallable>) -> Self {
        Self {
            spec,
            metadata,
            callable,
        }
    }
}

/// Port over the tool registry. The middleware never mutates it.
pub trait ToolRegistryPort: Send + Sync {
    /// Look up a registered tool by name.
    fn get(&self, name: &str) -> Option<&RegisteredTool>;

    /// Specs of all registered tools, in registration order.
    fn specs(&self) -> Vec<&ToolSpec>;

    /// Check if a tool is registered.
    fn has_tool(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}
