//! In-memory tool registry.
//!
//! The registry is owned by the embedding application and built at startup;
//! the middleware only reads it through [`ToolRegistryPort`]. Registration
//! order is preserved because it is the order tool specs appear in the
//! selection prompt.

use std::collections::HashMap;

use tracing::debug;

use toolweave_application::ports::tool_registry::{RegisteredTool, ToolRegistryPort};
use toolweave_domain::ToolSpec;

/// Tool registry backed by a vector, keyed by tool name.
///
/// Registering a name twice replaces the earlier entry in place, keeping
/// its position in the prompt ordering.
#[derive(Default)]
pub struct InMemoryToolRegistry {
    tools: Vec<RegisteredTool>,
    index: HashMap<String, usize>,
}

impl InMemoryToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool, replacing any previous entry with the same name.
    pub fn register(mut self, tool: RegisteredTool) -> Self {
        let name = tool.spec.name.clone();
        match self.index.get(&name) {
            Some(&slot) => {
                debug!(tool = %name, "Replacing registered tool");
                self.tools[slot] = tool;
            }
            None => {
                debug!(tool = %name, "Registered tool");
                self.index.insert(name, self.tools.len());
                self.tools.push(tool);
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl ToolRegistryPort for InMemoryToolRegistry {
    fn get(&self, name: &str) -> Option<&RegisteredTool> {
        self.index.get(name).map(|&slot| &self.tools[slot])
    }

    fn specs(&self) -> Vec<&ToolSpec> {
        self.tools.iter().map(|t| &t.spec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::function_tool::FunctionTool;
    use std::sync::Arc;
    use toolweave_domain::ToolMetadata;

    fn entry(name: &str, description: &str) -> RegisteredTool {
        RegisteredTool::new(
            ToolSpec::new(name, description),
            ToolMetadata::default(),
            Arc::new(FunctionTool::from_sync(|_| {
                Ok(serde_json::Value::Null)
            })),
        )
    }

    #[test]
    fn test_specs_preserve_registration_order() {
        let registry = InMemoryToolRegistry::new()
            .register(entry("test_tool", "first"))
            .register(entry("second_tool", "second"))
            .register(entry("third_tool", "third"));

        let names: Vec<&str> = registry.specs().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["test_tool", "second_tool", "third_tool"]);
    }

    #[test]
    fn test_get_by_name() {
        let registry = InMemoryToolRegistry::new().register(entry("test_tool", "a tool"));

        assert!(registry.get("test_tool").is_some());
        assert!(registry.get("missing_tool").is_none());
        assert!(registry.has_tool("test_tool"));
    }

    #[test]
    fn test_duplicate_registration_replaces_in_place() {
        let registry = InMemoryToolRegistry::new()
            .register(entry("test_tool", "old description"))
            .register(entry("second_tool", "second"))
            .register(entry("test_tool", "new description"));

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get("test_tool").unwrap().spec.description,
            "new description"
        );
        let names: Vec<&str> = registry.specs().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["test_tool", "second_tool"]);
    }
}
