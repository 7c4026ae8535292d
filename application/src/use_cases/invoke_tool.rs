//! Tool invocation use case.
//!
//! Turns one [`ResolvedIntent`] into a settled [`ToolCallRecord`]. Every
//! path settles: unknown tools, callable faults, and cancellation all
//! produce error-kind records rather than propagating — a failed tool loses
//! its augmentation for the turn and nothing else.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use toolweave_domain::{InvocationError, ResolvedIntent, ToolCallRecord};

use crate::ports::tool_registry::ToolRegistryPort;

/// Use case for invoking a single resolved intent against the registry.
pub struct ToolInvoker {
    registry: Arc<dyn ToolRegistryPort>,
}

impl ToolInvoker {
    pub fn new(registry: Arc<dyn ToolRegistryPort>) -> Self {
        Self { registry }
    }

    /// Invoke the intent's tool and settle into a record.
    ///
    /// Assigns a fresh correlation identifier, unique within the turn and
    /// independent of anything the model output suggested. When `cancel`
    /// fires before the callable settles, the record carries a cancellation
    /// error — a started invocation never surfaces as a pending record.
    pub async fn invoke(
        &self,
        intent: &ResolvedIntent,
        cancel: Option<&CancellationToken>,
    ) -> ToolCallRecord {
        let id = ToolCallRecord::fresh_id();

        let Some(tool) = self.registry.get(&intent.tool_name) else {
            warn!(tool = %intent.tool_name, "Intent names an unregistered tool");
            return ToolCallRecord::failure(
                id,
                intent.tool_name.clone(),
                intent.parameters.clone(),
                InvocationError::unknown_tool(&intent.tool_name),
            );
        };

        debug!(tool = %intent.tool_name, call_id = %id, "Invoking tool");

        let invocation = tool.callable.invoke(&intent.parameters);
        let settled = match cancel {
            Some(token) => {
                tokio::select! {
                    _ = token.cancelled() => {
                        warn!(tool = %intent.tool_name, call_id = %id, "Tool invocation cancelled");
                        return ToolCallRecord::failure(
                            id,
                            intent.tool_name.clone(),
                            intent.parameters.clone(),
                            InvocationError::cancelled(&intent.tool_name),
                        );
                    }
                    result = invocation => result,
                }
            }
            None => invocation.await,
        };

        match settled {
            Ok(value) => {
                ToolCallRecord::success(id, intent.tool_name.clone(), intent.parameters.clone(), value)
            }
            Err(message) => {
                warn!(tool = %intent.tool_name, call_id = %id, error = %message, "Tool execution failed");
                ToolCallRecord::failure(
                    id,
                    intent.tool_name.clone(),
                    intent.parameters.clone(),
                    InvocationError::execution_failed(message),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::tool_registry::{RegisteredTool, ToolCallable};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::time::Duration;
    use toolweave_domain::{InvocationErrorKind, ToolMetadata, ToolSpec};

    // ==================== Test Mocks ====================

    struct StaticTool {
        result: Result<serde_json::Value, String>,
        delay: Option<Duration>,
    }

    #[async_trait]
    impl ToolCallable for StaticTool {
        async fn invoke(
            &self,
            _parameters: &serde_json::Map<String, serde_json::Value>,
        ) -> Result<serde_json::Value, String> {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.result.clone()
        }
    }

    struct MapRegistry {
        tools: HashMap<String, RegisteredTool>,
    }

    impl MapRegistry {
        fn with_tool(name: &str, tool: StaticTool) -> Self {
            let mut tools = HashMap::new();
            tools.insert(
                name.to_string(),
                RegisteredTool::new(
                    ToolSpec::new(name, "test tool"),
                    ToolMetadata::default(),
                    Arc::new(tool),
                ),
            );
            Self { tools }
        }
    }

    impl ToolRegistryPort for MapRegistry {
        fn get(&self, name: &str) -> Option<&RegisteredTool> {
            self.tools.get(name)
        }

        fn specs(&self) -> Vec<&ToolSpec> {
            self.tools.values().map(|t| &t.spec).collect()
        }
    }

    fn intent(name: &str) -> ResolvedIntent {
        let mut params = serde_json::Map::new();
        params.insert(
            "param1".to_string(),
            serde_json::Value::String("value1".to_string()),
        );
        ResolvedIntent::new(name, params)
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_successful_invocation() {
        let registry = Arc::new(MapRegistry::with_tool(
            "test_tool",
            StaticTool {
                result: Ok(serde_json::Value::String("Test tool result".to_string())),
                delay: None,
            },
        ));
        let invoker = ToolInvoker::new(registry);

        let record = invoker.invoke(&intent("test_tool"), None).await;

        assert!(record.is_success());
        assert_eq!(record.tool_name, "test_tool");
        assert_eq!(record.content_string(), "Test tool result");
        assert!(!record.id.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_tool_settles_into_error_record() {
        let registry = Arc::new(MapRegistry::with_tool(
            "test_tool",
            StaticTool {
                result: Ok(serde_json::Value::Null),
                delay: None,
            },
        ));
        let invoker = ToolInvoker::new(registry);

        let record = invoker.invoke(&intent("missing_tool"), None).await;

        assert!(!record.is_success());
        assert_eq!(record.error().unwrap().kind, InvocationErrorKind::UnknownTool);
        // Intent parameters are preserved on the failed record
        assert_eq!(record.parameters.len(), 1);
    }

    #[tokio::test]
    async fn test_callable_fault_is_captured() {
        let registry = Arc::new(MapRegistry::with_tool(
            "test_tool",
            StaticTool {
                result: Err("disk on fire".to_string()),
                delay: None,
            },
        ));
        let invoker = ToolInvoker::new(registry);

        let record = invoker.invoke(&intent("test_tool"), None).await;

        assert!(!record.is_success());
        let error = record.error().unwrap();
        assert_eq!(error.kind, InvocationErrorKind::ExecutionError);
        assert!(error.message.contains("disk on fire"));
    }

    #[tokio::test]
    async fn test_cancellation_settles_into_error_record() {
        let registry = Arc::new(MapRegistry::with_tool(
            "slow_tool",
            StaticTool {
                result: Ok(serde_json::Value::Null),
                delay: Some(Duration::from_secs(30)),
            },
        ));
        let invoker = ToolInvoker::new(registry);

        let token = CancellationToken::new();
        token.cancel();
        let record = invoker.invoke(&intent("slow_tool"), Some(&token)).await;

        assert!(!record.is_success());
        let error = record.error().unwrap();
        assert_eq!(error.kind, InvocationErrorKind::ExecutionError);
        assert!(error.message.contains("cancelled"));
    }

    #[tokio::test]
    async fn test_ids_are_unique_across_invocations() {
        let registry = Arc::new(MapRegistry::with_tool(
            "test_tool",
            StaticTool {
                result: Ok(serde_json::Value::Null),
                delay: None,
            },
        ));
        let invoker = ToolInvoker::new(registry);

        let first = invoker.invoke(&intent("test_tool"), None).await;
        let second = invoker.invoke(&intent("test_tool"), None).await;

        assert_ne!(first.id, second.id);
    }
}
