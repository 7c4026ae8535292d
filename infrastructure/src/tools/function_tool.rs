//! Closure-backed tool callables.
//!
//! [`FunctionTool`] adapts plain functions and closures to the
//! [`ToolCallable`] capability, so the embedding application can register
//! tools without writing a struct per tool. Synchronous functions are
//! wrapped into the same async surface; the invoker never distinguishes.

use async_trait::async_trait;
use futures::FutureExt;
use futures::future::BoxFuture;

use toolweave_application::ports::tool_registry::ToolCallable;

type Parameters = serde_json::Map<String, serde_json::Value>;
type ToolFn = Box<dyn Fn(Parameters) -> BoxFuture<'static, Result<serde_json::Value, String>> + Send + Sync>;

/// A [`ToolCallable`] backed by a closure.
pub struct FunctionTool {
    func: ToolFn,
}

impl FunctionTool {
    /// Wrap an async function.
    pub fn new<F, Fut>(func: F) -> Self
    where
        F: Fn(Parameters) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<serde_json::Value, String>> + Send + 'static,
    {
        Self {
            func: Box::new(move |parameters| func(parameters).boxed()),
        }
    }

    /// Wrap a synchronous function.
    ///
    /// The function runs on the invoking task; long-running blocking work
    /// belongs behind [`FunctionTool::new`] with `spawn_blocking` instead.
    pub fn from_sync<F>(func: F) -> Self
    where
        F: Fn(&Parameters) -> Result<serde_json::Value, String> + Send + Sync + 'static,
    {
        Self {
            func: Box::new(move |parameters| {
                futures::future::ready(func(&parameters)).boxed()
            }),
        }
    }
}

#[async_trait]
impl ToolCallable for FunctionTool {
    async fn invoke(
        &self,
        parameters: &Parameters,
    ) -> Result<serde_json::Value, String> {
        (self.func)(parameters.clone()).await
    }
}
