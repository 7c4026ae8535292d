//! Tool completion handler — the middleware's entry point.
//!
//! Orchestrates one chat turn's tool augmentation: resolve intents through
//! the task model, invoke each chosen tool sequentially in resolution
//! order, emit citation/status events, and weave the exchange into the
//! conversation history under the persistence policy.
//!
//! Tool augmentation is additive. Every failure mode — resolver
//! unavailable, malformed intent, unknown tool, callable fault — is
//! contained here: `execute` cannot fail the turn, and the caller always
//! gets its history back (augmented or untouched) plus the settled records.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use toolweave_domain::{
    Message, ToolCallRecord, ToolSpec, append_tool_exchange, util::truncate_str,
};

use crate::config::ToolHandlerConfig;
use crate::ports::completion_gateway::CompletionGateway;
use crate::ports::event_sink::{EventSink, NoEventSink, ToolEvent};
use crate::ports::tool_registry::ToolRegistryPort;
use crate::use_cases::invoke_tool::ToolInvoker;
use crate::use_cases::resolve_intents::IntentResolver;

/// Maximum bytes of result text carried in a citation summary.
const CITATION_SUMMARY_BYTES: usize = 200;

/// Output flags from one handler invocation.
#[derive(Debug, Default)]
pub struct ToolHandlerOutput {
    /// Settled invocation records, in resolution order.
    pub records: Vec<ToolCallRecord>,
    /// Whether any invoked tool handles uploaded files itself; the caller
    /// can skip re-attaching files for the main completion when set.
    pub file_handler: bool,
}

/// Use case for handling tool calls within a chat completion turn.
pub struct ToolCompletionUseCase {
    resolver: IntentResolver,
    invoker: ToolInvoker,
    registry: Arc<dyn ToolRegistryPort>,
    event_sink: Arc<dyn EventSink>,
}

impl ToolCompletionUseCase {
    pub fn new(gateway: Arc<dyn CompletionGateway>, registry: Arc<dyn ToolRegistryPort>) -> Self {
        Self {
            resolver: IntentResolver::new(gateway),
            invoker: ToolInvoker::new(registry.clone()),
            registry,
            event_sink: Arc::new(NoEventSink),
        }
    }

    /// Attach an event sink for citation/status notifications.
    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.event_sink = sink;
        self
    }

    /// Process one turn.
    ///
    /// `history` is owned by the caller for the duration of the call and is
    /// mutated in place; concurrent turns on the same conversation must be
    /// serialized by the caller. The persistence flag in `config` decides
    /// whether the exchange is materialized — never whether tools run.
    pub async fn execute(
        &self,
        history: &mut Vec<Message>,
        config: &ToolHandlerConfig,
        cancel: Option<&CancellationToken>,
    ) -> ToolHandlerOutput {
        let specs: Vec<ToolSpec> = self.registry.specs().into_iter().cloned().collect();

        self.event_sink
            .emit(ToolEvent::Status {
                description: "Selecting tools".to_string(),
                done: false,
            })
            .await;

        let intents = self.resolver.resolve(history, &specs, config).await;
        if intents.is_empty() {
            debug!("No tool intents for this turn");
            self.event_sink
                .emit(ToolEvent::Status {
                    description: "No tools selected".to_string(),
                    done: true,
                })
                .await;
            return ToolHandlerOutput::default();
        }

        let mut output = ToolHandlerOutput::default();

        // Sequential, in resolution order; the order carries through to the
        // persisted message pairs.
        for intent in &intents {
            self.event_sink
                .emit(ToolEvent::Status {
                    description: format!("Running {}", intent.tool_name),
                    done: false,
                })
                .await;

            let record = self.invoker.invoke(intent, cancel).await;

            if let Some(tool) = self.registry.get(&intent.tool_name) {
                if tool.metadata.file_handler {
                    output.file_handler = true;
                }
                if tool.metadata.citation {
                    self.event_sink
                        .emit(ToolEvent::Citation {
                            tool_name: record.tool_name.clone(),
                            tool_id: tool.spec.tool_id.clone(),
                            parameters: record.parameters.clone(),
                            summary: truncate_str(&record.content_string(), CITATION_SUMMARY_BYTES)
                                .to_string(),
                        })
                        .await;
                }
            }

            output.records.push(record);
        }

        append_tool_exchange(history, &output.records, config.persist_tool_results);

        self.event_sink
            .emit(ToolEvent::Status {
                description: "Tool execution finished".to_string(),
                done: true,
            })
            .await;

        info!(
            tools = output.records.len(),
            persisted = config.persist_tool_results,
            "Tool handling complete"
        );
        output
    }
}
