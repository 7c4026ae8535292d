//! Port for tool event notifications.
//!
//! Defines the [`EventSink`] trait for sending citation and status events
//! to the external notification channel so a UI can render provenance and
//! progress live. Emission is fire-and-forget and independent of the
//! persistence policy: citation display and history persistence are
//! separate axes.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port carries the structured
//! events the embedding application forwards to its users.

use async_trait::async_trait;
use serde::Serialize;

/// A structured event describing tool execution.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolEvent {
    /// Provenance notification for a tool whose metadata enables citations.
    Citation {
        tool_name: String,
        tool_id: String,
        parameters: serde_json::Map<String, serde_json::Value>,
        /// Truncated preview of the invocation result (or error text)
        summary: String,
    },
    /// Progress notification for the turn.
    Status {
        description: String,
        done: bool,
    },
}

/// Port for emitting tool events.
///
/// Implementations must not fail the turn: delivery problems are their own
/// to swallow or log.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Send one event through the notification channel.
    async fn emit(&self, event: ToolEvent);
}

/// No-op implementation for tests and when no channel is attached.
pub struct NoEventSink;

#[async_trait]
impl EventSink for NoEventSink {
    async fn emit(&self, _event: ToolEvent) {}
}
