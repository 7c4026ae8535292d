//! History augmentation — materializing tool invocations into messages.
//!
//! A pure transformation over the message sequence: no I/O, cannot fail.
//! Under the persistence policy it appends one assistant/tool message pair
//! per [`ToolCallRecord`], preserving record order and threading the
//! correlation identifier between the two halves of each pair.

use crate::message::entities::{Message, Role, ToolCallDescriptor};
use crate::tool::value_objects::ToolCallRecord;

/// Append the tool-call/tool-result exchange for `records` to `history`.
///
/// When `persist` is false the history is returned untouched — tools were
/// still invoked, the exchange is just not materialized. When true, each
/// record becomes exactly one assistant message (`content: null`, a single
/// descriptor carrying the record's correlation id) immediately followed by
/// one tool message (`tool_call_id` matching, content stringified), in
/// record order.
pub fn append_tool_exchange(history: &mut Vec<Message>, records: &[ToolCallRecord], persist: bool) {
    if !persist {
        return;
    }

    for record in records {
        let descriptor = ToolCallDescriptor::function(
            record.id.clone(),
            record.tool_name.clone(),
            record.arguments_json(),
        );
        history.push(Message::tool_call(descriptor));
        history.push(Message::tool_result(record.id.clone(), record.content_string()));
    }
}

/// Check the correlation invariant over a message sequence.
///
/// For every tool-role message there must exist exactly one earlier
/// assistant message whose descriptor list contains a matching `id`, and
/// descriptor ids must be unique across the sequence. Returns a description
/// of each violation found; an empty vec means the invariant holds.
pub fn correlation_violations(messages: &[Message]) -> Vec<String> {
    let mut violations = Vec::new();

    // Descriptor id uniqueness
    let mut seen_ids: Vec<&str> = Vec::new();
    for msg in messages {
        if let Some(calls) = &msg.tool_calls {
            for call in calls {
                if seen_ids.contains(&call.id.as_str()) {
                    violations.push(format!("duplicate tool_call id '{}'", call.id));
                }
                seen_ids.push(&call.id);
            }
        }
    }

    // Every tool message answers exactly one earlier descriptor
    for (index, msg) in messages.iter().enumerate() {
        if msg.role != Role::Tool {
            continue;
        }
        let Some(call_id) = msg.tool_call_id.as_deref() else {
            violations.push(format!("tool message at index {} has no tool_call_id", index));
            continue;
        };

        let earlier_matches = messages[..index]
            .iter()
            .filter_map(|m| m.tool_calls.as_ref())
            .flatten()
            .filter(|c| c.id == call_id)
            .count();

        if earlier_matches != 1 {
            violations.push(format!(
                "tool message '{}' matched by {} earlier descriptors (expected 1)",
                call_id, earlier_matches
            ));
        }
    }

    violations
}
