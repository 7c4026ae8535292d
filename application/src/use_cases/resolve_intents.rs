//! Intent resolution use case.
//!
//! Asks the task model which tools (if any) to use for the latest user
//! turn. One non-streaming completion per turn; multiple tools arrive only
//! as a `tool_calls` array in that single response. Resolution is
//! best-effort: a provider failure or an unparsable response yields zero
//! intents and the turn proceeds without tool augmentation.

use std::sync::Arc;

use tracing::{debug, warn};

use toolweave_domain::{
    Message, ResolvedIntent, ToolPromptTemplate, ToolSpec, parse_intent_response,
    util::truncate_str,
};

use crate::config::ToolHandlerConfig;
use crate::ports::completion_gateway::CompletionGateway;

/// Use case for resolving tool intents from the task model.
pub struct IntentResolver {
    gateway: Arc<dyn CompletionGateway>,
}

impl IntentResolver {
    pub fn new(gateway: Arc<dyn CompletionGateway>) -> Self {
        Self { gateway }
    }

    /// Resolve zero or more intents for the conversation's latest user turn.
    ///
    /// Tries the primary task model first; on failure, the external task
    /// model when one is configured. Both failing is `ResolverUnavailable`
    /// territory: logged, swallowed, empty result.
    pub async fn resolve(
        &self,
        history: &[Message],
        specs: &[ToolSpec],
        config: &ToolHandlerConfig,
    ) -> Vec<ResolvedIntent> {
        if specs.is_empty() {
            return Vec::new();
        }

        let Some(user_message) = Message::last_user_content(history) else {
            debug!("No user message in history, skipping intent resolution");
            return Vec::new();
        };

        let prompt =
            ToolPromptTemplate::new(config.prompt_template.as_str()).render(specs, user_message);
        let request = [Message::user(prompt)];

        let response = match self.gateway.complete(&config.task_model, &request).await {
            Ok(text) => text,
            Err(primary_error) => {
                let Some(external) = config.task_model_external.as_deref() else {
                    warn!(
                        model = %config.task_model,
                        error = %primary_error,
                        "Task model unavailable, proceeding without tools"
                    );
                    return Vec::new();
                };
                warn!(
                    model = %config.task_model,
                    error = %primary_error,
                    fallback = external,
                    "Task model failed, trying external task model"
                );
                match self.gateway.complete(external, &request).await {
                    Ok(text) => text,
                    Err(fallback_error) => {
                        warn!(
                            model = external,
                            error = %fallback_error,
                            "External task model unavailable, proceeding without tools"
                        );
                        return Vec::new();
                    }
                }
            }
        };

        let intents = parse_intent_response(&response, specs);
        if intents.is_empty() {
            debug!(
                response = truncate_str(&response, 200),
                "No tool intents resolved from task model response"
            );
        } else {
            debug!(count = intents.len(), "Resolved tool intents");
        }
        intents
    }
}
