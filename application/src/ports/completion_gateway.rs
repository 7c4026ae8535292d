//! Completion Gateway port
//!
//! Defines the interface for the auxiliary, non-streaming completion call
//! the intent resolver sends to the task model.

use async_trait::async_trait;
use thiserror::Error;
use toolweave_domain::Message;

/// Errors that can occur during a completion request.
///
/// Any of these makes the resolver treat the task model as unavailable:
/// the turn proceeds without tool augmentation, the error never escapes
/// the middleware.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// Gateway for completion requests.
///
/// The middleware issues exactly one kind of call: a non-streaming
/// completion whose response text is `choices[0].message.content` of the
/// underlying provider. Streaming and native function-calling paths are
/// deliberately outside this port.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send `messages` to `model` and return the response text.
    async fn complete(&self, model: &str, messages: &[Message]) -> Result<String, GatewayError>;
}
