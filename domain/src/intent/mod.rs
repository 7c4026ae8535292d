//! Intent extraction from task-model output.

pub mod parser;

pub use parser::{ResolvedIntent, parse_intent_response, parse_single_intent};
