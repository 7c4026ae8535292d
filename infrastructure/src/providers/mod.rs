//! Completion gateway adapters.

mod openai_compat;

pub use openai_compat::{OpenAiCompatConfig, OpenAiCompatGateway};
