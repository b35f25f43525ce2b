//! OpenAI-compatible chat backend.
//!
//! Works with any OpenAI-compatible chat completions endpoint, including
//! the OpenAI cloud API, Azure OpenAI, Ollama in compatibility mode, vLLM,
//! and LM Studio.

mod backend;
mod types;

pub use backend::{
    OpenAIBackend, OpenAIConfig, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_OPENAI_URL,
    DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_SECS,
};
pub use types::*;
