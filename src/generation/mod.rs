pub mod client;
pub mod gemini;

pub use client::{
    build_prompt, CompletionBackend, Generated, GenerationClient, FAILURE_MESSAGE,
    NO_RESPONSE_MESSAGE,
};
pub use gemini::GeminiBackend;

/// Model used for every generation call.
pub const MODEL_ID: &str = "gemini-2.5-flash";

/// Fixed sampling configuration.
pub const TEMPERATURE: f64 = 0.7;
pub const TOP_P: f64 = 0.95;
pub const TOP_K: u32 = 40;
pub const MAX_OUTPUT_TOKENS: u32 = 2048;
