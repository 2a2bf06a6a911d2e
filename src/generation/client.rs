//! Generation client: turns a prompt template and form values into text.
//!
//! Every failure is absorbed here. Callers always receive display text.

use crate::error::GenerationError;
use crate::types::InputValues;
use async_trait::async_trait;
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::{debug, error};

/// Shown when the service answers without any text.
pub const NO_RESPONSE_MESSAGE: &str = "No response generated.";

/// Shown for any transport or service failure.
pub const FAILURE_MESSAGE: &str =
    "Error generating content. Please check your API Key or try again later.";

/// Seam to the remote text-completion service.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Send one user message. `Ok(None)` means the service returned no text.
    async fn complete(&self, prompt: &str) -> Result<Option<String>, GenerationError>;
}

/// Display text produced by a generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
    Text(String),
    /// The call failed; the text is a generic human-readable message.
    Failed(String),
}

impl Generated {
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Failed(text) => text,
        }
    }
}

/// Render the template followed by one `- key: value` line per input.
pub fn build_prompt(template: &str, inputs: &InputValues) -> String {
    let mut prompt = String::with_capacity(template.len() + 64);
    prompt.push_str(template);
    prompt.push_str("\n\nUser Inputs:\n");
    for (key, value) in inputs.iter() {
        let _ = writeln!(prompt, "- {}: {}", key, value);
    }
    prompt
}

/// Client handed to the dispatcher; wraps whichever backend is configured.
#[derive(Clone)]
pub struct GenerationClient {
    backend: Arc<dyn CompletionBackend>,
}

impl GenerationClient {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    /// Generate text for a template and its inputs. Never fails.
    pub async fn generate(&self, template: &str, inputs: &InputValues) -> Generated {
        let prompt = build_prompt(template, inputs);
        debug!("Generation request ({} chars, {} inputs)", prompt.len(), inputs.len());

        match self.backend.complete(&prompt).await {
            Ok(Some(text)) if !text.is_empty() => Generated::Text(text),
            Ok(_) => Generated::Text(NO_RESPONSE_MESSAGE.to_string()),
            Err(e) => {
                error!("Generation failed: {}", e);
                Generated::Failed(FAILURE_MESSAGE.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Records prompts and replays a canned reply.
    struct Recorder {
        reply: fn() -> Result<Option<String>, GenerationError>,
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CompletionBackend for Recorder {
        async fn complete(&self, prompt: &str) -> Result<Option<String>, GenerationError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            (self.reply)()
        }
    }

    fn recorder(reply: fn() -> Result<Option<String>, GenerationError>) -> Arc<Recorder> {
        Arc::new(Recorder {
            reply,
            prompts: Mutex::new(Vec::new()),
        })
    }

    #[test]
    fn test_build_prompt_layout() {
        let inputs: InputValues = [("topic", "cats"), ("niche", "Tech")].into_iter().collect();
        let prompt = build_prompt("Generate titles about: ", &inputs);
        assert_eq!(
            prompt,
            "Generate titles about: \n\nUser Inputs:\n- topic: cats\n- niche: Tech\n"
        );
    }

    #[test]
    fn test_build_prompt_template_precedes_inputs() {
        let inputs: InputValues = [("topic", "cats")].into_iter().collect();
        let prompt = build_prompt("Generate titles about: ", &inputs);
        let template_at = prompt.find("Generate titles about: ").unwrap();
        let input_at = prompt.find("topic: cats").unwrap();
        assert!(template_at < input_at);
    }

    #[test]
    fn test_build_prompt_without_inputs() {
        let prompt = build_prompt("Explain thumbnails.", &InputValues::new());
        assert_eq!(prompt, "Explain thumbnails.\n\nUser Inputs:\n");
    }

    #[tokio::test]
    async fn test_generate_returns_text() {
        let backend = recorder(|| Ok(Some("1. Cats rule".into())));
        let client = GenerationClient::new(backend.clone());
        let inputs: InputValues = [("topic", "cats")].into_iter().collect();

        let out = client.generate("Titles:", &inputs).await;
        assert_eq!(out, Generated::Text("1. Cats rule".into()));
        assert!(backend.prompts.lock().unwrap()[0].contains("- topic: cats"));
    }

    #[tokio::test]
    async fn test_generate_empty_reply_uses_fallback() {
        let client = GenerationClient::new(recorder(|| Ok(None)));
        let out = client.generate("Titles:", &InputValues::new()).await;
        assert_eq!(out, Generated::Text(NO_RESPONSE_MESSAGE.into()));

        let client = GenerationClient::new(recorder(|| Ok(Some(String::new()))));
        let out = client.generate("Titles:", &InputValues::new()).await;
        assert_eq!(out.text(), NO_RESPONSE_MESSAGE);
    }

    #[tokio::test]
    async fn test_generate_absorbs_errors() {
        let client =
            GenerationClient::new(recorder(|| Err(GenerationError::Backend("quota".into()))));
        let out = client.generate("Titles:", &InputValues::new()).await;
        assert_eq!(out, Generated::Failed(FAILURE_MESSAGE.into()));
    }
}
