//! Tool dispatcher: runs the active tool and owns its session.
//!
//! Lifecycle per active tool:
//!   Idle → Pending → Succeeded | Failed
//!
//! A run clears the previous outcome before it starts, a second trigger while
//! pending is ignored, and a completion that arrives after the user switched
//! tools is dropped. A run whose future is dropped returns the session to Idle.

mod session;

use crate::catalog::{Catalog, Strategy, ToolDescriptor};
use crate::clipboard::Clipboard;
use crate::error::DispatchError;
use crate::generation::{Generated, GenerationClient};
use crate::types::*;
use crate::utility::UtilityOutput;
use session::{Session, Ticket};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// How long a copy acknowledgement stays visible.
pub const COPY_ACK_DURATION: Duration = Duration::from_secs(2);

/// Shown when a utility fails unexpectedly.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// What happened to a run request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunReport {
    /// The run finished and its outcome is now the active one.
    Completed(GenerationOutcome),
    /// Another run is still pending; nothing was started.
    Busy,
    /// The tool was switched while the run was in flight; its result was dropped.
    Discarded,
}

/// Runs catalog tools against the generation client or their local utility.
pub struct Dispatcher {
    catalog: Arc<Catalog>,
    client: GenerationClient,
    clipboard: Arc<dyn Clipboard>,
    session: Arc<Mutex<Session>>,
}

/// Puts the session back to `Idle` when a run future is dropped before it settles.
struct PendingGuard {
    session: Arc<Mutex<Session>>,
    ticket: Option<Ticket>,
}

impl PendingGuard {
    fn new(session: &Arc<Mutex<Session>>, ticket: Ticket) -> Self {
        Self {
            session: session.clone(),
            ticket: Some(ticket),
        }
    }

    /// The run reached its completion step; nothing to undo.
    fn settle(mut self) {
        self.ticket = None;
    }
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        let Some(ticket) = self.ticket.take() else {
            return;
        };
        match self.session.try_lock() {
            Ok(mut session) => release_abandoned(&mut session, &ticket),
            Err(_) => {
                // Lock is busy; finish the reset on the runtime.
                if let Ok(handle) = tokio::runtime::Handle::try_current() {
                    let session = self.session.clone();
                    handle.spawn(async move {
                        release_abandoned(&mut *session.lock().await, &ticket);
                    });
                }
            }
        }
    }
}

fn release_abandoned(session: &mut Session, ticket: &Ticket) {
    if session.owns(ticket) && session.state == RunState::Pending {
        debug!("Run of '{}' was dropped before settling", ticket.tool_id);
        session.state = RunState::Idle;
    }
}

impl Dispatcher {
    /// Create a dispatcher with the first catalog tool active.
    pub fn new(catalog: Arc<Catalog>, client: GenerationClient, clipboard: Arc<dyn Clipboard>) -> Self {
        let session = Session::fresh(catalog.first().clone(), 0);
        Self {
            catalog,
            client,
            clipboard,
            session: Arc::new(Mutex::new(session)),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Make `id` the active tool, discarding all state of the previous one.
    pub async fn select_tool(&self, id: &str) -> Result<Arc<ToolDescriptor>, DispatchError> {
        let tool = self
            .catalog
            .get(id)
            .cloned()
            .ok_or_else(|| DispatchError::ToolNotFound(id.to_string()))?;

        let mut session = self.session.lock().await;
        if session.state == RunState::Pending {
            debug!("Abandoning in-flight run of '{}'", session.tool.id);
        }
        let epoch = session.epoch + 1;
        *session = Session::fresh(tool.clone(), epoch);

        info!("Active tool: {}", tool.id);
        Ok(tool)
    }

    pub async fn active_tool(&self) -> Arc<ToolDescriptor> {
        self.session.lock().await.tool.clone()
    }

    /// Set one form value of the active tool.
    ///
    /// An empty value clears the field. Read-only inputs cannot be changed.
    pub async fn set_input(&self, id: &str, value: &str) -> Result<(), DispatchError> {
        let mut session = self.session.lock().await;
        let spec = session
            .tool
            .input(id)
            .ok_or_else(|| DispatchError::UnknownInput {
                tool: session.tool.id.clone(),
                input: id.to_string(),
            })?;

        if spec.is_read_only() {
            return Err(DispatchError::ReadOnlyInput(id.to_string()));
        }

        if !value.is_empty() {
            match spec.kind {
                InputKind::Choice if !spec.choices.iter().any(|c| c == value) => {
                    return Err(DispatchError::InvalidChoice {
                        input: id.to_string(),
                        value: value.to_string(),
                        choices: spec.choices.join(", "),
                    });
                }
                InputKind::Number if value.trim().parse::<f64>().is_err() => {
                    return Err(DispatchError::InvalidNumber {
                        input: id.to_string(),
                        value: value.to_string(),
                    });
                }
                _ => {}
            }
        }

        if value.is_empty() {
            session.inputs.remove(id);
        } else {
            session.inputs.set(id, value);
        }
        Ok(())
    }

    /// The values a run would submit: fixed values, then user entries.
    pub async fn inputs(&self) -> InputValues {
        self.session.lock().await.effective_inputs()
    }

    pub async fn state(&self) -> RunState {
        self.session.lock().await.state
    }

    pub async fn outcome(&self) -> Option<GenerationOutcome> {
        self.session.lock().await.outcome.clone()
    }

    /// Run the active tool once.
    pub async fn run(&self) -> RunReport {
        let (ticket, tool, inputs) = {
            let mut session = self.session.lock().await;
            if session.state == RunState::Pending {
                debug!("Run of '{}' already pending; ignoring trigger", session.tool.id);
                return RunReport::Busy;
            }
            session.epoch += 1;
            session.state = RunState::Pending;
            session.outcome = None;
            session.ack = None;
            (session.ticket(), session.tool.clone(), session.effective_inputs())
        };

        info!("Running tool '{}' ({})", tool.id, tool.strategy.kind());
        let guard = PendingGuard::new(&self.session, ticket.clone());
        let (state, outcome) = self.invoke(&tool, &inputs).await;

        let mut session = self.session.lock().await;
        guard.settle();
        if !session.owns(&ticket) {
            debug!(
                "Discarding stale result of '{}' (epoch {}, now '{}' epoch {})",
                ticket.tool_id, ticket.epoch, session.tool.id, session.epoch
            );
            return RunReport::Discarded;
        }

        session.state = state;
        session.outcome = Some(outcome.clone());
        RunReport::Completed(outcome)
    }

    async fn invoke(&self, tool: &ToolDescriptor, inputs: &InputValues) -> (RunState, GenerationOutcome) {
        match &tool.strategy {
            Strategy::Utility(utility) => match utility.run(inputs).await {
                Ok(UtilityOutput::Text(text)) => (RunState::Succeeded, GenerationOutcome::Text(text)),
                Ok(UtilityOutput::Rendered(r)) => (RunState::Succeeded, GenerationOutcome::Rendered(r)),
                Err(e) => {
                    warn!("Utility '{}' failed: {:#}", utility.name(), e);
                    (
                        RunState::Failed,
                        GenerationOutcome::Error(UNEXPECTED_ERROR_MESSAGE.to_string()),
                    )
                }
            },
            Strategy::Prompt(template) => match self.client.generate(template, inputs).await {
                Generated::Text(text) => (RunState::Succeeded, GenerationOutcome::Text(text)),
                Generated::Failed(message) => (RunState::Failed, GenerationOutcome::Error(message)),
            },
        }
    }

    /// Copy the text outcome to the clipboard and start the acknowledgement.
    pub async fn copy(&self, format: CopyFormat) -> Result<CopyAck, DispatchError> {
        let mut session = self.session.lock().await;
        let payload = session
            .outcome
            .as_ref()
            .and_then(GenerationOutcome::text)
            .map(|text| format.apply(text))
            .ok_or(DispatchError::NothingToCopy)?;

        self.clipboard
            .write_text(&payload)
            .map_err(|e| DispatchError::Clipboard(format!("{:#}", e)))?;

        let ack = CopyAck::from(format);
        session.ack = Some((ack, Instant::now() + COPY_ACK_DURATION));
        debug!("Copied {} chars ({:?})", payload.len(), format);
        Ok(ack)
    }

    /// Current acknowledgement; reverts to `Idle` once its time is up.
    pub async fn copy_ack(&self) -> CopyAck {
        self.session.lock().await.ack_at(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::error::GenerationError;
    use crate::generation::{CompletionBackend, FAILURE_MESSAGE};
    use crate::utility::{ThumbnailDownloader, Utility};
    use anyhow::Result;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    /// Replies with the prompt it received.
    struct Echo;

    #[async_trait]
    impl CompletionBackend for Echo {
        async fn complete(&self, prompt: &str) -> Result<Option<String>, GenerationError> {
            Ok(Some(prompt.to_string()))
        }
    }

    struct Broken;

    #[async_trait]
    impl CompletionBackend for Broken {
        async fn complete(&self, _prompt: &str) -> Result<Option<String>, GenerationError> {
            Err(GenerationError::Backend("connection reset".into()))
        }
    }

    /// Blocks every call until released.
    #[derive(Default)]
    struct Gated {
        release: Notify,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CompletionBackend for Gated {
        async fn complete(&self, _prompt: &str) -> Result<Option<String>, GenerationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.release.notified().await;
            Ok(Some("late answer".into()))
        }
    }

    struct Exploding;

    #[async_trait]
    impl Utility for Exploding {
        fn name(&self) -> &str {
            "exploding"
        }

        async fn run(&self, _inputs: &InputValues) -> Result<UtilityOutput> {
            anyhow::bail!("boom")
        }
    }

    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::new(vec![
                ToolDescriptor::prompt(
                    "titles",
                    "Titles",
                    ToolCategory::Generator,
                    "*",
                    "Title ideas",
                    vec![
                        InputSpec::text("topic", "Topic"),
                        InputSpec::choice("tone", "Tone", &["Fun", "Serious"]),
                        InputSpec::number("count", "Count"),
                    ],
                    "Generate titles about: ",
                ),
                ToolDescriptor::prompt(
                    "resize",
                    "Resize",
                    ToolCategory::Extractor,
                    "*",
                    "Resize tips",
                    vec![InputSpec::text("desc", "Note").fixed("Resizing disabled.")],
                    "Explain thumbnail sizes.",
                ),
                ToolDescriptor::utility(
                    "thumbs",
                    "Thumbs",
                    ToolCategory::Extractor,
                    "v",
                    "Thumbnails",
                    vec![InputSpec::url("url", "URL")],
                    ThumbnailDownloader,
                ),
                ToolDescriptor::utility(
                    "broken",
                    "Broken",
                    ToolCategory::Analyzer,
                    "x",
                    "Always fails",
                    vec![],
                    Exploding,
                ),
            ])
            .unwrap(),
        )
    }

    fn dispatcher(backend: Arc<dyn CompletionBackend>) -> (Arc<Dispatcher>, Arc<MemoryClipboard>) {
        let clipboard = Arc::new(MemoryClipboard::new());
        let dispatcher = Dispatcher::new(catalog(), GenerationClient::new(backend), clipboard.clone());
        (Arc::new(dispatcher), clipboard)
    }

    async fn wait_until_pending(dispatcher: &Dispatcher) {
        for _ in 0..1000 {
            if dispatcher.state().await == RunState::Pending {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("run never became pending");
    }

    #[tokio::test]
    async fn test_first_tool_active_initially() {
        let (d, _) = dispatcher(Arc::new(Echo));
        assert_eq!(d.active_tool().await.id, "titles");
        assert_eq!(d.state().await, RunState::Idle);
        assert_eq!(d.outcome().await, None);
    }

    #[tokio::test]
    async fn test_prompt_tool_sends_template_and_inputs() {
        let (d, _) = dispatcher(Arc::new(Echo));
        d.set_input("topic", "cats").await.unwrap();

        let prompt = match d.run().await {
            RunReport::Completed(GenerationOutcome::Text(prompt)) => prompt,
            other => panic!("unexpected report: {:?}", other),
        };
        let template_at = prompt.find("Generate titles about: ").unwrap();
        let input_at = prompt.find("topic: cats").unwrap();
        assert!(template_at < input_at);
        assert_eq!(d.state().await, RunState::Succeeded);
    }

    #[tokio::test]
    async fn test_generation_failure_is_failed_state() {
        let (d, _) = dispatcher(Arc::new(Broken));
        let report = d.run().await;
        assert_eq!(
            report,
            RunReport::Completed(GenerationOutcome::Error(FAILURE_MESSAGE.into()))
        );
        assert_eq!(d.state().await, RunState::Failed);
    }

    #[tokio::test]
    async fn test_utility_tool_runs_locally() {
        let gated = Arc::new(Gated::default());
        let (d, _) = dispatcher(gated.clone());
        d.select_tool("thumbs").await.unwrap();
        d.set_input("url", "https://youtu.be/dQw4w9WgXcQ").await.unwrap();

        match d.run().await {
            RunReport::Completed(GenerationOutcome::Rendered(Renderable::ThumbnailGallery {
                video_id,
                thumbnails,
            })) => {
                assert_eq!(video_id, "dQw4w9WgXcQ");
                assert_eq!(thumbnails.len(), 3);
            }
            other => panic!("unexpected report: {:?}", other),
        }
        assert_eq!(gated.calls.load(Ordering::SeqCst), 0);

        d.set_input("url", "nonsense").await.unwrap();
        assert_eq!(
            d.run().await,
            RunReport::Completed(GenerationOutcome::Text("Invalid YouTube URL".into()))
        );
        assert_eq!(d.state().await, RunState::Succeeded);
    }

    #[tokio::test]
    async fn test_utility_error_is_caught() {
        let (d, _) = dispatcher(Arc::new(Echo));
        d.select_tool("broken").await.unwrap();
        assert_eq!(
            d.run().await,
            RunReport::Completed(GenerationOutcome::Error(UNEXPECTED_ERROR_MESSAGE.into()))
        );
        assert_eq!(d.state().await, RunState::Failed);

        // Retrying is always possible.
        assert!(matches!(d.run().await, RunReport::Completed(_)));
    }

    #[tokio::test]
    async fn test_switch_resets_everything() {
        let (d, _) = dispatcher(Arc::new(Echo));
        d.set_input("topic", "cats").await.unwrap();
        d.run().await;
        d.copy(CopyFormat::Formatted).await.unwrap();

        d.select_tool("thumbs").await.unwrap();
        assert_eq!(d.state().await, RunState::Idle);
        assert_eq!(d.outcome().await, None);
        assert!(d.inputs().await.is_empty());
        assert_eq!(d.copy_ack().await, CopyAck::Idle);

        // Back to the first tool: nothing carried over.
        d.select_tool("titles").await.unwrap();
        assert!(d.inputs().await.is_empty());
        assert_eq!(d.outcome().await, None);
    }

    #[tokio::test]
    async fn test_unknown_tool_keeps_session() {
        let (d, _) = dispatcher(Arc::new(Echo));
        d.set_input("topic", "cats").await.unwrap();
        let err = d.select_tool("missing").await.unwrap_err();
        assert!(matches!(err, DispatchError::ToolNotFound(_)));
        assert_eq!(d.inputs().await.get("topic"), Some("cats"));
    }

    #[tokio::test]
    async fn test_empty_value_clears_input() {
        let (d, _) = dispatcher(Arc::new(Echo));
        d.set_input("topic", "cats").await.unwrap();
        d.set_input("count", "3").await.unwrap();
        d.set_input("topic", "").await.unwrap();

        let inputs = d.inputs().await;
        assert_eq!(inputs.get("topic"), None);
        assert_eq!(inputs.iter().collect::<Vec<_>>(), vec![("count", "3")]);

        let prompt = match d.run().await {
            RunReport::Completed(GenerationOutcome::Text(prompt)) => prompt,
            other => panic!("unexpected report: {:?}", other),
        };
        assert!(prompt.ends_with("User Inputs:\n- count: 3\n"), "{:?}", prompt);
        assert!(!prompt.contains("- topic:"));
    }

    #[tokio::test]
    async fn test_input_validation() {
        let (d, _) = dispatcher(Arc::new(Echo));

        assert!(matches!(
            d.set_input("nope", "x").await.unwrap_err(),
            DispatchError::UnknownInput { .. }
        ));
        assert!(matches!(
            d.set_input("tone", "Angry").await.unwrap_err(),
            DispatchError::InvalidChoice { .. }
        ));
        assert!(matches!(
            d.set_input("count", "three").await.unwrap_err(),
            DispatchError::InvalidNumber { .. }
        ));

        d.set_input("tone", "Fun").await.unwrap();
        d.set_input("count", "3").await.unwrap();
        let inputs = d.inputs().await;
        assert_eq!(inputs.get("tone"), Some("Fun"));
        assert_eq!(inputs.get("count"), Some("3"));
    }

    #[tokio::test]
    async fn test_fixed_inputs_are_read_only_and_submitted() {
        let (d, _) = dispatcher(Arc::new(Echo));
        d.select_tool("resize").await.unwrap();

        assert!(matches!(
            d.set_input("desc", "other").await.unwrap_err(),
            DispatchError::ReadOnlyInput(_)
        ));

        let RunReport::Completed(GenerationOutcome::Text(prompt)) = d.run().await else {
            panic!("expected text");
        };
        assert!(prompt.contains("- desc: Resizing disabled."));
    }

    #[tokio::test]
    async fn test_trigger_is_inert_while_pending() {
        let gated = Arc::new(Gated::default());
        let (d, _) = dispatcher(gated.clone());

        let first = tokio::spawn({
            let d = d.clone();
            async move { d.run().await }
        });
        wait_until_pending(&d).await;

        assert_eq!(d.run().await, RunReport::Busy);
        assert_eq!(gated.calls.load(Ordering::SeqCst), 1);

        gated.release.notify_one();
        assert_eq!(
            first.await.unwrap(),
            RunReport::Completed(GenerationOutcome::Text("late answer".into()))
        );
        assert_eq!(gated.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_timed_out_run_does_not_block_next_trigger() {
        let gated = Arc::new(Gated::default());
        let (d, _) = dispatcher(gated.clone());

        let timed_out = tokio::time::timeout(Duration::from_millis(20), d.run()).await;
        assert!(timed_out.is_err());
        assert_eq!(d.state().await, RunState::Idle);

        gated.release.notify_one();
        assert_eq!(
            d.run().await,
            RunReport::Completed(GenerationOutcome::Text("late answer".into()))
        );
        assert_eq!(gated.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_aborted_run_returns_to_idle() {
        let gated = Arc::new(Gated::default());
        let (d, _) = dispatcher(gated.clone());

        let in_flight = tokio::spawn({
            let d = d.clone();
            async move { d.run().await }
        });
        wait_until_pending(&d).await;

        in_flight.abort();
        assert!(in_flight.await.unwrap_err().is_cancelled());
        assert_eq!(d.state().await, RunState::Idle);
        assert_eq!(d.outcome().await, None);

        gated.release.notify_one();
        assert!(matches!(d.run().await, RunReport::Completed(_)));
    }

    #[tokio::test]
    async fn test_new_run_clears_previous_outcome() {
        let gated = Arc::new(Gated::default());
        let (d, _) = dispatcher(gated.clone());

        gated.release.notify_one();
        d.run().await;
        assert!(d.outcome().await.is_some());

        let second = tokio::spawn({
            let d = d.clone();
            async move { d.run().await }
        });
        wait_until_pending(&d).await;
        assert_eq!(d.outcome().await, None);

        gated.release.notify_one();
        second.await.unwrap();
        assert!(d.outcome().await.is_some());
    }

    #[tokio::test]
    async fn test_stale_result_is_discarded_after_switch() {
        let gated = Arc::new(Gated::default());
        let (d, _) = dispatcher(gated.clone());

        let in_flight = tokio::spawn({
            let d = d.clone();
            async move { d.run().await }
        });
        wait_until_pending(&d).await;

        d.select_tool("resize").await.unwrap();
        gated.release.notify_one();

        assert_eq!(in_flight.await.unwrap(), RunReport::Discarded);
        assert_eq!(d.active_tool().await.id, "resize");
        assert_eq!(d.state().await, RunState::Idle);
        assert_eq!(d.outcome().await, None);
    }

    #[tokio::test]
    async fn test_stale_result_is_discarded_after_switching_back() {
        let gated = Arc::new(Gated::default());
        let (d, _) = dispatcher(gated.clone());

        let in_flight = tokio::spawn({
            let d = d.clone();
            async move { d.run().await }
        });
        wait_until_pending(&d).await;

        d.select_tool("resize").await.unwrap();
        d.select_tool("titles").await.unwrap();
        gated.release.notify_one();

        assert_eq!(in_flight.await.unwrap(), RunReport::Discarded);
        assert_eq!(d.outcome().await, None);
    }

    #[tokio::test]
    async fn test_copy_variants() {
        let (d, clipboard) = dispatcher(Arc::new(Echo));
        d.set_input("topic", "cats").await.unwrap();
        d.run().await;

        assert_eq!(d.copy(CopyFormat::Formatted).await.unwrap(), CopyAck::CopiedFormatted);
        let formatted = clipboard.contents().unwrap();
        assert!(formatted.contains("- topic: cats"));

        assert_eq!(d.copy(CopyFormat::Plain).await.unwrap(), CopyAck::CopiedPlain);
        let plain = clipboard.contents().unwrap();
        assert!(plain.contains("topic: cats"));
        assert!(!plain.contains("- topic"));
    }

    #[tokio::test]
    async fn test_copy_requires_text() {
        let (d, _) = dispatcher(Arc::new(Broken));
        assert!(matches!(
            d.copy(CopyFormat::Plain).await.unwrap_err(),
            DispatchError::NothingToCopy
        ));

        d.run().await;
        assert!(matches!(
            d.copy(CopyFormat::Plain).await.unwrap_err(),
            DispatchError::NothingToCopy
        ));

        d.select_tool("thumbs").await.unwrap();
        d.set_input("url", "https://youtu.be/dQw4w9WgXcQ").await.unwrap();
        d.run().await;
        assert!(matches!(
            d.copy(CopyFormat::Formatted).await.unwrap_err(),
            DispatchError::NothingToCopy
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_ack_reverts_after_delay() {
        let (d, _) = dispatcher(Arc::new(Echo));
        d.run().await;

        d.copy(CopyFormat::Formatted).await.unwrap();
        assert_eq!(d.copy_ack().await, CopyAck::CopiedFormatted);

        tokio::time::advance(Duration::from_millis(1999)).await;
        assert_eq!(d.copy_ack().await, CopyAck::CopiedFormatted);

        tokio::time::advance(Duration::from_millis(1)).await;
        assert_eq!(d.copy_ack().await, CopyAck::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_copy_restarts_ack_timer() {
        let (d, _) = dispatcher(Arc::new(Echo));
        d.run().await;

        d.copy(CopyFormat::Formatted).await.unwrap();
        tokio::time::advance(Duration::from_millis(1500)).await;
        d.copy(CopyFormat::Plain).await.unwrap();
        tokio::time::advance(Duration::from_millis(1500)).await;
        assert_eq!(d.copy_ack().await, CopyAck::CopiedPlain);

        tokio::time::advance(Duration::from_millis(500)).await;
        assert_eq!(d.copy_ack().await, CopyAck::Idle);
    }

    #[tokio::test]
    async fn test_run_clears_copy_ack() {
        let (d, _) = dispatcher(Arc::new(Echo));
        d.run().await;
        d.copy(CopyFormat::Formatted).await.unwrap();
        d.run().await;
        assert_eq!(d.copy_ack().await, CopyAck::Idle);
    }
}
