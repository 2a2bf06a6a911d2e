//! Per-tool session state owned by the dispatcher.

use crate::catalog::ToolDescriptor;
use crate::types::{CopyAck, GenerationOutcome, InputValues, RunState};
use std::sync::Arc;
use tokio::time::Instant;

/// Identifies one in-flight invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Ticket {
    pub tool_id: String,
    pub epoch: u64,
}

/// Everything that belongs to the active tool. Replaced wholesale on a switch.
#[derive(Debug)]
pub(crate) struct Session {
    pub tool: Arc<ToolDescriptor>,
    /// Values entered by the user, in entry order.
    pub inputs: InputValues,
    pub state: RunState,
    pub outcome: Option<GenerationOutcome>,
    /// Bumped on every tool switch and every run start.
    pub epoch: u64,
    pub ack: Option<(CopyAck, Instant)>,
}

impl Session {
    pub fn fresh(tool: Arc<ToolDescriptor>, epoch: u64) -> Self {
        Self {
            tool,
            inputs: InputValues::new(),
            state: RunState::Idle,
            outcome: None,
            epoch,
            ack: None,
        }
    }

    /// Fixed values in declaration order, then user-entered values.
    pub fn effective_inputs(&self) -> InputValues {
        let mut values: InputValues = self
            .tool
            .inputs
            .iter()
            .filter_map(|i| i.fixed.as_ref().map(|v| (i.id.clone(), v.clone())))
            .collect();
        for (key, value) in self.inputs.iter() {
            values.set(key, value);
        }
        values
    }

    pub fn ticket(&self) -> Ticket {
        Ticket {
            tool_id: self.tool.id.clone(),
            epoch: self.epoch,
        }
    }

    /// Whether a completion for `ticket` may still be applied.
    pub fn owns(&self, ticket: &Ticket) -> bool {
        self.epoch == ticket.epoch && self.tool.id == ticket.tool_id
    }

    pub fn ack_at(&self, now: Instant) -> CopyAck {
        match self.ack {
            Some((ack, until)) if now < until => ack,
            _ => CopyAck::Idle,
        }
    }
}
