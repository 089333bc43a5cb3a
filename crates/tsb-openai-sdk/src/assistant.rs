// SPDX-License-Identifier: MIT OR Apache-2.0
//! Assistant-run shapes and the client contract for driving runs.

use crate::chat::ToolCall;
use crate::error::ClientError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Run status
// ---------------------------------------------------------------------------

/// Lifecycle status of an assistant run.
///
/// Serializes to the provider's snake_case status strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// The run is waiting to be picked up.
    Queued,
    /// The run is executing.
    InProgress,
    /// The run is blocked on tool outputs from the caller.
    RequiresAction,
    /// Cancellation has been requested but not finished.
    Cancelling,
    /// The run was cancelled.
    Cancelled,
    /// The run failed.
    Failed,
    /// The run finished successfully.
    Completed,
    /// The run ended before producing a complete result.
    Incomplete,
    /// The run expired before finishing.
    Expired,
}

impl RunStatus {
    /// Returns `true` once the run can no longer make progress.
    ///
    /// `queued`, `in_progress`, and `requires_action` are the only
    /// non-terminal statuses; everything else ends a polling loop.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(
            self,
            Self::Queued | Self::InProgress | Self::RequiresAction
        )
    }
}

// ---------------------------------------------------------------------------
// Run and thread shapes
// ---------------------------------------------------------------------------

/// An assistant run, owned and mutated exclusively by the provider.
///
/// The bridge only reads `status` and the required-action tool calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    /// Unique run identifier.
    pub id: String,
    /// Thread this run belongs to.
    pub thread_id: String,
    /// Current lifecycle status.
    pub status: RunStatus,
    /// Action the provider is waiting on, when `status` is `requires_action`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_action: Option<RequiredAction>,
}

impl Run {
    /// Tool calls the provider is waiting on.
    ///
    /// Empty when the run requires no action, so callers never have to poke
    /// through the optional chain themselves.
    #[must_use]
    pub fn pending_tool_calls(&self) -> &[ToolCall] {
        self.required_action
            .as_ref()
            .map(|action| action.submit_tool_outputs.tool_calls.as_slice())
            .unwrap_or_default()
    }
}

/// The pending action attached to a `requires_action` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiredAction {
    /// Action type (always `"submit_tool_outputs"`).
    #[serde(rename = "type")]
    pub action_type: String,
    /// The tool calls awaiting outputs.
    pub submit_tool_outputs: SubmitToolOutputs,
}

/// Container for the tool calls a run is blocked on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitToolOutputs {
    /// The pending tool calls, in provider order.
    pub tool_calls: Vec<ToolCall>,
}

/// The result of one executed tool call, ready for submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolOutput {
    /// Identifier of the tool call this output answers.
    pub tool_call_id: String,
    /// JSON-encoded execution result.
    pub output: String,
}

/// An assistant conversation thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    /// Unique thread identifier.
    pub id: String,
}

// ---------------------------------------------------------------------------
// Client contract
// ---------------------------------------------------------------------------

/// The subset of the provider client a bridge needs to drive a run.
///
/// Run/thread lifecycle, transport, and authentication are owned by the
/// implementation; the bridge applies no retry or backoff on top.
#[async_trait]
pub trait AssistantClient: Send + Sync {
    /// Fetch the current state of a run.
    async fn retrieve_run(&self, thread_id: &str, run_id: &str) -> Result<Run, ClientError>;

    /// Submit tool outputs for a `requires_action` run, returning the
    /// updated run.
    async fn submit_tool_outputs(
        &self,
        thread_id: &str,
        run_id: &str,
        outputs: Vec<ToolOutput>,
    ) -> Result<Run, ClientError>;
}
