// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]

//! Mock toolset and assistant client for local development and tests.

use async_trait::async_trait;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Mutex;
use tsb_openai_sdk::{
    AssistantClient, ClientError, RequiredAction, Run, RunStatus, SubmitToolOutputs, ToolCall,
    ToolOutput,
};
use tsb_toolset::{ActionDescriptor, ActionFilter, ToolFilter, Toolset, ToolsetError};

// ---------------------------------------------------------------------------
// MockToolset
// ---------------------------------------------------------------------------

/// A single recorded action execution.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutedCall {
    /// Action that was invoked.
    pub action: String,
    /// Parameters it received.
    pub params: serde_json::Value,
    /// Entity the call was scoped to.
    pub entity_id: String,
}

/// A toolset for local development and unit tests.
///
/// Holds scripted descriptors grouped by app, records every execution, and
/// echoes `{action, params, entity_id}` back as the execution result so
/// callers can assert routing and round-trips.
#[derive(Debug, Default)]
pub struct MockToolset {
    entries: Vec<(String, ActionDescriptor)>,
    failing: Vec<String>,
    executed: Mutex<Vec<ExecutedCall>>,
}

impl MockToolset {
    /// Create an empty mock toolset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action under the given app.
    #[must_use]
    pub fn with_action(
        mut self,
        app: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        self.entries.push((
            app.into(),
            ActionDescriptor::new(name, description, parameters),
        ));
        self
    }

    /// Make the named action fail with [`ToolsetError::ExecutionFailed`].
    #[must_use]
    pub fn with_failing_action(mut self, name: impl Into<String>) -> Self {
        self.failing.push(name.into());
        self
    }

    /// Every execution recorded so far, in invocation order.
    pub fn executed(&self) -> Vec<ExecutedCall> {
        self.executed.lock().expect("executed lock poisoned").clone()
    }

    fn descriptor(&self, name: &str) -> Option<&ActionDescriptor> {
        self.entries
            .iter()
            .map(|(_, descriptor)| descriptor)
            .find(|descriptor| descriptor.name == name)
    }
}

#[async_trait]
impl Toolset for MockToolset {
    async fn actions_schema(
        &self,
        filter: &ActionFilter,
        _entity_id: Option<&str>,
    ) -> Result<Vec<ActionDescriptor>, ToolsetError> {
        let selected = self
            .entries
            .iter()
            .map(|(_, descriptor)| descriptor)
            .filter(|descriptor| match &filter.actions {
                Some(names) => names.contains(&descriptor.name),
                None => true,
            })
            .cloned()
            .collect();
        Ok(selected)
    }

    async fn tools_schema(
        &self,
        filter: &ToolFilter,
        _entity_id: Option<&str>,
    ) -> Result<Vec<ActionDescriptor>, ToolsetError> {
        // Tags and use-case narrowing are ranking concerns of a real engine;
        // the mock selects by app membership only.
        let selected = self
            .entries
            .iter()
            .filter(|(app, _)| filter.apps.contains(app))
            .map(|(_, descriptor)| descriptor.clone())
            .collect();
        Ok(selected)
    }

    async fn execute_action(
        &self,
        name: &str,
        params: serde_json::Value,
        entity_id: &str,
    ) -> Result<serde_json::Value, ToolsetError> {
        if self.descriptor(name).is_none() {
            return Err(ToolsetError::UnknownAction(name.to_string()));
        }
        if self.failing.iter().any(|failing| failing == name) {
            return Err(ToolsetError::ExecutionFailed {
                name: name.to_string(),
                message: "scripted failure".into(),
            });
        }
        self.executed
            .lock()
            .expect("executed lock poisoned")
            .push(ExecutedCall {
                action: name.to_string(),
                params: params.clone(),
                entity_id: entity_id.to_string(),
            });
        Ok(json!({
            "action": name,
            "params": params,
            "entity_id": entity_id,
        }))
    }
}

// ---------------------------------------------------------------------------
// MockAssistantClient
// ---------------------------------------------------------------------------

/// An assistant client that replays scripted runs.
///
/// `retrieve_run` and `submit_tool_outputs` each pop from their own queue;
/// an exhausted queue yields [`ClientError::Transport`], which doubles as
/// the failure mode for transport-error tests.
#[derive(Debug, Default)]
pub struct MockAssistantClient {
    retrieve_queue: Mutex<VecDeque<Run>>,
    submit_queue: Mutex<VecDeque<Run>>,
    submitted: Mutex<Vec<Vec<ToolOutput>>>,
}

impl MockAssistantClient {
    /// Create a client with empty queues (every call fails).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next run returned by `retrieve_run`.
    #[must_use]
    pub fn on_retrieve(self, run: Run) -> Self {
        self.retrieve_queue
            .lock()
            .expect("retrieve lock poisoned")
            .push_back(run);
        self
    }

    /// Script the next run returned by `submit_tool_outputs`.
    #[must_use]
    pub fn on_submit(self, run: Run) -> Self {
        self.submit_queue
            .lock()
            .expect("submit lock poisoned")
            .push_back(run);
        self
    }

    /// Every batch of outputs submitted so far, in submission order.
    pub fn submitted(&self) -> Vec<Vec<ToolOutput>> {
        self.submitted.lock().expect("submitted lock poisoned").clone()
    }
}

#[async_trait]
impl AssistantClient for MockAssistantClient {
    async fn retrieve_run(&self, _thread_id: &str, run_id: &str) -> Result<Run, ClientError> {
        self.retrieve_queue
            .lock()
            .expect("retrieve lock poisoned")
            .pop_front()
            .ok_or_else(|| ClientError::Transport(format!("no scripted run for {run_id}")))
    }

    async fn submit_tool_outputs(
        &self,
        _thread_id: &str,
        run_id: &str,
        outputs: Vec<ToolOutput>,
    ) -> Result<Run, ClientError> {
        self.submitted
            .lock()
            .expect("submitted lock poisoned")
            .push(outputs);
        self.submit_queue
            .lock()
            .expect("submit lock poisoned")
            .pop_front()
            .ok_or_else(|| ClientError::Transport(format!("no scripted submission for {run_id}")))
    }
}

// ---------------------------------------------------------------------------
// Run construction helpers
// ---------------------------------------------------------------------------

/// Build a run with the given status and no pending action.
#[must_use]
pub fn run_with_status(id: &str, thread_id: &str, status: RunStatus) -> Run {
    Run {
        id: id.into(),
        thread_id: thread_id.into(),
        status,
        required_action: None,
    }
}

/// Build a `requires_action` run blocked on the given tool calls.
#[must_use]
pub fn run_requiring(id: &str, thread_id: &str, tool_calls: Vec<ToolCall>) -> Run {
    Run {
        id: id.into(),
        thread_id: thread_id.into(),
        status: RunStatus::RequiresAction,
        required_action: Some(RequiredAction {
            action_type: "submit_tool_outputs".into(),
            submit_tool_outputs: SubmitToolOutputs { tool_calls },
        }),
    }
}

/// Build a function tool call with a JSON-encoded argument payload.
#[must_use]
pub fn tool_call(id: &str, name: &str, arguments: &str) -> ToolCall {
    ToolCall {
        id: id.into(),
        call_type: "function".into(),
        function: tsb_openai_sdk::FunctionCall {
            name: name.into(),
            arguments: arguments.into(),
        },
    }
}
