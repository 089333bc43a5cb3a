// SPDX-License-Identifier: MIT OR Apache-2.0
//! Deprecated 0.1 method names.
//!
//! Thin forwarding shims only: each alias logs a deprecation warning and
//! calls its canonical twin. This module carries no logic of its own and
//! can be deleted wholesale once the 0.1 names are retired.

use crate::OpenAiBridge;
use crate::error::BridgeError;
use tracing::warn;
use tsb_openai_sdk::{
    AssistantClient, ChatCompletion, ChatCompletionTool, Run, Thread, ToolCall, ToolOutput,
};
use tsb_toolset::{ActionFilter, ToolFilter, Toolset};

/// Legacy name → canonical name, one entry per aliased operation.
pub const LEGACY_ALIASES: &[(&str, &str)] = &[
    ("actions", "get_actions"),
    ("tools", "get_tools"),
    ("execute_call", "execute_tool_call"),
    ("handle_calls", "handle_tool_call"),
    ("handle_run", "handle_assistant_message"),
    ("wait_for_run", "wait_and_handle_assistant_tool_calls"),
];

impl<T: Toolset> OpenAiBridge<T> {
    /// Legacy name for [`get_actions`](Self::get_actions).
    #[deprecated(since = "0.2.0", note = "use `get_actions` instead")]
    pub async fn actions(
        &self,
        filter: &ActionFilter,
        entity_id: Option<&str>,
    ) -> Result<Vec<ChatCompletionTool>, BridgeError> {
        warn!(target: "tsb.bridge.compat", "`actions` is deprecated, use `get_actions` instead");
        self.get_actions(filter, entity_id).await
    }

    /// Legacy name for [`get_tools`](Self::get_tools).
    #[deprecated(since = "0.2.0", note = "use `get_tools` instead")]
    pub async fn tools(
        &self,
        filter: &ToolFilter,
        entity_id: Option<&str>,
    ) -> Result<Vec<ChatCompletionTool>, BridgeError> {
        warn!(target: "tsb.bridge.compat", "`tools` is deprecated, use `get_tools` instead");
        self.get_tools(filter, entity_id).await
    }

    /// Legacy name for [`execute_tool_call`](Self::execute_tool_call).
    #[deprecated(since = "0.2.0", note = "use `execute_tool_call` instead")]
    pub async fn execute_call(
        &self,
        call: &ToolCall,
        entity_id: Option<&str>,
    ) -> Result<String, BridgeError> {
        warn!(
            target: "tsb.bridge.compat",
            "`execute_call` is deprecated, use `execute_tool_call` instead"
        );
        self.execute_tool_call(call, entity_id).await
    }

    /// Legacy name for [`handle_tool_call`](Self::handle_tool_call).
    #[deprecated(since = "0.2.0", note = "use `handle_tool_call` instead")]
    pub async fn handle_calls(
        &self,
        completion: &ChatCompletion,
        entity_id: Option<&str>,
    ) -> Result<Vec<String>, BridgeError> {
        warn!(
            target: "tsb.bridge.compat",
            "`handle_calls` is deprecated, use `handle_tool_call` instead"
        );
        self.handle_tool_call(completion, entity_id).await
    }

    /// Legacy name for
    /// [`handle_assistant_message`](Self::handle_assistant_message).
    #[deprecated(since = "0.2.0", note = "use `handle_assistant_message` instead")]
    pub async fn handle_run(
        &self,
        run: &Run,
        entity_id: Option<&str>,
    ) -> Result<Vec<ToolOutput>, BridgeError> {
        warn!(
            target: "tsb.bridge.compat",
            "`handle_run` is deprecated, use `handle_assistant_message` instead"
        );
        self.handle_assistant_message(run, entity_id).await
    }

    /// Legacy name for [`wait_and_handle_assistant_tool_calls`].
    ///
    /// [`wait_and_handle_assistant_tool_calls`]: Self::wait_and_handle_assistant_tool_calls
    #[deprecated(
        since = "0.2.0",
        note = "use `wait_and_handle_assistant_tool_calls` instead"
    )]
    pub async fn wait_for_run<C: AssistantClient>(
        &self,
        client: &C,
        run: Run,
        thread: &Thread,
        entity_id: Option<&str>,
    ) -> Result<Run, BridgeError> {
        warn!(
            target: "tsb.bridge.compat",
            "`wait_for_run` is deprecated, use `wait_and_handle_assistant_tool_calls` instead"
        );
        self.wait_and_handle_assistant_tool_calls(client, run, thread, entity_id)
            .await
    }
}
