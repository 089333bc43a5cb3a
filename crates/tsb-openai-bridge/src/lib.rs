// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]

//! tsb-openai-bridge
//!
//! Bridges a generic action toolset into OpenAI tool calling:
//!
//! - `get_actions` / `get_tools` reshape toolset descriptors into the
//!   provider's function tool schema.
//! - `execute_tool_call` / `handle_tool_call` route completion tool calls
//!   back into the toolset and return JSON-encoded results.
//! - `handle_assistant_message` / `wait_and_handle_assistant_tool_calls`
//!   drive an assistant run: execute pending tool calls concurrently,
//!   submit the outputs, and poll until the run reaches a terminal status.
//!
//! The bridge owns no actions, no transport, and no retry policy; toolset
//! and client errors propagate untranslated.

pub mod cancel;
pub mod compat;
pub mod config;
pub mod error;
pub mod poll;

pub use cancel::CancellationToken;
pub use config::BridgeConfig;
pub use error::BridgeError;
pub use poll::PollConfig;

use futures::future;
use tracing::debug;
use tsb_openai_sdk::{ChatCompletion, ChatCompletionTool, Run, ToolCall, ToolOutput, tool_from_action};
use tsb_toolset::{ActionFilter, ToolFilter, Toolset};

/// Adapter between a [`Toolset`] and OpenAI tool calling.
pub struct OpenAiBridge<T> {
    toolset: T,
    config: BridgeConfig,
}

impl<T: Toolset> OpenAiBridge<T> {
    /// Create a bridge with the default configuration.
    pub fn new(toolset: T) -> Self {
        Self::with_config(toolset, BridgeConfig::default())
    }

    /// Create a bridge with an explicit configuration.
    pub fn with_config(toolset: T, config: BridgeConfig) -> Self {
        Self { toolset, config }
    }

    /// The bridge configuration.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// The underlying toolset.
    pub fn toolset(&self) -> &T {
        &self.toolset
    }

    /// An explicit entity id always wins over the configured default.
    fn resolve_entity<'a>(&'a self, entity_id: Option<&'a str>) -> &'a str {
        entity_id.unwrap_or(&self.config.entity_id)
    }

    /// Fetch the named actions and reshape them into provider tool schemas.
    ///
    /// Returns an empty vector when nothing matches; no side effects beyond
    /// the delegated fetch.
    pub async fn get_actions(
        &self,
        filter: &ActionFilter,
        entity_id: Option<&str>,
    ) -> Result<Vec<ChatCompletionTool>, BridgeError> {
        let actions = self.toolset.actions_schema(filter, entity_id).await?;
        Ok(actions.iter().map(tool_from_action).collect())
    }

    /// Fetch actions by app/tag/use-case and reshape them into provider
    /// tool schemas.
    pub async fn get_tools(
        &self,
        filter: &ToolFilter,
        entity_id: Option<&str>,
    ) -> Result<Vec<ChatCompletionTool>, BridgeError> {
        let actions = self.toolset.tools_schema(filter, entity_id).await?;
        Ok(actions.iter().map(tool_from_action).collect())
    }

    /// Execute a single tool call and return its JSON-encoded result.
    ///
    /// The call's argument string must parse as JSON; the parse error
    /// propagates otherwise, as does any execution failure.
    pub async fn execute_tool_call(
        &self,
        call: &ToolCall,
        entity_id: Option<&str>,
    ) -> Result<String, BridgeError> {
        let params: serde_json::Value =
            serde_json::from_str(&call.function.arguments).map_err(|source| {
                BridgeError::InvalidArguments {
                    call_id: call.id.clone(),
                    source,
                }
            })?;
        let entity = self.resolve_entity(entity_id);
        debug!(
            target: "tsb.bridge",
            call_id = %call.id,
            action = %call.function.name,
            entity,
            "executing tool call"
        );
        let result = self
            .toolset
            .execute_action(&call.function.name, params, entity)
            .await?;
        Ok(serde_json::to_string(&result)?)
    }

    /// Execute the tool calls requested by a chat completion.
    ///
    /// Only the first tool call of each choice is executed; choices without
    /// tool calls contribute nothing.
    pub async fn handle_tool_call(
        &self,
        completion: &ChatCompletion,
        entity_id: Option<&str>,
    ) -> Result<Vec<String>, BridgeError> {
        let mut outputs = Vec::new();
        for choice in &completion.choices {
            if let Some(call) = choice
                .message
                .tool_calls
                .as_deref()
                .and_then(<[ToolCall]>::first)
            {
                outputs.push(self.execute_tool_call(call, entity_id).await?);
            }
        }
        Ok(outputs)
    }

    /// Execute all tool calls a run is blocked on, concurrently.
    ///
    /// Returns one `{tool_call_id, output}` pair per pending call, in
    /// submission order.
    pub async fn handle_assistant_message(
        &self,
        run: &Run,
        entity_id: Option<&str>,
    ) -> Result<Vec<ToolOutput>, BridgeError> {
        let calls = run.pending_tool_calls();
        debug!(
            target: "tsb.bridge",
            run_id = %run.id,
            pending = calls.len(),
            "handling assistant message"
        );
        future::try_join_all(calls.iter().map(|call| async move {
            let output = self.execute_tool_call(call, entity_id).await?;
            Ok(ToolOutput {
                tool_call_id: call.id.clone(),
                output,
            })
        }))
        .await
    }
}
