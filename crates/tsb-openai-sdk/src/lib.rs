// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]
#![warn(missing_docs)]

//! OpenAI wire shapes used by the toolset bridge.
//!
//! Field names and enum values are reproduced byte-for-byte from the
//! provider's public API contract (`tool_call_id`, `function.arguments`,
//! the run `status` values, ...); anything that serializes here must
//! interoperate with the real endpoints unchanged.

pub mod assistant;
pub mod chat;
mod error;

pub use assistant::{
    AssistantClient, RequiredAction, Run, RunStatus, SubmitToolOutputs, Thread, ToolOutput,
};
pub use chat::{
    ChatCompletion, ChatCompletionTool, Choice, FunctionCall, FunctionDefinition, Message,
    ToolCall, Usage, tool_from_action,
};
pub use error::ClientError;
