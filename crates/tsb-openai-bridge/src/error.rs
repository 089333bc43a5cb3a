// SPDX-License-Identifier: MIT OR Apache-2.0
use thiserror::Error;
use tsb_openai_sdk::ClientError;
use tsb_toolset::ToolsetError;

/// Errors surfaced by the bridge.
///
/// Toolset and client failures pass through transparently: the bridge
/// neither catches nor translates them, and applies no retries.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A tool call's argument payload was not parseable JSON.
    #[error("tool call '{call_id}' has malformed arguments: {source}")]
    InvalidArguments {
        /// Identifier of the offending tool call.
        call_id: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The underlying action execution failed.
    #[error(transparent)]
    Toolset(#[from] ToolsetError),

    /// The provider client call failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// An execution result could not be re-serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The run was still not terminal after the configured number of
    /// status checks.
    #[error("run '{run_id}' still not terminal after {checks} status checks")]
    PollCeiling {
        /// The run being waited on.
        run_id: String,
        /// Status checks performed before giving up.
        checks: u32,
    },

    /// The wait exceeded the configured overall timeout.
    #[error("wait for run '{run_id}' timed out after {elapsed_ms} ms")]
    PollTimeout {
        /// The run being waited on.
        run_id: String,
        /// Wall-clock milliseconds spent waiting.
        elapsed_ms: u64,
    },

    /// The wait was cancelled through its token.
    #[error("wait for run '{run_id}' was cancelled")]
    Cancelled {
        /// The run being waited on.
        run_id: String,
    },
}
