// SPDX-License-Identifier: MIT OR Apache-2.0
//! Polling loop that drives an assistant run to a terminal status.
//!
//! The loop keeps submitting tool outputs while the run requires action and
//! re-fetches the run status otherwise, waiting a configurable interval
//! between checks. It is bounded by a check ceiling and an overall timeout,
//! and can be aborted through a [`CancellationToken`].

use crate::OpenAiBridge;
use crate::cancel::CancellationToken;
use crate::error::BridgeError;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use tsb_openai_sdk::{AssistantClient, Run, RunStatus, Thread};
use tsb_toolset::Toolset;

// ── Configuration ───────────────────────────────────────────────────

/// Configuration for assistant-run polling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    /// Delay between status checks.
    #[serde(with = "duration_millis")]
    pub interval: Duration,
    /// Maximum number of status re-fetches before giving up.
    pub max_checks: u32,
    /// Overall wall-clock ceiling across the whole wait, including
    /// tool-output submissions.
    #[serde(with = "duration_millis")]
    pub overall_timeout: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(500),
            max_checks: 600,
            overall_timeout: Duration::from_secs(300),
        }
    }
}

/// Serde helper encoding a `Duration` as integer milliseconds.
mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(val: &Duration, ser: S) -> Result<S::Ok, S::Error> {
        val.as_millis().serialize(ser)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Duration, D::Error> {
        let ms: u64 = u64::deserialize(de)?;
        Ok(Duration::from_millis(ms))
    }
}

// ── Wait loop ───────────────────────────────────────────────────────

impl<T: Toolset> OpenAiBridge<T> {
    /// Drive `run` until it reaches a terminal status.
    ///
    /// Whenever the run requires action, the pending tool calls are
    /// executed and their outputs submitted; otherwise the run status is
    /// re-fetched after the configured interval. Returns the last observed
    /// run. Client errors propagate uncaught; no retries are applied.
    pub async fn wait_and_handle_assistant_tool_calls<C: AssistantClient>(
        &self,
        client: &C,
        run: Run,
        thread: &Thread,
        entity_id: Option<&str>,
    ) -> Result<Run, BridgeError> {
        self.wait_and_handle_assistant_tool_calls_with_cancel(
            client,
            run,
            thread,
            entity_id,
            &CancellationToken::new(),
        )
        .await
    }

    /// [`wait_and_handle_assistant_tool_calls`] with an explicit
    /// cancellation token.
    ///
    /// Firing the token ends the wait with [`BridgeError::Cancelled`] at
    /// the next check or mid-sleep, whichever comes first.
    ///
    /// [`wait_and_handle_assistant_tool_calls`]: Self::wait_and_handle_assistant_tool_calls
    pub async fn wait_and_handle_assistant_tool_calls_with_cancel<C: AssistantClient>(
        &self,
        client: &C,
        mut run: Run,
        thread: &Thread,
        entity_id: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<Run, BridgeError> {
        let poll = &self.config().poll;
        let started = Instant::now();
        let mut checks: u32 = 0;

        while !run.status.is_terminal() {
            if cancel.is_cancelled() {
                return Err(BridgeError::Cancelled { run_id: run.id });
            }
            if started.elapsed() >= poll.overall_timeout {
                warn!(
                    target: "tsb.bridge.poll",
                    run_id = %run.id,
                    checks,
                    "overall timeout exceeded"
                );
                return Err(BridgeError::PollTimeout {
                    run_id: run.id,
                    elapsed_ms: started.elapsed().as_millis() as u64,
                });
            }

            if run.status == RunStatus::RequiresAction {
                let outputs = self.handle_assistant_message(&run, entity_id).await?;
                debug!(
                    target: "tsb.bridge.poll",
                    run_id = %run.id,
                    outputs = outputs.len(),
                    "submitting tool outputs"
                );
                run = client
                    .submit_tool_outputs(&thread.id, &run.id, outputs)
                    .await?;
            } else {
                if checks >= poll.max_checks {
                    warn!(
                        target: "tsb.bridge.poll",
                        run_id = %run.id,
                        checks,
                        "status-check ceiling reached"
                    );
                    return Err(BridgeError::PollCeiling {
                        run_id: run.id,
                        checks,
                    });
                }
                checks += 1;
                run = client.retrieve_run(&thread.id, &run.id).await?;
                debug!(
                    target: "tsb.bridge.poll",
                    run_id = %run.id,
                    status = ?run.status,
                    checks,
                    "run status checked"
                );
                tokio::select! {
                    () = tokio::time::sleep(poll.interval) => {}
                    () = cancel.cancelled() => {
                        return Err(BridgeError::Cancelled { run_id: run.id });
                    }
                }
            }
        }

        Ok(run)
    }
}
