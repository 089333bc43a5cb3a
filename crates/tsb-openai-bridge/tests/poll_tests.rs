// SPDX-License-Identifier: MIT OR Apache-2.0
//! Tests for the assistant-run polling state machine.

use serde_json::json;
use std::time::Duration;
use tsb_mock::{MockAssistantClient, MockToolset, run_requiring, run_with_status, tool_call};
use tsb_openai_bridge::{BridgeConfig, BridgeError, CancellationToken, OpenAiBridge, PollConfig};
use tsb_openai_sdk::{RunStatus, Thread};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fast_poll(max_checks: u32) -> PollConfig {
    PollConfig {
        interval: Duration::from_millis(1),
        max_checks,
        overall_timeout: Duration::from_secs(5),
    }
}

fn fast_bridge() -> OpenAiBridge<MockToolset> {
    let toolset = MockToolset::new().with_action(
        "github",
        "github_create_issue",
        "Create an issue",
        json!({}),
    );
    OpenAiBridge::with_config(toolset, BridgeConfig::new().with_poll(fast_poll(50)))
}

fn thread() -> Thread {
    Thread { id: "thread_1".into() }
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

#[tokio::test]
async fn queued_requires_action_completed_submits_exactly_once() {
    let bridge = fast_bridge();
    let client = MockAssistantClient::new()
        .on_retrieve(run_requiring(
            "run_1",
            "thread_1",
            vec![tool_call("call_1", "github_create_issue", "{}")],
        ))
        .on_submit(run_with_status("run_1", "thread_1", RunStatus::Completed));

    let start = run_with_status("run_1", "thread_1", RunStatus::Queued);
    let run = bridge
        .wait_and_handle_assistant_tool_calls(&client, start, &thread(), None)
        .await
        .unwrap();

    assert_eq!(run.status, RunStatus::Completed);
    let submitted = client.submitted();
    assert_eq!(submitted.len(), 1, "exactly one output submission");
    assert_eq!(submitted[0].len(), 1);
    assert_eq!(submitted[0][0].tool_call_id, "call_1");
}

#[tokio::test]
async fn terminal_run_returns_without_touching_the_client() {
    let bridge = fast_bridge();
    // Empty queues: any client call would error.
    let client = MockAssistantClient::new();

    let start = run_with_status("run_1", "thread_1", RunStatus::Failed);
    let run = bridge
        .wait_and_handle_assistant_tool_calls(&client, start, &thread(), None)
        .await
        .unwrap();

    assert_eq!(run.status, RunStatus::Failed);
    assert!(client.submitted().is_empty());
}

#[tokio::test]
async fn requires_action_with_no_calls_submits_empty_batch() {
    let bridge = fast_bridge();
    let client = MockAssistantClient::new()
        .on_submit(run_with_status("run_1", "thread_1", RunStatus::Completed));

    let start = run_requiring("run_1", "thread_1", vec![]);
    let run = bridge
        .wait_and_handle_assistant_tool_calls(&client, start, &thread(), None)
        .await
        .unwrap();

    assert_eq!(run.status, RunStatus::Completed);
    assert_eq!(client.submitted(), vec![vec![]]);
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

#[tokio::test]
async fn status_check_ceiling_ends_the_wait() {
    let toolset = MockToolset::new();
    let bridge =
        OpenAiBridge::with_config(toolset, BridgeConfig::new().with_poll(fast_poll(3)));
    let client = MockAssistantClient::new()
        .on_retrieve(run_with_status("run_1", "thread_1", RunStatus::Queued))
        .on_retrieve(run_with_status("run_1", "thread_1", RunStatus::Queued))
        .on_retrieve(run_with_status("run_1", "thread_1", RunStatus::InProgress));

    let start = run_with_status("run_1", "thread_1", RunStatus::Queued);
    let err = bridge
        .wait_and_handle_assistant_tool_calls(&client, start, &thread(), None)
        .await
        .unwrap_err();

    match err {
        BridgeError::PollCeiling { run_id, checks } => {
            assert_eq!(run_id, "run_1");
            assert_eq!(checks, 3);
        }
        other => panic!("expected PollCeiling, got {other:?}"),
    }
}

#[tokio::test]
async fn overall_timeout_ends_the_wait() {
    let bridge = OpenAiBridge::with_config(
        MockToolset::new(),
        BridgeConfig::new().with_poll(PollConfig {
            interval: Duration::from_millis(1),
            max_checks: 100,
            overall_timeout: Duration::ZERO,
        }),
    );
    let client = MockAssistantClient::new();

    let start = run_with_status("run_1", "thread_1", RunStatus::Queued);
    let err = bridge
        .wait_and_handle_assistant_tool_calls(&client, start, &thread(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, BridgeError::PollTimeout { run_id, .. } if run_id == "run_1"));
}

// ---------------------------------------------------------------------------
// Cancellation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn pre_cancelled_token_ends_the_wait_immediately() {
    let bridge = fast_bridge();
    let client = MockAssistantClient::new();
    let token = CancellationToken::new();
    token.cancel();

    let start = run_with_status("run_1", "thread_1", RunStatus::Queued);
    let err = bridge
        .wait_and_handle_assistant_tool_calls_with_cancel(&client, start, &thread(), None, &token)
        .await
        .unwrap_err();

    assert!(matches!(err, BridgeError::Cancelled { run_id } if run_id == "run_1"));
}

#[tokio::test]
async fn cancelling_mid_sleep_does_not_wait_out_the_interval() {
    let bridge = OpenAiBridge::with_config(
        MockToolset::new(),
        BridgeConfig::new().with_poll(PollConfig {
            interval: Duration::from_secs(60),
            max_checks: 10,
            overall_timeout: Duration::from_secs(120),
        }),
    );
    let client = MockAssistantClient::new()
        .on_retrieve(run_with_status("run_1", "thread_1", RunStatus::Queued));

    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        canceller.cancel();
    });

    let start = run_with_status("run_1", "thread_1", RunStatus::Queued);
    let err = tokio::time::timeout(
        Duration::from_secs(5),
        bridge.wait_and_handle_assistant_tool_calls_with_cancel(
            &client,
            start,
            &thread(),
            None,
            &token,
        ),
    )
    .await
    .expect("cancellation should end the wait well before the interval")
    .unwrap_err();

    assert!(matches!(err, BridgeError::Cancelled { .. }));
}

// ---------------------------------------------------------------------------
// Failure propagation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn retrieve_failure_propagates_unchanged() {
    let bridge = fast_bridge();
    // Nothing scripted: retrieve_run fails with a transport error.
    let client = MockAssistantClient::new();

    let start = run_with_status("run_1", "thread_1", RunStatus::InProgress);
    let err = bridge
        .wait_and_handle_assistant_tool_calls(&client, start, &thread(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, BridgeError::Client(_)));
}

#[tokio::test]
async fn submit_failure_propagates_unchanged() {
    let bridge = fast_bridge();
    // Submission queue empty: submit_tool_outputs fails.
    let client = MockAssistantClient::new();

    let start = run_requiring(
        "run_1",
        "thread_1",
        vec![tool_call("call_1", "github_create_issue", "{}")],
    );
    let err = bridge
        .wait_and_handle_assistant_tool_calls(&client, start, &thread(), None)
        .await
        .unwrap_err();

    assert!(matches!(err, BridgeError::Client(_)));
}
