// SPDX-License-Identifier: MIT OR Apache-2.0
//! Chat Completions shapes: tool definitions, tool calls, and responses.

use serde::{Deserialize, Serialize};
use tsb_toolset::ActionDescriptor;

// ---------------------------------------------------------------------------
// Tool definitions
// ---------------------------------------------------------------------------

/// A function tool definition (Chat Completions `tools` array element).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionTool {
    /// Tool type (always `"function"`).
    #[serde(rename = "type")]
    pub tool_type: String,
    /// The function definition payload.
    pub function: FunctionDefinition,
}

/// The function payload inside a [`ChatCompletionTool`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionDefinition {
    /// Function name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
    /// JSON Schema for the function parameters.
    pub parameters: serde_json::Value,
}

/// Convert an [`ActionDescriptor`] to the provider's function tool format.
///
/// A pure structural rename: name, description, and parameters are copied
/// verbatim, no validation is performed.
#[must_use]
pub fn tool_from_action(action: &ActionDescriptor) -> ChatCompletionTool {
    ChatCompletionTool {
        tool_type: "function".into(),
        function: FunctionDefinition {
            name: action.name.clone(),
            description: action.description.clone(),
            parameters: action.parameters.clone(),
        },
    }
}

// ---------------------------------------------------------------------------
// Tool calls
// ---------------------------------------------------------------------------

/// A tool call emitted by the model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToolCall {
    /// Unique identifier for this tool call.
    pub id: String,
    /// Call type (always `"function"`).
    #[serde(rename = "type")]
    pub call_type: String,
    /// The function invocation details.
    pub function: FunctionCall,
}

/// The function invocation inside a [`ToolCall`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FunctionCall {
    /// Name of the function to invoke.
    pub name: String,
    /// JSON-encoded arguments for the function.
    pub arguments: String,
}

// ---------------------------------------------------------------------------
// Completion responses
// ---------------------------------------------------------------------------

/// A Chat Completions API response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletion {
    /// Unique response identifier.
    pub id: String,
    /// Object type (e.g. `chat.completion`).
    pub object: String,
    /// Model used for the completion.
    pub model: String,
    /// Completion choices.
    pub choices: Vec<Choice>,
    /// Token usage statistics.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

/// A single choice in a [`ChatCompletion`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// Zero-based index of this choice.
    pub index: u32,
    /// The assistant's response message.
    pub message: Message,
    /// Reason the model stopped generating (e.g. `stop`, `tool_calls`).
    pub finish_reason: Option<String>,
}

/// A single message in the Chat Completions format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Message role (`system`, `user`, `assistant`, or `tool`).
    pub role: String,
    /// Text content of the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Tool calls requested by the assistant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
    /// ID of the tool call this message is responding to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

/// Token usage reported by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens consumed by the prompt.
    pub prompt_tokens: u64,
    /// Tokens generated in the completion.
    pub completion_tokens: u64,
    /// Total tokens (prompt + completion).
    pub total_tokens: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tool_from_action_copies_fields_verbatim() {
        let action = ActionDescriptor::new(
            "slack_post_message",
            "Post a message to a channel",
            json!({"type": "object", "properties": {"channel": {"type": "string"}}}),
        );
        let tool = tool_from_action(&action);
        assert_eq!(tool.tool_type, "function");
        assert_eq!(tool.function.name, action.name);
        assert_eq!(tool.function.description, action.description);
        assert_eq!(tool.function.parameters, action.parameters);
    }

    #[test]
    fn tool_serializes_with_type_field() {
        let tool = tool_from_action(&ActionDescriptor::new("a", "b", json!({})));
        let encoded = serde_json::to_value(&tool).unwrap();
        assert_eq!(encoded["type"], "function");
        assert_eq!(encoded["function"]["name"], "a");
        assert_eq!(encoded["function"]["description"], "b");
    }

    #[test]
    fn tool_call_wire_shape() {
        let encoded = json!({
            "id": "call_abc",
            "type": "function",
            "function": {"name": "read_file", "arguments": "{\"path\": \"src/main.rs\"}"}
        });
        let call: ToolCall = serde_json::from_value(encoded.clone()).unwrap();
        assert_eq!(call.id, "call_abc");
        assert_eq!(call.call_type, "function");
        assert_eq!(call.function.name, "read_file");
        assert_eq!(serde_json::to_value(&call).unwrap(), encoded);
    }

    #[test]
    fn completion_parses_choice_with_tool_calls() {
        let completion: ChatCompletion = serde_json::from_value(json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": "gpt-4o",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "tool_calls": [{
                        "id": "call_1",
                        "type": "function",
                        "function": {"name": "f", "arguments": "{}"}
                    }]
                },
                "finish_reason": "tool_calls"
            }]
        }))
        .unwrap();
        let calls = completion.choices[0].message.tool_calls.as_ref().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].id, "call_1");
    }

    #[test]
    fn message_omits_absent_optionals() {
        let message = Message {
            role: "assistant".into(),
            content: Some("hi".into()),
            tool_calls: None,
            tool_call_id: None,
        };
        let encoded = serde_json::to_string(&message).unwrap();
        assert!(!encoded.contains("tool_calls"));
        assert!(!encoded.contains("tool_call_id"));
    }
}
