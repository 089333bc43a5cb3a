// SPDX-License-Identifier: MIT OR Apache-2.0
//! Property-based tests for the action → tool structural rename.

use proptest::prelude::*;
use tsb_openai_sdk::tool_from_action;
use tsb_toolset::ActionDescriptor;

/// Strategy producing action-like names (`app_verb` shape).
fn action_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}_[a-z][a-z0-9_]{0,11}"
}

/// Strategy producing a flat JSON-Schema-ish parameters object.
fn parameters() -> impl Strategy<Value = serde_json::Value> {
    prop::collection::btree_map("[a-z][a-z0-9_]{0,7}", "(string|number|boolean)", 0..4).prop_map(
        |props| {
            let properties: serde_json::Map<String, serde_json::Value> = props
                .into_iter()
                .map(|(k, ty)| (k, serde_json::json!({ "type": ty })))
                .collect();
            serde_json::json!({"type": "object", "properties": properties})
        },
    )
}

fn descriptor() -> impl Strategy<Value = ActionDescriptor> {
    (action_name(), ".{0,40}", parameters())
        .prop_map(|(name, description, params)| ActionDescriptor::new(name, description, params))
}

// ── 1. The rename copies every field verbatim ───────────────────────

proptest! {
    #[test]
    fn mapping_copies_fields_verbatim(action in descriptor()) {
        let tool = tool_from_action(&action);
        prop_assert_eq!(&tool.tool_type, "function");
        prop_assert_eq!(&tool.function.name, &action.name);
        prop_assert_eq!(&tool.function.description, &action.description);
        prop_assert_eq!(&tool.function.parameters, &action.parameters);
    }
}

// ── 2. A batch maps to an equal-length batch, order preserved ───────

proptest! {
    #[test]
    fn batch_mapping_preserves_length_and_order(actions in prop::collection::vec(descriptor(), 0..8)) {
        let tools: Vec<_> = actions.iter().map(tool_from_action).collect();
        prop_assert_eq!(tools.len(), actions.len());
        for (tool, action) in tools.iter().zip(&actions) {
            prop_assert_eq!(&tool.function.name, &action.name);
        }
    }
}

// ── 3. The mapped tool round-trips through the wire format ──────────

proptest! {
    #[test]
    fn mapped_tool_roundtrips_through_json(action in descriptor()) {
        let tool = tool_from_action(&action);
        let encoded = serde_json::to_string(&tool).unwrap();
        let back: tsb_openai_sdk::ChatCompletionTool = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(back, tool);
    }
}
