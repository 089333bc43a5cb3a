// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Action descriptor model and the toolset contract.
//!
//! A *toolset* owns action discovery and execution: it knows which actions
//! exist, what their parameter schemas look like, and how to run them on
//! behalf of an entity. Provider bridges consume this contract and only
//! reshape the data; they never own actions themselves.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Entity scope used when the caller does not name one.
pub const DEFAULT_ENTITY_ID: &str = "default";

// ---------------------------------------------------------------------------
// ActionDescriptor
// ---------------------------------------------------------------------------

/// A provider-agnostic action definition as returned by a toolset.
///
/// Immutable once returned. The `parameters` value is expected to already be
/// a valid JSON-Schema object; consumers perform structural renaming only,
/// never validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionDescriptor {
    /// Action name, unique within the toolset.
    pub name: String,
    /// Human-readable description of what the action does.
    pub description: String,
    /// JSON Schema describing the action's parameters.
    pub parameters: serde_json::Value,
}

impl ActionDescriptor {
    /// Create a descriptor from its three parts.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }
}

// ---------------------------------------------------------------------------
// Selection filters
// ---------------------------------------------------------------------------

/// Selects actions by explicit name.
///
/// An empty filter (`actions: None`) selects every action the toolset knows.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActionFilter {
    /// Names of the actions to select, or `None` for all.
    pub actions: Option<Vec<String>>,
}

impl ActionFilter {
    /// Select every action.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Select the named actions.
    #[must_use]
    pub fn named<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            actions: Some(names.into_iter().map(Into::into).collect()),
        }
    }
}

/// Selects actions by application, with optional tag and use-case narrowing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ToolFilter {
    /// Applications whose actions should be selected.
    pub apps: Vec<String>,
    /// Optional tags the selected actions must carry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Optional free-text use case to rank or narrow the selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_case: Option<String>,
}

impl ToolFilter {
    /// Select all actions of the given applications.
    #[must_use]
    pub fn for_apps<I, S>(apps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            apps: apps.into_iter().map(Into::into).collect(),
            tags: None,
            use_case: None,
        }
    }

    /// Narrow the selection to actions carrying the given tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Narrow the selection by a free-text use case.
    #[must_use]
    pub fn with_use_case(mut self, use_case: impl Into<String>) -> Self {
        self.use_case = Some(use_case.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors produced by a toolset.
///
/// Exact semantics are owned by the implementing engine; bridges propagate
/// these untranslated.
#[derive(Debug, thiserror::Error)]
pub enum ToolsetError {
    /// The named action does not exist in this toolset.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// The action was found but its execution failed.
    #[error("action '{name}' failed: {message}")]
    ExecutionFailed {
        /// Name of the failing action.
        name: String,
        /// Engine-provided failure description.
        message: String,
    },

    /// The toolset could not reach its backing service.
    #[error("toolset transport error: {0}")]
    Transport(String),
}

// ---------------------------------------------------------------------------
// Toolset trait
// ---------------------------------------------------------------------------

/// A toolset that can describe and execute actions.
///
/// `entity_id` scopes discovery and execution to a connected entity (a user
/// or account); `None` lets the implementation fall back to its own default.
#[async_trait]
pub trait Toolset: Send + Sync {
    /// Fetch descriptors for the actions selected by `filter`.
    ///
    /// Returns an empty vector when nothing matches.
    async fn actions_schema(
        &self,
        filter: &ActionFilter,
        entity_id: Option<&str>,
    ) -> Result<Vec<ActionDescriptor>, ToolsetError>;

    /// Fetch descriptors for the actions selected by app/tag/use-case.
    async fn tools_schema(
        &self,
        filter: &ToolFilter,
        entity_id: Option<&str>,
    ) -> Result<Vec<ActionDescriptor>, ToolsetError>;

    /// Execute the named action with the given parameters on behalf of
    /// `entity_id`, returning the engine's result value.
    async fn execute_action(
        &self,
        name: &str,
        params: serde_json::Value,
        entity_id: &str,
    ) -> Result<serde_json::Value, ToolsetError>;
}
