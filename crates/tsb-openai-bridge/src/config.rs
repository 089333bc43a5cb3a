// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::poll::PollConfig;
use std::time::Duration;
use tsb_toolset::DEFAULT_ENTITY_ID;

/// Bridge-wide configuration.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Entity used when an operation is not given an explicit one.
    pub entity_id: String,
    /// Poll behaviour for assistant-run waits.
    pub poll: PollConfig,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            entity_id: DEFAULT_ENTITY_ID.to_string(),
            poll: PollConfig::default(),
        }
    }
}

impl BridgeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entity_id(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = entity_id.into();
        self
    }

    pub fn with_poll(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll.interval = interval;
        self
    }

    pub fn with_poll_timeout(mut self, timeout: Duration) -> Self {
        self.poll.overall_timeout = timeout;
        self
    }
}
