// SPDX-License-Identifier: MIT OR Apache-2.0
use thiserror::Error;

/// Errors produced by an [`AssistantClient`](crate::AssistantClient)
/// implementation.
///
/// Transport policy (retries, backoff, auth refresh) is owned by the
/// implementation; bridges propagate these untranslated.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The provider answered with a non-success status code.
    #[error("provider returned status {code}: {message}")]
    Status {
        /// HTTP status code.
        code: u16,
        /// Provider-supplied error message.
        message: String,
    },

    /// The provider rejected the request at the API level.
    #[error("provider api error: {0}")]
    Api(String),

    /// The request never reached the provider.
    #[error("transport error: {0}")]
    Transport(String),
}
