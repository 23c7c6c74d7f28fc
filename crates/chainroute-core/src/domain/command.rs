//! The command value routed between protocols.

use serde::{Deserialize, Serialize};

use super::CORE_PROTOCOL;

/// A command routable to a protocol.
///
/// The `protocol` field is optional by contract: a command without a tag
/// belongs to the `"core"` protocol. The field stays a plain string rather
/// than [`super::Protocol`] because resolution must pass through whatever tag
/// the command carries, registered or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Command identifier, e.g. `"v4_swap"`.
    pub name: String,
    /// Owning protocol, if tagged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
}

impl Command {
    /// Create an untagged command (resolves to `"core"`).
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            protocol: None,
        }
    }

    /// Create a command tagged with a protocol.
    #[must_use]
    pub fn with_protocol(name: impl Into<String>, protocol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            protocol: Some(protocol.into()),
        }
    }

    /// The protocol this command belongs to, falling back to `"core"`.
    #[must_use]
    pub fn protocol_or_core(&self) -> &str {
        self.protocol.as_deref().unwrap_or(CORE_PROTOCOL)
    }
}
