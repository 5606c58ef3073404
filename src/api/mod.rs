//! JSON payloads exchanged with roster clients.

/// Path and verb dispatch onto a [`crate::runtime::handle::RosterHandle`].
pub mod router;

use serde::{Deserialize, Serialize};

use crate::types::{DrawPair, Entry, Roster};

/// Body of add and delete requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    /// Name to add or delete.
    #[serde(default)]
    pub name: String,
}

/// Reply for list, add and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterReply {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Failure reason, empty on success.
    #[serde(default)]
    pub msg: String,
    /// Roster after the operation; omitted when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub names: Roster,
}

impl RosterReply {
    /// Successful reply carrying `names`.
    pub fn ok(names: Roster) -> Self {
        Self {
            success: true,
            msg: String::new(),
            names,
        }
    }

    /// Failed reply with a reason.
    pub fn fail(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            msg: msg.into(),
            names: Roster::new(),
        }
    }
}

/// Reply for draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawReply {
    /// The two winners, empty on failure.
    #[serde(default)]
    pub winners: Vec<Entry>,
    /// Failure reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DrawReply {
    /// Successful reply.
    pub fn ok(pair: DrawPair) -> Self {
        Self {
            winners: pair.into_array().into(),
            error: None,
        }
    }

    /// Failed reply with a reason.
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            winners: Vec::new(),
            error: Some(error.into()),
        }
    }
}
