//! # Module Messages
//!
//! The module's transaction surface as a tagged union, dispatched by a
//! single match at the service seam.

use serde::{Deserialize, Serialize};

/// A state-mutating message addressed to this module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModuleMsg {
    /// Create a new game under a unique index.
    CreateGame {
        /// Transaction signer.
        creator: String,
        /// Unique game index, 1..=256 bytes.
        index: String,
        /// Black player address.
        black: String,
        /// Red player address.
        red: String,
    },
    /// Append a marker to the audit key set.
    AddRecord {
        /// Transaction signer.
        creator: String,
        /// Marker value to record.
        value: String,
    },
}

/// Successful outcome of a module message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MsgResponse {
    /// A game was created.
    GameCreated {
        /// The index it was stored under.
        index: String,
    },
    /// A marker landed in the audit set.
    RecordAdded {
        /// The recorded value.
        value: String,
    },
}
