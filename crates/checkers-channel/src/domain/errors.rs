//! # Domain Errors
//!
//! Error types for the checkers channel module.

use thiserror::Error;

/// Result alias for module operations.
pub type ChannelResult<T> = Result<T, ChannelError>;

/// Result alias for backing-store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Channel module error types.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// Handshake arrived on a port this module does not own.
    #[error("invalid port: {got}, expected {expected}")]
    InvalidPort {
        /// Port the handshake named.
        got: String,
        /// The module's bound port.
        expected: String,
    },

    /// Proposed or counterparty version does not match the protocol version.
    #[error("invalid version: {got}, expected {expected}")]
    InvalidVersion {
        /// Version offered by the handshake.
        got: String,
        /// The module's fixed protocol version.
        expected: String,
    },

    /// Stored game index outside the 1..=256 byte bound.
    #[error("invalid index length {len} for index {index:?}")]
    IndexTooLong {
        /// The offending index.
        index: String,
        /// Its byte length.
        len: usize,
    },

    /// Channel end asked to move to a state it cannot reach.
    #[error("invalid channel transition: {from} -> {to}")]
    InvalidTransition {
        /// Current state.
        from: String,
        /// Attempted state.
        to: String,
    },

    /// Module params failed validation.
    #[error("invalid params: {reason}")]
    InvalidParams {
        /// Why validation failed.
        reason: String,
    },

    /// A capability is already claimed under this name.
    #[error("capability already claimed: {name}")]
    AlreadyClaimed {
        /// The contested capability name.
        name: String,
    },

    /// No capability held for this name.
    #[error("module does not own capability: {name}")]
    MissingCapability {
        /// The missing capability name.
        name: String,
    },

    /// No game stored under this index.
    #[error("game not found: {index}")]
    GameNotFound {
        /// The requested index.
        index: String,
    },

    /// Malformed wire payload or acknowledgement envelope.
    #[error("codec failure: {context}")]
    Codec {
        /// What failed to encode or decode.
        context: String,
    },

    /// Two genesis records share an index.
    #[error("duplicate index: {index}")]
    DuplicateIndex {
        /// The duplicated index.
        index: String,
    },

    /// A game already exists under this index.
    #[error("game already exists: {index}")]
    GameExists {
        /// The taken index.
        index: String,
    },

    /// The module never voluntarily closes a channel.
    #[error("module does not allow channel closure")]
    CloseNotAllowed,

    /// The rules engine rejected an ack or timeout callback.
    #[error("rules engine failure: {message}")]
    Engine {
        /// Engine-reported reason.
        message: String,
    },

    /// Backing-store failure. Always fatal for the calling operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Backing-store error types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend refused or failed a read/write.
    #[error("backend failure: {message}")]
    Backend {
        /// Backend-reported reason.
        message: String,
    },

    /// A stored value failed to decode.
    #[error("corrupted value at {key}: {message}")]
    Corrupted {
        /// The key holding the bad value.
        key: String,
        /// Decode failure detail.
        message: String,
    },

    /// Two collections registered overlapping key prefixes.
    #[error("schema conflict on prefix {prefix}")]
    SchemaConflict {
        /// The conflicting prefix, rendered as a string.
        prefix: String,
    },
}
