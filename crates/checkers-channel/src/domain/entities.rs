//! # Domain Entities
//!
//! Core entities for the checkers channel module: capability tokens,
//! channel ends, module params, stored games and the genesis document.

use super::errors::ChannelError;
use super::value_objects::{ChannelOrder, ChannelState};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Module name, also the scope of its capability claims.
pub const MODULE_NAME: &str = "checkers";

/// The one port this module ever binds.
pub const PORT_ID: &str = "checkers";

/// Protocol version; both channel ends must match it exactly.
pub const PROTOCOL_VERSION: &str = "checkers-1";

/// Maximum byte length of a stored game index.
pub const MAX_INDEX_LENGTH: usize = 256;

/// Capability name for a channel, derived from its port and channel ids.
pub fn channel_capability_name(port_id: &str, channel_id: &str) -> String {
    format!("capabilities/ports/{port_id}/channels/{channel_id}")
}

/// Capability name for a bound port.
pub fn port_capability_name(port_id: &str) -> String {
    format!("capabilities/ports/{port_id}")
}

/// Unforgeable authorization token.
///
/// Minted from 32 random bytes; the bytes are never exposed, so a token
/// cannot be reconstructed from the name it is claimed under. Possession
/// of the name does not imply possession of the token.
#[derive(Clone, PartialEq, Eq)]
pub struct CapabilityToken([u8; 32]);

impl CapabilityToken {
    /// Mint a fresh token.
    pub fn mint() -> Self {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }
}

impl std::fmt::Debug for CapabilityToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Short prefix only; full bytes stay sealed.
        write!(f, "CapabilityToken({}..)", hex::encode(&self.0[..4]))
    }
}

/// The counterparty end of a channel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counterparty {
    /// Counterparty port id.
    pub port_id: String,
    /// Counterparty channel id, empty until the counterparty assigns one.
    pub channel_id: String,
}

impl Counterparty {
    /// Create a counterparty descriptor.
    pub fn new(port_id: impl Into<String>, channel_id: impl Into<String>) -> Self {
        Self {
            port_id: port_id.into(),
            channel_id: channel_id.into(),
        }
    }
}

/// One end of a channel as tracked by this module.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChannelEnd {
    /// Local port id.
    pub port_id: String,
    /// Local channel id.
    pub channel_id: String,
    /// Negotiated ordering.
    pub order: ChannelOrder,
    /// Current handshake state.
    pub state: ChannelState,
    /// Negotiated version string.
    pub version: String,
    /// The other end.
    pub counterparty: Counterparty,
}

impl ChannelEnd {
    /// Advance the handshake state, rejecting invalid transitions.
    pub fn advance_to(&mut self, next: ChannelState) -> Result<(), ChannelError> {
        if !self.state.can_advance_to(next) {
            return Err(ChannelError::InvalidTransition {
                from: format!("{:?}", self.state),
                to: format!("{next:?}"),
            });
        }
        self.state = next;
        Ok(())
    }

    /// Check if packets may flow over this end.
    pub fn is_open(&self) -> bool {
        self.state == ChannelState::Open
    }
}

/// Module-wide configuration record.
///
/// Carries no fields today; the validation hook is part of the contract
/// and runs on every write.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {}

impl Params {
    /// Validate the params.
    pub fn validate(&self) -> Result<(), ChannelError> {
        Ok(())
    }
}

/// A stored checkers game, opaque to the store.
///
/// Only the rules engine interprets the board and turn encoding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredGame {
    /// Serialized board position.
    pub board: String,
    /// Whose move it is.
    pub turn: String,
    /// Black player address.
    pub black: String,
    /// Red player address.
    pub red: String,
}

/// A stored game together with its unique index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedStoredGame {
    /// Unique index, 1..=256 bytes.
    pub index: String,
    /// The game under that index.
    pub stored_game: StoredGame,
}

/// The module's full persistent state as a portable document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    /// Module params.
    pub params: Params,
    /// Every stored game, in export order.
    pub indexed_stored_game_list: Vec<IndexedStoredGame>,
}
