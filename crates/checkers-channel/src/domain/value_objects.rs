//! # Domain Value Objects
//!
//! Immutable value types for channel identification and state.

use serde::{Deserialize, Serialize};

/// Delivery ordering negotiated for a channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelOrder {
    /// Packets are delivered and acknowledged in sequence order.
    #[default]
    Ordered,
    /// Packets may be delivered in any order.
    Unordered,
}

/// Channel handshake state machine.
///
/// UNINIT is the implicit state of an untracked channel; a tracked end is
/// created in INIT or TRYOPEN by the open callbacks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelState {
    /// No handshake step has run for this channel.
    #[default]
    Uninit,
    /// Handshake started on the initiator side.
    Init,
    /// Handshake started on the responder side.
    TryOpen,
    /// Both ends agreed; packets may flow.
    Open,
    /// Closed by the counterparty.
    Closed,
}

impl ChannelState {
    /// Check if the handshake may move from this state to `next`.
    pub fn can_advance_to(&self, next: ChannelState) -> bool {
        match (self, next) {
            (Self::Uninit, Self::Init) => true,
            (Self::Uninit, Self::TryOpen) => true,
            (Self::Init, Self::Open) => true,
            (Self::TryOpen, Self::Open) => true,
            (Self::Init | Self::TryOpen | Self::Open, Self::Closed) => true,
            _ => false,
        }
    }

    /// Check if this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed)
    }
}
