//! # Wire Formats
//!
//! Packet and acknowledgement shapes shared by both chains. JSON is the
//! module codec; both ends must produce byte-identical encodings for the
//! same logical value.

use super::errors::ChannelError;
use serde::{Deserialize, Serialize};

/// One unit of application payload in flight over a channel.
///
/// Created by the sender and immutable once dispatched; the sequence is
/// assigned by the transport, never by this module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Packet {
    /// Monotonic per-channel sequence, owned by the transport.
    pub sequence: u64,
    /// Sending port.
    pub source_port: String,
    /// Sending channel.
    pub source_channel: String,
    /// Receiving port.
    pub destination_port: String,
    /// Receiving channel.
    pub destination_channel: String,
    /// Opaque payload bytes.
    pub data: Vec<u8>,
    /// Block height after which the packet times out (0 = no height bound).
    pub timeout_height: u64,
    /// Timestamp after which the packet times out (0 = no time bound).
    pub timeout_timestamp: u64,
}

impl Packet {
    /// Check if the packet's deadline has passed.
    pub fn is_timed_out(&self, height: u64, timestamp: u64) -> bool {
        (self.timeout_height != 0 && height >= self.timeout_height)
            || (self.timeout_timestamp != 0 && timestamp >= self.timeout_timestamp)
    }
}

/// The receiver's terminal response to a packet.
///
/// Exactly one is created per received packet. On the wire this is
/// `{"result": [..]}` or `{"error": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Acknowledgement {
    /// The receiver processed the packet; carries opaque result bytes.
    Result {
        /// Application-level acknowledgement payload.
        result: Vec<u8>,
    },
    /// The receiver could not process the packet.
    Error {
        /// Human-readable failure description.
        error: String,
    },
}

impl Acknowledgement {
    /// Wrap a successful result.
    pub fn result(bytes: Vec<u8>) -> Self {
        Self::Result { result: bytes }
    }

    /// Wrap a failure description.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    /// Check for the success variant.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Result { .. })
    }

    /// Encode to the wire representation.
    pub fn encode(&self) -> Result<Vec<u8>, ChannelError> {
        serde_json::to_vec(self).map_err(|e| ChannelError::Codec {
            context: format!("cannot marshal acknowledgement: {e}"),
        })
    }

    /// Decode from the wire representation.
    pub fn decode(bytes: &[u8]) -> Result<Self, ChannelError> {
        serde_json::from_slice(bytes).map_err(|e| ChannelError::Codec {
            context: format!("cannot unmarshal acknowledgement: {e}"),
        })
    }
}

/// Application payload carried by a record packet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPacketData {
    /// The record value.
    pub value: String,
}

impl RecordPacketData {
    /// Encode to the wire representation.
    pub fn encode(&self) -> Result<Vec<u8>, ChannelError> {
        serde_json::to_vec(self).map_err(|e| ChannelError::Codec {
            context: format!("cannot marshal packet data: {e}"),
        })
    }

    /// Decode from the wire representation.
    pub fn decode(bytes: &[u8]) -> Result<Self, ChannelError> {
        serde_json::from_slice(bytes).map_err(|e| ChannelError::Codec {
            context: format!("cannot unmarshal packet data: {e}"),
        })
    }
}

/// Application-level acknowledgement carried inside the success bytes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPacketAck {
    /// Outcome reported by the receiving chain's rules engine.
    pub result: String,
}

impl RecordPacketAck {
    /// Encode to the wire representation.
    pub fn encode(&self) -> Result<Vec<u8>, ChannelError> {
        serde_json::to_vec(self).map_err(|e| ChannelError::Codec {
            context: format!("cannot marshal packet acknowledgement: {e}"),
        })
    }

    /// Decode from the wire representation.
    pub fn decode(bytes: &[u8]) -> Result<Self, ChannelError> {
        serde_json::from_slice(bytes).map_err(|e| ChannelError::Codec {
            context: format!("cannot unmarshal packet acknowledgement: {e}"),
        })
    }
}
