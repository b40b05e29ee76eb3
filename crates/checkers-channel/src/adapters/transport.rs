//! # In-Memory Packet Transport
//!
//! Implements `PacketTransport` with per-channel monotonic sequences and
//! sha256 packet commitments. A commitment lives from send until the
//! packet's acknowledgement or timeout is confirmed, and is deleted
//! exactly once; that deletion is what makes ack and timeout mutually
//! exclusive for a given packet.

use crate::domain::errors::ChannelResult;
use crate::domain::wire::Packet;
use crate::ports::outbound::PacketTransport;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tracing::debug;

/// In-memory transport for tests and local relaying.
#[derive(Debug, Default)]
pub struct InMemoryTransport {
    /// Next sequence per (port, channel); first assigned sequence is 1.
    sequences: HashMap<(String, String), u64>,
    /// Live commitments: (port, channel, sequence) -> sha256(payload).
    commitments: HashMap<(String, String, u64), [u8; 32]>,
    /// Destination (port, channel) per source (port, channel).
    routes: HashMap<(String, String), (String, String)>,
    /// Packets dispatched but not yet picked up by the relay.
    pending: Vec<Packet>,
}

fn commit(data: &[u8], timeout_height: u64, timeout_timestamp: u64) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.update(timeout_height.to_be_bytes());
    hasher.update(timeout_timestamp.to_be_bytes());
    hasher.finalize().into()
}

impl InMemoryTransport {
    /// Create an empty transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Route packets from a source channel to a destination end.
    pub fn set_route(
        &mut self,
        source_port: &str,
        source_channel: &str,
        destination_port: &str,
        destination_channel: &str,
    ) {
        self.routes.insert(
            (source_port.to_string(), source_channel.to_string()),
            (destination_port.to_string(), destination_channel.to_string()),
        );
    }

    /// Drain the packets awaiting relay pickup.
    pub fn take_pending(&mut self) -> Vec<Packet> {
        std::mem::take(&mut self.pending)
    }

    /// The live commitment for a packet, if any.
    pub fn commitment(&self, port: &str, channel: &str, sequence: u64) -> Option<[u8; 32]> {
        self.commitments
            .get(&(port.to_string(), channel.to_string(), sequence))
            .copied()
    }

    /// Confirm an acknowledgement for a sent packet.
    ///
    /// Deletes the commitment and returns true exactly once; false means
    /// the packet was already acknowledged or timed out and the ack must
    /// not be delivered to the module.
    pub fn confirm_ack(&mut self, packet: &Packet) -> bool {
        let removed = self
            .commitments
            .remove(&(
                packet.source_port.clone(),
                packet.source_channel.clone(),
                packet.sequence,
            ))
            .is_some();
        if removed {
            debug!("[checkers] commitment cleared by ack: seq {}", packet.sequence);
        }
        removed
    }

    /// Confirm a timeout for a sent packet at the given height and time.
    ///
    /// True only if the commitment is still live and the packet's
    /// deadline has actually passed; deletes the commitment so the
    /// timeout fires at most once and never after an ack.
    pub fn confirm_timeout(&mut self, packet: &Packet, height: u64, timestamp: u64) -> bool {
        if !packet.is_timed_out(height, timestamp) {
            return false;
        }
        let removed = self
            .commitments
            .remove(&(
                packet.source_port.clone(),
                packet.source_channel.clone(),
                packet.sequence,
            ))
            .is_some();
        if removed {
            debug!(
                "[checkers] commitment cleared by timeout: seq {}",
                packet.sequence
            );
        }
        removed
    }
}

impl PacketTransport for InMemoryTransport {
    fn send_packet(
        &mut self,
        source_port: &str,
        source_channel: &str,
        timeout_height: u64,
        timeout_timestamp: u64,
        data: Vec<u8>,
    ) -> ChannelResult<u64> {
        let key = (source_port.to_string(), source_channel.to_string());
        let sequence = {
            let next = self.sequences.entry(key.clone()).or_insert(1);
            let assigned = *next;
            *next += 1;
            assigned
        };

        let commitment = commit(&data, timeout_height, timeout_timestamp);
        self.commitments.insert(
            (source_port.to_string(), source_channel.to_string(), sequence),
            commitment,
        );
        debug!(
            "[checkers] packet committed: {source_port}/{source_channel} seq {sequence} ({})",
            hex::encode(&commitment[..4])
        );

        let (destination_port, destination_channel) = self
            .routes
            .get(&key)
            .cloned()
            .unwrap_or_else(|| (String::new(), String::new()));

        self.pending.push(Packet {
            sequence,
            source_port: source_port.to_string(),
            source_channel: source_channel.to_string(),
            destination_port,
            destination_channel,
            data,
            timeout_height,
            timeout_timestamp,
        });

        Ok(sequence)
    }
}
