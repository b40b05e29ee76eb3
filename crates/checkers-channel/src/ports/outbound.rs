//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the checkers channel module requires from the host
//! runtime: the game-rules engine, the packet transport, the block clock
//! and the event sink.

use crate::domain::entities::StoredGame;
use crate::domain::errors::ChannelResult;
use crate::domain::events::Event;
use crate::domain::wire::{Acknowledgement, RecordPacketAck, RecordPacketData};

/// Starting board and turn for a fresh game, as the rules engine
/// defines them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitialPosition {
    /// Serialized starting board.
    pub board: String,
    /// Player who moves first.
    pub turn: String,
}

/// The embedded game-rules engine, consumed as a black box.
///
/// Production wires the real rules crate; tests use `MockRulesEngine`.
pub trait RulesEngine {
    /// Apply a received payload on the receiving chain.
    ///
    /// The returned ack payload is wrapped into a success
    /// acknowledgement; an error becomes an error acknowledgement.
    fn apply_received(&mut self, data: &RecordPacketData) -> ChannelResult<RecordPacketAck>;

    /// Apply acknowledgement side effects on the sending chain.
    fn apply_acknowledged(
        &mut self,
        data: &RecordPacketData,
        ack: &Acknowledgement,
    ) -> ChannelResult<()>;

    /// Apply timeout side effects on the sending chain. Distinct from
    /// the error-acknowledgement path: the receiver never saw the packet.
    fn apply_timed_out(&mut self, data: &RecordPacketData) -> ChannelResult<()>;

    /// Validate a stored game's embedded state.
    fn validate_record(&self, game: &StoredGame) -> ChannelResult<()>;

    /// The starting position for a newly created game.
    fn initial_position(&self) -> InitialPosition;
}

/// The packet transport beneath this module.
///
/// Owns sequencing, packet commitments and delivery guarantees; this
/// module only hands it serialized payloads.
pub trait PacketTransport {
    /// Commit and dispatch a packet; returns the assigned sequence.
    fn send_packet(
        &mut self,
        source_port: &str,
        source_channel: &str,
        timeout_height: u64,
        timeout_timestamp: u64,
        data: Vec<u8>,
    ) -> ChannelResult<u64>;
}

/// Current block height and timestamp, for timeout evaluation and audit
/// markers.
pub trait BlockClock {
    /// Current block height.
    fn height(&self) -> u64;

    /// Current block timestamp, seconds since epoch.
    fn timestamp(&self) -> u64;
}

/// Sink for structured module events.
pub trait EventSink {
    /// Emit one event.
    fn emit(&mut self, event: Event);
}

// =============================================================================
// Mock Implementations for Testing
// =============================================================================

/// Controllable rules engine for tests.
///
/// Acknowledges every received payload with a fixed result unless
/// `should_fail` is set, and counts the callbacks it sees.
#[derive(Clone, Debug, Default)]
pub struct MockRulesEngine {
    /// Reject every callback with an engine error?
    pub should_fail: bool,
    /// Result string for successful receives.
    pub ack_result: String,
    /// Payload values seen by `apply_received`.
    pub received: Vec<String>,
    /// Payload values seen by `apply_acknowledged`.
    pub acknowledged: Vec<String>,
    /// Payload values seen by `apply_timed_out`.
    pub timed_out: Vec<String>,
}

impl MockRulesEngine {
    /// Create a mock that acknowledges with `ack_result`.
    pub fn accepting(ack_result: impl Into<String>) -> Self {
        Self {
            ack_result: ack_result.into(),
            ..Self::default()
        }
    }

    /// Create a mock that rejects every callback.
    pub fn rejecting() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }
}

impl RulesEngine for MockRulesEngine {
    fn apply_received(&mut self, data: &RecordPacketData) -> ChannelResult<RecordPacketAck> {
        if self.should_fail {
            return Err(crate::domain::errors::ChannelError::Engine {
                message: "mock rules rejection".to_string(),
            });
        }
        self.received.push(data.value.clone());
        Ok(RecordPacketAck {
            result: self.ack_result.clone(),
        })
    }

    fn apply_acknowledged(
        &mut self,
        data: &RecordPacketData,
        _ack: &Acknowledgement,
    ) -> ChannelResult<()> {
        if self.should_fail {
            return Err(crate::domain::errors::ChannelError::Engine {
                message: "mock rules rejection".to_string(),
            });
        }
        self.acknowledged.push(data.value.clone());
        Ok(())
    }

    fn apply_timed_out(&mut self, data: &RecordPacketData) -> ChannelResult<()> {
        if self.should_fail {
            return Err(crate::domain::errors::ChannelError::Engine {
                message: "mock rules rejection".to_string(),
            });
        }
        self.timed_out.push(data.value.clone());
        Ok(())
    }

    fn validate_record(&self, game: &StoredGame) -> ChannelResult<()> {
        if self.should_fail || game.board.is_empty() {
            return Err(crate::domain::errors::ChannelError::Engine {
                message: format!("unparseable game for players {}/{}", game.black, game.red),
            });
        }
        Ok(())
    }

    fn initial_position(&self) -> InitialPosition {
        InitialPosition {
            board: "*b*b*b*b|b*b*b*b*|*b*b*b*b|********|********|r*r*r*r*|*r*r*r*r|r*r*r*r*"
                .to_string(),
            turn: "b".to_string(),
        }
    }
}
