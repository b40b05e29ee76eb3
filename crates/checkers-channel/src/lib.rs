//! # Checkers Channel Module
//!
//! Cross-chain channel handshake and packet relay engine for the checkers
//! module, with capability-based authorization and a schema-backed keyed
//! store.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Coordinate two independent chain state machines through an untrusted
//! relay:
//! - Four-step channel handshake (Init/Try/Ack/Confirm) with strict
//!   version negotiation
//! - Unforgeable capability tokens gating every port/channel operation
//! - Send/receive/acknowledge/timeout packet lifecycle with deterministic
//!   acknowledgements
//! - Deterministic genesis snapshot of the module store
//!
//! ## Module Structure
//!
//! ```text
//! checkers-channel/
//! ├── domain/      # ChannelEnd, CapabilityToken, Packet, errors, events
//! ├── ports/       # ChannelLifecycle, RulesEngine, StateBackend
//! ├── store/       # Typed collections over the state backend
//! ├── service/     # ChannelService: handshake, packets, genesis, msgs
//! └── adapters/    # In-memory transport, manual clock, event recorder
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;
pub mod store;

// Re-exports
pub use adapters::{InMemoryTransport, ManualClock, RecordingEventSink};
pub use domain::{
    channel_capability_name, port_capability_name, Acknowledgement, CapabilityToken, ChannelEnd,
    ChannelError, ChannelOrder, ChannelResult, ChannelState, Counterparty, Event, GenesisState,
    IndexedStoredGame, ModuleMsg, MsgResponse, Packet, Params, RecordPacketAck, RecordPacketData,
    StoreError, StoredGame, MAX_INDEX_LENGTH, MODULE_NAME, PORT_ID, PROTOCOL_VERSION,
};
pub use ports::{
    BlockClock, ChannelLifecycle, EventSink, InMemoryStateBackend, InitialPosition,
    MockRulesEngine, ModuleLifecycle, ModuleQuery, PacketLifecycle, PacketTransport, RulesEngine,
    StateBackend,
};
pub use service::{CapabilityRegistry, ChannelDependencies, ChannelService};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
