//! # Domain Layer
//!
//! Entities, value objects, wire formats, events and errors for the
//! checkers channel module.

pub mod entities;
pub mod errors;
pub mod events;
pub mod msgs;
pub mod value_objects;
pub mod wire;

pub use entities::{
    channel_capability_name, port_capability_name, CapabilityToken, ChannelEnd, Counterparty,
    GenesisState, IndexedStoredGame, Params, StoredGame, MAX_INDEX_LENGTH, MODULE_NAME, PORT_ID,
    PROTOCOL_VERSION,
};
pub use errors::{ChannelError, ChannelResult, StoreError, StoreResult};
pub use events::{
    Event, ATTR_KEY_ACK, ATTR_KEY_ACK_ERROR, ATTR_KEY_ACK_SUCCESS, ATTR_KEY_MODULE,
    EVENT_TYPE_RECORD_PACKET, EVENT_TYPE_TIMEOUT,
};
pub use msgs::{ModuleMsg, MsgResponse};
pub use value_objects::{ChannelOrder, ChannelState};
pub use wire::{Acknowledgement, Packet, RecordPacketAck, RecordPacketData};
