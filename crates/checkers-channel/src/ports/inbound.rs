//! # Inbound Ports (Driving Ports)
//!
//! The primary APIs the checkers channel module exposes to the
//! surrounding ledger runtime. The runtime invokes these callbacks one at
//! a time; each runs to completion before the next begins.

use crate::domain::entities::{CapabilityToken, Counterparty, GenesisState, StoredGame};
use crate::domain::errors::ChannelResult;
use crate::domain::msgs::{ModuleMsg, MsgResponse};
use crate::domain::value_objects::ChannelOrder;
use crate::domain::wire::{Acknowledgement, Packet, RecordPacketData};

/// Channel handshake callbacks.
///
/// Driven by the transport runtime as handshake messages arrive from the
/// relay. Any error aborts that step; no capability is left half-claimed.
pub trait ChannelLifecycle {
    /// Handshake step 1, initiator side.
    ///
    /// Claims the channel capability and records the end at INIT.
    /// Returns the accepted version.
    ///
    /// ## Errors
    ///
    /// - `InvalidPort`: `port_id` is not the module's bound port
    /// - `InvalidVersion`: `version` is not the protocol version
    /// - `AlreadyClaimed`: a capability already exists for this channel
    fn on_chan_open_init(
        &mut self,
        order: ChannelOrder,
        port_id: &str,
        channel_id: &str,
        counterparty: Counterparty,
        token: CapabilityToken,
        version: &str,
    ) -> ChannelResult<String>;

    /// Handshake step 2, responder side.
    ///
    /// Reuses an already-authenticated capability (crossing hellos) or
    /// claims a fresh one, then records the end at TRYOPEN. Returns the
    /// accepted version.
    ///
    /// ## Errors
    ///
    /// - `InvalidPort`: `port_id` is not the module's bound port
    /// - `InvalidVersion`: `counterparty_version` is not the protocol version
    fn on_chan_open_try(
        &mut self,
        order: ChannelOrder,
        port_id: &str,
        channel_id: &str,
        counterparty: Counterparty,
        token: CapabilityToken,
        counterparty_version: &str,
    ) -> ChannelResult<String>;

    /// Handshake step 3, initiator side. Transitions INIT to OPEN.
    ///
    /// ## Errors
    ///
    /// - `InvalidVersion`: counterparty settled on a different version
    /// - `InvalidTransition`: the tracked end is not at INIT
    fn on_chan_open_ack(
        &mut self,
        port_id: &str,
        channel_id: &str,
        counterparty_version: &str,
    ) -> ChannelResult<()>;

    /// Handshake step 4, responder side. Transitions TRYOPEN to OPEN.
    fn on_chan_open_confirm(&mut self, port_id: &str, channel_id: &str) -> ChannelResult<()>;

    /// Local close request. Always rejected; the module never
    /// voluntarily closes a channel.
    ///
    /// ## Errors
    ///
    /// - `CloseNotAllowed`: unconditionally
    fn on_chan_close_init(&mut self, port_id: &str, channel_id: &str) -> ChannelResult<()>;

    /// Counterparty-initiated close. Accepted passively; a tracked end
    /// transitions to CLOSED.
    fn on_chan_close_confirm(&mut self, port_id: &str, channel_id: &str) -> ChannelResult<()>;
}

/// Packet send path and delivery callbacks.
pub trait PacketLifecycle {
    /// Send a record packet over an established channel.
    ///
    /// Sequence assignment and the commitment write belong to the
    /// transport; the returned sequence is the transport's.
    ///
    /// ## Errors
    ///
    /// - `MissingCapability`: the module does not hold the channel capability
    /// - `Codec`: the payload failed to serialize
    fn send_record_packet(
        &mut self,
        data: RecordPacketData,
        source_port: &str,
        source_channel: &str,
        timeout_height: u64,
        timeout_timestamp: u64,
    ) -> ChannelResult<u64>;

    /// Receive callback.
    ///
    /// Never fails: a malformed payload or a rules-engine rejection is
    /// captured into an error acknowledgement so the sender always gets a
    /// terminal, deterministic response.
    fn on_recv_packet(&mut self, packet: &Packet) -> Acknowledgement;

    /// Acknowledgement callback on the sending chain.
    ///
    /// ## Errors
    ///
    /// - `Codec`: malformed acknowledgement envelope or packet payload
    /// - `Engine`: the rules engine rejected the acknowledgement
    fn on_acknowledgement_packet(&mut self, packet: &Packet, ack_bytes: &[u8])
        -> ChannelResult<()>;

    /// Timeout callback on the sending chain.
    ///
    /// Fires exactly once per timed-out packet, and never for a packet
    /// that was acknowledged; the transport enforces that exclusivity.
    ///
    /// ## Errors
    ///
    /// - `Codec`: malformed packet payload
    /// - `Engine`: the rules engine rejected the timeout
    fn on_timeout_packet(&mut self, packet: &Packet) -> ChannelResult<()>;
}

/// Genesis and block-boundary lifecycle.
pub trait ModuleLifecycle {
    /// Produce the default genesis document: default params, no games.
    fn default_genesis(&self) -> GenesisState;

    /// Validate a genesis document without touching the store.
    ///
    /// ## Errors
    ///
    /// - `InvalidParams`: params failed their validation hook
    /// - `IndexTooLong`: a record index is empty or over 256 bytes
    /// - `DuplicateIndex`: two records share an index
    /// - `Engine`: a record's game state failed rules validation
    fn validate_genesis(&self, genesis: &GenesisState) -> ChannelResult<()>;

    /// Load a pre-validated genesis document into the store.
    ///
    /// Binds the module's port capability (first import only), then
    /// writes params and each record; the first failing write aborts
    /// the import. Rollback belongs to the surrounding transaction
    /// boundary.
    fn init_genesis(&mut self, genesis: &GenesisState) -> ChannelResult<()>;

    /// Export the full store into a portable document. Does not mutate
    /// the store.
    fn export_genesis(&self) -> ChannelResult<GenesisState>;

    /// Block-boundary hook; writes a liveness marker to the audit set.
    fn begin_block(&mut self) -> ChannelResult<()>;

    /// Block-boundary hook; writes a liveness marker to the audit set.
    fn end_block(&mut self) -> ChannelResult<()>;

    /// Dispatch a module message.
    ///
    /// ## Errors
    ///
    /// - `IndexTooLong` / `GameExists`: bad or taken create-game index
    /// - `Engine`: the seeded game failed rules validation
    fn handle_msg(&mut self, msg: ModuleMsg) -> ChannelResult<MsgResponse>;
}

/// Read-only query surface.
pub trait ModuleQuery {
    /// Look up a game by exact index. A miss is `None`, not an error.
    fn get_game(&self, index: &str) -> ChannelResult<Option<StoredGame>>;

    /// List the audit markers in stable sorted order.
    fn list_records(&self) -> ChannelResult<Vec<String>>;
}
