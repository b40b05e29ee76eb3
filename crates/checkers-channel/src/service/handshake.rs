//! # Channel Handshake Coordinator
//!
//! Four-step handshake (Init/Try/Ack/Confirm) plus the close callbacks.
//! Port and version checks run before any capability claim, so a failed
//! step never leaves a half-claimed capability behind.

use super::ChannelService;
use crate::domain::entities::{
    channel_capability_name, CapabilityToken, ChannelEnd, Counterparty, PORT_ID, PROTOCOL_VERSION,
};
use crate::domain::errors::{ChannelError, ChannelResult};
use crate::domain::value_objects::{ChannelOrder, ChannelState};
use crate::ports::inbound::ChannelLifecycle;
use crate::ports::outbound::{BlockClock, EventSink, PacketTransport, RulesEngine};
use crate::ports::store::StateBackend;
use tracing::{info, warn};

impl<B, R, T, C, E> ChannelService<B, R, T, C, E>
where
    B: StateBackend,
    R: RulesEngine,
    T: PacketTransport,
    C: BlockClock,
    E: EventSink,
{
    fn check_port(&self, port_id: &str) -> ChannelResult<()> {
        if port_id != PORT_ID {
            return Err(ChannelError::InvalidPort {
                got: port_id.to_string(),
                expected: PORT_ID.to_string(),
            });
        }
        Ok(())
    }

    fn check_version(&self, version: &str) -> ChannelResult<()> {
        if version != PROTOCOL_VERSION {
            return Err(ChannelError::InvalidVersion {
                got: version.to_string(),
                expected: PROTOCOL_VERSION.to_string(),
            });
        }
        Ok(())
    }

    fn track_end(
        &mut self,
        order: ChannelOrder,
        port_id: &str,
        channel_id: &str,
        counterparty: Counterparty,
        state: ChannelState,
    ) {
        let end = ChannelEnd {
            port_id: port_id.to_string(),
            channel_id: channel_id.to_string(),
            order,
            state,
            version: PROTOCOL_VERSION.to_string(),
            counterparty,
        };
        self.channels
            .insert((port_id.to_string(), channel_id.to_string()), end);
    }

    fn advance_tracked(
        &mut self,
        port_id: &str,
        channel_id: &str,
        next: ChannelState,
    ) -> ChannelResult<()> {
        match self
            .channels
            .get_mut(&(port_id.to_string(), channel_id.to_string()))
        {
            Some(end) => end.advance_to(next),
            // The transport tracks handshake state authoritatively; an
            // untracked end is accepted as-is.
            None => Ok(()),
        }
    }
}

impl<B, R, T, C, E> ChannelLifecycle for ChannelService<B, R, T, C, E>
where
    B: StateBackend,
    R: RulesEngine,
    T: PacketTransport,
    C: BlockClock,
    E: EventSink,
{
    fn on_chan_open_init(
        &mut self,
        order: ChannelOrder,
        port_id: &str,
        channel_id: &str,
        counterparty: Counterparty,
        token: CapabilityToken,
        version: &str,
    ) -> ChannelResult<String> {
        self.check_port(port_id)?;
        self.check_version(version)?;

        let name = channel_capability_name(port_id, channel_id);
        self.capabilities.claim(&name, token)?;
        self.track_end(order, port_id, channel_id, counterparty, ChannelState::Init);

        info!("[checkers] handshake INIT: {port_id}/{channel_id}");
        Ok(version.to_string())
    }

    fn on_chan_open_try(
        &mut self,
        order: ChannelOrder,
        port_id: &str,
        channel_id: &str,
        counterparty: Counterparty,
        token: CapabilityToken,
        counterparty_version: &str,
    ) -> ChannelResult<String> {
        self.check_port(port_id)?;
        self.check_version(counterparty_version)?;

        // Crossing hellos: the capability may already be ours from an
        // earlier OnChanOpenInit. Claim only if not.
        let name = channel_capability_name(port_id, channel_id);
        if !self.capabilities.authenticate(&name, &token) {
            self.capabilities.claim(&name, token)?;
        }
        self.track_end(
            order,
            port_id,
            channel_id,
            counterparty,
            ChannelState::TryOpen,
        );

        info!("[checkers] handshake TRYOPEN: {port_id}/{channel_id}");
        Ok(counterparty_version.to_string())
    }

    fn on_chan_open_ack(
        &mut self,
        port_id: &str,
        channel_id: &str,
        counterparty_version: &str,
    ) -> ChannelResult<()> {
        self.check_version(counterparty_version)?;
        self.advance_tracked(port_id, channel_id, ChannelState::Open)?;
        info!("[checkers] handshake OPEN (ack): {port_id}/{channel_id}");
        Ok(())
    }

    fn on_chan_open_confirm(&mut self, port_id: &str, channel_id: &str) -> ChannelResult<()> {
        self.advance_tracked(port_id, channel_id, ChannelState::Open)?;
        info!("[checkers] handshake OPEN (confirm): {port_id}/{channel_id}");
        Ok(())
    }

    fn on_chan_close_init(&mut self, port_id: &str, channel_id: &str) -> ChannelResult<()> {
        warn!("[checkers] close refused: {port_id}/{channel_id}");
        Err(ChannelError::CloseNotAllowed)
    }

    fn on_chan_close_confirm(&mut self, port_id: &str, channel_id: &str) -> ChannelResult<()> {
        self.advance_tracked(port_id, channel_id, ChannelState::Closed)?;
        info!("[checkers] channel closed by counterparty: {port_id}/{channel_id}");
        Ok(())
    }
}
