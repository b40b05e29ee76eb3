//! # Packet Lifecycle Manager
//!
//! Send path plus the receive/acknowledge/timeout callbacks. Receive
//! never aborts: every failure becomes an error acknowledgement so the
//! sending chain always gets a terminal response. Ack and timeout
//! failures abort their callback and surface to the caller.

use super::ChannelService;
use crate::domain::entities::{channel_capability_name, MODULE_NAME};
use crate::domain::errors::{ChannelError, ChannelResult};
use crate::domain::events::{
    Event, ATTR_KEY_ACK, ATTR_KEY_ACK_ERROR, ATTR_KEY_ACK_SUCCESS, ATTR_KEY_MODULE,
    EVENT_TYPE_RECORD_PACKET, EVENT_TYPE_TIMEOUT,
};
use crate::domain::wire::{Acknowledgement, Packet, RecordPacketAck, RecordPacketData};
use crate::ports::inbound::PacketLifecycle;
use crate::ports::outbound::{BlockClock, EventSink, PacketTransport, RulesEngine};
use crate::ports::store::StateBackend;
use tracing::{debug, warn};

impl<B, R, T, C, E> PacketLifecycle for ChannelService<B, R, T, C, E>
where
    B: StateBackend,
    R: RulesEngine,
    T: PacketTransport,
    C: BlockClock,
    E: EventSink,
{
    fn send_record_packet(
        &mut self,
        data: RecordPacketData,
        source_port: &str,
        source_channel: &str,
        timeout_height: u64,
        timeout_timestamp: u64,
    ) -> ChannelResult<u64> {
        let name = channel_capability_name(source_port, source_channel);
        if !self.capabilities.contains(&name) {
            return Err(ChannelError::MissingCapability { name });
        }

        let bytes = data.encode()?;
        let sequence = self.transport.send_packet(
            source_port,
            source_channel,
            timeout_height,
            timeout_timestamp,
            bytes,
        )?;

        debug!("[checkers] sent record packet {sequence} on {source_port}/{source_channel}");
        Ok(sequence)
    }

    fn on_recv_packet(&mut self, packet: &Packet) -> Acknowledgement {
        let data = match RecordPacketData::decode(&packet.data) {
            Ok(data) => data,
            Err(err) => {
                warn!("[checkers] undecodable packet {}: {err}", packet.sequence);
                return Acknowledgement::error(err.to_string());
            }
        };

        match self.rules.apply_received(&data) {
            Ok(packet_ack) => match packet_ack.encode() {
                Ok(bytes) => Acknowledgement::result(bytes),
                Err(err) => Acknowledgement::error(err.to_string()),
            },
            Err(err) => Acknowledgement::error(err.to_string()),
        }
    }

    fn on_acknowledgement_packet(
        &mut self,
        packet: &Packet,
        ack_bytes: &[u8],
    ) -> ChannelResult<()> {
        let ack = Acknowledgement::decode(ack_bytes)?;
        let data = RecordPacketData::decode(&packet.data)?;

        self.rules.apply_acknowledged(&data, &ack)?;

        self.events.emit(
            Event::new(EVENT_TYPE_RECORD_PACKET)
                .attr(ATTR_KEY_MODULE, MODULE_NAME)
                .attr(ATTR_KEY_ACK, format!("{ack:?}")),
        );

        match &ack {
            Acknowledgement::Result { result } => {
                // Our own acks carry a RecordPacketAck; a foreign but
                // successful ack is still surfaced, lossily decoded.
                let success = match RecordPacketAck::decode(result) {
                    Ok(packet_ack) => packet_ack.result,
                    Err(_) => String::from_utf8_lossy(result).into_owned(),
                };
                self.events
                    .emit(Event::new(EVENT_TYPE_RECORD_PACKET).attr(ATTR_KEY_ACK_SUCCESS, success));
            }
            Acknowledgement::Error { error } => {
                self.events.emit(
                    Event::new(EVENT_TYPE_RECORD_PACKET).attr(ATTR_KEY_ACK_ERROR, error.clone()),
                );
            }
        }

        debug!("[checkers] acknowledged packet {}", packet.sequence);
        Ok(())
    }

    fn on_timeout_packet(&mut self, packet: &Packet) -> ChannelResult<()> {
        let data = RecordPacketData::decode(&packet.data)?;
        self.rules.apply_timed_out(&data)?;

        self.events
            .emit(Event::new(EVENT_TYPE_TIMEOUT).attr(ATTR_KEY_MODULE, MODULE_NAME));

        warn!("[checkers] packet {} timed out", packet.sequence);
        Ok(())
    }
}
