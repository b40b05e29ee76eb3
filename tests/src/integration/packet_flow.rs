//! # Packet Flow
//!
//! End-to-end packet lifecycle across two chains: send, receive,
//! acknowledge, and timeout, with the commitment making ack and timeout
//! mutually exclusive.

#[cfg(test)]
mod tests {
    use crate::integration::harness::{open_pair, relay, START_HEIGHT, START_TIMESTAMP};
    use checkers_channel::domain::events::{
        ATTR_KEY_ACK_ERROR, ATTR_KEY_ACK_SUCCESS, ATTR_KEY_MODULE, EVENT_TYPE_RECORD_PACKET,
        EVENT_TYPE_TIMEOUT,
    };
    use checkers_channel::{
        BlockClock, Packet, PacketLifecycle, RecordPacketData, MODULE_NAME, PORT_ID,
    };

    fn record(value: &str) -> RecordPacketData {
        RecordPacketData {
            value: value.to_string(),
        }
    }

    #[test]
    fn test_record_packet_round_trip() {
        let (mut left, mut right) = open_pair();

        let sequence = left
            .send_record_packet(record("hello"), PORT_ID, "channel-0", START_HEIGHT + 10, 0)
            .unwrap();
        assert_eq!(sequence, 1);
        assert!(left
            .transport()
            .commitment(PORT_ID, "channel-0", sequence)
            .is_some());

        assert_eq!(relay(&mut left, &mut right), 1);

        // The receiver's rules engine saw the payload.
        assert_eq!(right.rules().received, vec!["hello".to_string()]);
        // The sender's rules engine saw the acknowledgement.
        assert_eq!(left.rules().acknowledged, vec!["hello".to_string()]);

        let events = left.events().recorded();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type, EVENT_TYPE_RECORD_PACKET);
        assert_eq!(events[0].attribute(ATTR_KEY_MODULE), Some(MODULE_NAME));
        assert_eq!(events[1].attribute(ATTR_KEY_ACK_SUCCESS), Some("ok"));

        // The commitment is gone; the ack cannot be replayed.
        assert!(left
            .transport()
            .commitment(PORT_ID, "channel-0", sequence)
            .is_none());
    }

    #[test]
    fn test_sequences_stay_monotonic_across_relays() {
        let (mut left, mut right) = open_pair();

        for (i, value) in ["first", "second", "third"].iter().enumerate() {
            let sequence = left
                .send_record_packet(record(value), PORT_ID, "channel-0", START_HEIGHT + 10, 0)
                .unwrap();
            assert_eq!(sequence, i as u64 + 1);
        }
        assert_eq!(relay(&mut left, &mut right), 3);
        assert_eq!(
            right.rules().received,
            vec![
                "first".to_string(),
                "second".to_string(),
                "third".to_string()
            ]
        );
    }

    #[test]
    fn test_timeout_fires_exactly_once_and_blocks_ack() {
        let (mut left, mut right) = open_pair();

        left.send_record_packet(record("late"), PORT_ID, "channel-0", START_HEIGHT + 1, 0)
            .unwrap();
        let packet = left.transport_mut().take_pending().pop().unwrap();

        // The relayer stalls; the chain advances past the deadline.
        left.clock_mut().set_height(START_HEIGHT + 1);
        let (height, timestamp) = (left.clock().height(), left.clock().timestamp());

        assert!(left.transport_mut().confirm_timeout(&packet, height, timestamp));
        left.on_timeout_packet(&packet).unwrap();

        assert_eq!(left.rules().timed_out, vec!["late".to_string()]);
        assert_eq!(
            left.events().recorded()[0].event_type,
            EVENT_TYPE_TIMEOUT
        );

        // Second timeout submission is refused.
        assert!(!left.transport_mut().confirm_timeout(&packet, height, timestamp));

        // A late acknowledgement for the same packet is refused too: the
        // commitment was consumed by the timeout.
        let ack = right.on_recv_packet(&packet);
        assert!(ack.is_success());
        assert!(!left.transport_mut().confirm_ack(&packet));
        assert!(left.rules().acknowledged.is_empty());
    }

    #[test]
    fn test_timestamp_deadline_also_times_out() {
        let (mut left, _right) = open_pair();

        left.send_record_packet(
            record("late"),
            PORT_ID,
            "channel-0",
            0,
            START_TIMESTAMP + 5,
        )
        .unwrap();
        let packet = left.transport_mut().take_pending().pop().unwrap();

        assert!(!left
            .transport_mut()
            .confirm_timeout(&packet, START_HEIGHT, START_TIMESTAMP + 4));
        assert!(left
            .transport_mut()
            .confirm_timeout(&packet, START_HEIGHT, START_TIMESTAMP + 5));
    }

    #[test]
    fn test_malformed_payload_is_error_acked_not_dropped() {
        let (_left, mut right) = open_pair();

        let packet = Packet {
            sequence: 1,
            source_port: PORT_ID.to_string(),
            source_channel: "channel-0".to_string(),
            destination_port: PORT_ID.to_string(),
            destination_channel: "channel-1".to_string(),
            data: b"not json".to_vec(),
            timeout_height: START_HEIGHT + 10,
            timeout_timestamp: 0,
        };

        let ack = right.on_recv_packet(&packet);
        assert!(!ack.is_success());
        // The rules engine never saw the packet.
        assert!(right.rules().received.is_empty());
    }

    #[test]
    fn test_foreign_error_ack_is_surfaced() {
        let (mut left, _right) = open_pair();

        left.send_record_packet(record("hello"), PORT_ID, "channel-0", START_HEIGHT + 10, 0)
            .unwrap();
        let packet = left.transport_mut().take_pending().pop().unwrap();
        assert!(left.transport_mut().confirm_ack(&packet));

        // An error envelope produced by some other implementation.
        let ack_bytes = serde_json::to_vec(&serde_json::json!({ "error": "out of gas" })).unwrap();
        left.on_acknowledgement_packet(&packet, &ack_bytes).unwrap();

        let events = left.events().recorded();
        assert_eq!(events[1].attribute(ATTR_KEY_ACK_ERROR), Some("out of gas"));
    }
}
