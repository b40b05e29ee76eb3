//! # Two-Chain Harness
//!
//! Builds a pair of `ChannelService` instances over in-memory adapters
//! and relays packets between them the way an off-chain relayer would:
//! pick up pending packets from one side, deliver them to the other,
//! carry the acknowledgement back, and confirm it against the sender's
//! commitment before invoking the ack callback.

use checkers_channel::{
    ChannelDependencies, ChannelLifecycle, ChannelOrder, ChannelService, Counterparty,
    CapabilityToken, InMemoryStateBackend, InMemoryTransport, ManualClock, MockRulesEngine,
    PacketLifecycle, RecordingEventSink, PORT_ID, PROTOCOL_VERSION,
};

/// Service bound entirely to in-memory adapters.
pub type TestService = ChannelService<
    InMemoryStateBackend,
    MockRulesEngine,
    InMemoryTransport,
    ManualClock,
    RecordingEventSink,
>;

/// Starting height and timestamp shared by both chains.
pub const START_HEIGHT: u64 = 1;
pub const START_TIMESTAMP: u64 = 1_700_000_000;

/// A single chain whose rules engine acknowledges with `ack_result`.
pub fn chain(ack_result: &str) -> TestService {
    ChannelService::new(ChannelDependencies {
        backend: InMemoryStateBackend::new(),
        rules: MockRulesEngine::accepting(ack_result),
        transport: InMemoryTransport::new(),
        clock: ManualClock::new(START_HEIGHT, START_TIMESTAMP),
        events: RecordingEventSink::new(),
    })
    .expect("store schema must build")
}

/// Two chains with an open channel between `channel-0` on the left and
/// `channel-1` on the right, routed in both directions.
pub fn open_pair() -> (TestService, TestService) {
    let mut left = chain("ok");
    let mut right = chain("ok");

    left.on_chan_open_init(
        ChannelOrder::Ordered,
        PORT_ID,
        "channel-0",
        Counterparty::new(PORT_ID, ""),
        CapabilityToken::mint(),
        PROTOCOL_VERSION,
    )
    .expect("init must succeed");
    right
        .on_chan_open_try(
            ChannelOrder::Ordered,
            PORT_ID,
            "channel-1",
            Counterparty::new(PORT_ID, "channel-0"),
            CapabilityToken::mint(),
            PROTOCOL_VERSION,
        )
        .expect("try must succeed");
    left.on_chan_open_ack(PORT_ID, "channel-0", PROTOCOL_VERSION)
        .expect("ack must succeed");
    right
        .on_chan_open_confirm(PORT_ID, "channel-1")
        .expect("confirm must succeed");

    left.transport_mut()
        .set_route(PORT_ID, "channel-0", PORT_ID, "channel-1");
    right
        .transport_mut()
        .set_route(PORT_ID, "channel-1", PORT_ID, "channel-0");

    (left, right)
}

/// Relay every pending packet from `sender` to `receiver` and carry the
/// acknowledgements back. Returns the number of acks delivered to the
/// sending module.
pub fn relay(sender: &mut TestService, receiver: &mut TestService) -> usize {
    let mut delivered = 0;
    for packet in sender.transport_mut().take_pending() {
        let ack = receiver.on_recv_packet(&packet);
        let ack_bytes = ack.encode().expect("ack must encode");

        // A relayer may only submit the ack while the commitment is
        // live; a timed-out packet's ack is dropped on the floor.
        if sender.transport_mut().confirm_ack(&packet) {
            sender
                .on_acknowledgement_packet(&packet, &ack_bytes)
                .expect("ack callback must succeed");
            delivered += 1;
        }
    }
    delivered
}
