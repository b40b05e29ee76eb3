//! # Handshake Flow
//!
//! Four-step handshake choreography between two chains, crossing-hello
//! resolution, and the user-initiated close rejection.

#[cfg(test)]
mod tests {
    use crate::integration::harness::{chain, open_pair};
    use checkers_channel::{
        channel_capability_name, CapabilityToken, ChannelError, ChannelLifecycle, ChannelOrder,
        ChannelState, Counterparty, PORT_ID, PROTOCOL_VERSION,
    };

    #[test]
    fn test_four_step_handshake_opens_both_ends() {
        let (left, right) = open_pair();

        assert!(left.channel_end(PORT_ID, "channel-0").unwrap().is_open());
        assert!(right.channel_end(PORT_ID, "channel-1").unwrap().is_open());
        assert!(left
            .capabilities()
            .contains(&channel_capability_name(PORT_ID, "channel-0")));
        assert!(right
            .capabilities()
            .contains(&channel_capability_name(PORT_ID, "channel-1")));
    }

    #[test]
    fn test_version_mismatch_stops_handshake_before_claim() {
        let mut left = chain("ok");
        let err = left
            .on_chan_open_init(
                ChannelOrder::Ordered,
                PORT_ID,
                "channel-0",
                Counterparty::new(PORT_ID, ""),
                CapabilityToken::mint(),
                "checkers-99",
            )
            .unwrap_err();

        assert!(matches!(err, ChannelError::InvalidVersion { .. }));
        assert!(!left
            .capabilities()
            .contains(&channel_capability_name(PORT_ID, "channel-0")));
        assert!(left.channel_end(PORT_ID, "channel-0").is_none());
    }

    #[test]
    fn test_crossing_hellos_converge_on_one_capability() {
        // Both chains run Init simultaneously; the relayer then drives
        // Try on each with the token the chain already claimed.
        let mut left = chain("ok");
        let token = CapabilityToken::mint();

        left.on_chan_open_init(
            ChannelOrder::Ordered,
            PORT_ID,
            "channel-0",
            Counterparty::new(PORT_ID, ""),
            token.clone(),
            PROTOCOL_VERSION,
        )
        .unwrap();
        left.on_chan_open_try(
            ChannelOrder::Ordered,
            PORT_ID,
            "channel-0",
            Counterparty::new(PORT_ID, "channel-1"),
            token,
            PROTOCOL_VERSION,
        )
        .unwrap();

        assert_eq!(
            left.channel_end(PORT_ID, "channel-0").unwrap().state,
            ChannelState::TryOpen
        );
    }

    #[test]
    fn test_user_initiated_close_is_refused_on_open_channel() {
        let (mut left, mut right) = open_pair();

        assert!(matches!(
            left.on_chan_close_init(PORT_ID, "channel-0"),
            Err(ChannelError::CloseNotAllowed)
        ));
        assert!(matches!(
            right.on_chan_close_init(PORT_ID, "channel-1"),
            Err(ChannelError::CloseNotAllowed)
        ));

        // Both ends are untouched by the refused close.
        assert!(left.channel_end(PORT_ID, "channel-0").unwrap().is_open());
        assert!(right.channel_end(PORT_ID, "channel-1").unwrap().is_open());
    }

    #[test]
    fn test_counterparty_close_propagates() {
        let (mut left, _right) = open_pair();

        left.on_chan_close_confirm(PORT_ID, "channel-0").unwrap();
        assert_eq!(
            left.channel_end(PORT_ID, "channel-0").unwrap().state,
            ChannelState::Closed
        );
    }
}
