//! # Integration Tests
//!
//! Two independent `ChannelService` instances wired through their
//! in-memory transports, with the tests playing the relay.

pub mod harness;

mod genesis_flow;
mod handshake_flow;
mod packet_flow;
