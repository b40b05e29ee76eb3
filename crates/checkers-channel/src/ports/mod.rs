//! # Ports Layer
//!
//! Driving (inbound) and driven (outbound) interfaces of the checkers
//! channel module, plus the raw state backend beneath the typed store.

pub mod inbound;
pub mod outbound;
pub mod store;

pub use inbound::{ChannelLifecycle, ModuleLifecycle, ModuleQuery, PacketLifecycle};
pub use outbound::{
    BlockClock, EventSink, InitialPosition, MockRulesEngine, PacketTransport, RulesEngine,
};
pub use store::{InMemoryStateBackend, StateBackend};
