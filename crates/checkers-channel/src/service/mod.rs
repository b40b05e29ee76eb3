//! # Channel Service
//!
//! The module's driving-side implementation: handshake coordination,
//! packet lifecycle, genesis snapshotting, message dispatch and queries,
//! generic over the five outbound ports.
//!
//! Every callback runs to completion before the next begins; all state
//! access is synchronous. Rollback of a failed callback's effects is the
//! surrounding transaction boundary's responsibility.

mod capability;
mod genesis;
mod handshake;
mod msgs;
mod packets;
mod queries;

pub use capability::CapabilityRegistry;

use crate::domain::entities::ChannelEnd;
use crate::domain::errors::ChannelResult;
use crate::ports::outbound::{BlockClock, EventSink, PacketTransport, RulesEngine};
use crate::ports::store::StateBackend;
use crate::store::ModuleStore;
use std::collections::HashMap;
use tracing::info;

/// The checkers channel service.
///
/// Owns the module store, the capability registry and the tracked
/// channel ends; everything else is injected through ports.
pub struct ChannelService<B, R, T, C, E>
where
    B: StateBackend,
    R: RulesEngine,
    T: PacketTransport,
    C: BlockClock,
    E: EventSink,
{
    pub(crate) store: ModuleStore<B>,
    pub(crate) capabilities: CapabilityRegistry,
    pub(crate) channels: HashMap<(String, String), ChannelEnd>,
    pub(crate) rules: R,
    pub(crate) transport: T,
    pub(crate) clock: C,
    pub(crate) events: E,
}

/// Dependencies for `ChannelService`.
pub struct ChannelDependencies<B, R, T, C, E> {
    /// Raw state backend beneath the module store.
    pub backend: B,
    /// Game-rules engine.
    pub rules: R,
    /// Packet transport.
    pub transport: T,
    /// Block clock.
    pub clock: C,
    /// Event sink.
    pub events: E,
}

impl<B, R, T, C, E> ChannelService<B, R, T, C, E>
where
    B: StateBackend,
    R: RulesEngine,
    T: PacketTransport,
    C: BlockClock,
    E: EventSink,
{
    /// Create the service, building the store schema over the backend.
    ///
    /// ## Errors
    ///
    /// - `Store(SchemaConflict)`: the collection prefixes overlap
    pub fn new(deps: ChannelDependencies<B, R, T, C, E>) -> ChannelResult<Self> {
        let store = ModuleStore::new(deps.backend)?;
        info!("[checkers] channel service initialized");
        Ok(Self {
            store,
            capabilities: CapabilityRegistry::new(),
            channels: HashMap::new(),
            rules: deps.rules,
            transport: deps.transport,
            clock: deps.clock,
            events: deps.events,
        })
    }

    /// Borrow the module store.
    pub fn store(&self) -> &ModuleStore<B> {
        &self.store
    }

    /// Borrow the module store mutably.
    pub fn store_mut(&mut self) -> &mut ModuleStore<B> {
        &mut self.store
    }

    /// Borrow the capability registry.
    pub fn capabilities(&self) -> &CapabilityRegistry {
        &self.capabilities
    }

    /// Borrow the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Borrow the transport mutably.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Borrow the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Borrow the clock mutably.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Borrow the event sink.
    pub fn events(&self) -> &E {
        &self.events
    }

    /// Borrow the rules engine.
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// The tracked end for (port, channel), if any.
    pub fn channel_end(&self, port_id: &str, channel_id: &str) -> Option<&ChannelEnd> {
        self.channels
            .get(&(port_id.to_string(), channel_id.to_string()))
    }

    /// A timestamped audit marker, `"<ts> by <actor>"`.
    pub(crate) fn audit_marker(&self, actor: &str) -> String {
        format!("{} by {}", format_timestamp(self.clock.timestamp()), actor)
    }
}

/// Render a block timestamp for audit markers. Out-of-range values fall
/// back to the raw number instead of wrapping.
fn format_timestamp(timestamp: u64) -> String {
    i64::try_from(timestamp)
        .ok()
        .and_then(|secs| chrono::DateTime::<chrono::Utc>::from_timestamp(secs, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}
