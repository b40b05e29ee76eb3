//! # Adapters Layer
//!
//! In-memory implementations of the outbound ports: a sequencing,
//! commitment-tracking transport, a manually driven block clock and a
//! recording event sink. Production binds the host ledger's transport,
//! clock and event manager instead.

pub mod clock;
pub mod events;
pub mod transport;

pub use clock::ManualClock;
pub use events::RecordingEventSink;
pub use transport::InMemoryTransport;
