//! # Recording Event Sink
//!
//! An `EventSink` that keeps every emitted event for inspection;
//! production binds the ledger's event manager.

use crate::domain::events::Event;
use crate::ports::outbound::EventSink;

/// Event sink that records everything it is given, in order.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: Vec<Event>,
}

impl RecordingEventSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every event emitted so far, oldest first.
    pub fn recorded(&self) -> &[Event] {
        &self.events
    }

    /// Drop all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&mut self, event: Event) {
        self.events.push(event);
    }
}
