//! # Module Events
//!
//! Structured events emitted at the packet callback boundary, consumed
//! through the `EventSink` port.

/// Event type for acknowledged record packets.
pub const EVENT_TYPE_RECORD_PACKET: &str = "record_packet";

/// Event type for timed-out packets.
pub const EVENT_TYPE_TIMEOUT: &str = "timeout";

/// Attribute key naming the emitting module.
pub const ATTR_KEY_MODULE: &str = "module";

/// Attribute key carrying the full acknowledgement dump.
pub const ATTR_KEY_ACK: &str = "ack";

/// Attribute key carrying the decoded success payload.
pub const ATTR_KEY_ACK_SUCCESS: &str = "ack_success";

/// Attribute key carrying the acknowledgement error string.
pub const ATTR_KEY_ACK_ERROR: &str = "ack_error";

/// A structured event: a type plus ordered key/value attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    /// Event type tag.
    pub event_type: String,
    /// Ordered attribute pairs.
    pub attributes: Vec<(String, String)>,
}

impl Event {
    /// Create an event with no attributes.
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Look up the first attribute with the given key.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_builder() {
        let event = Event::new(EVENT_TYPE_RECORD_PACKET)
            .attr(ATTR_KEY_MODULE, "checkers")
            .attr(ATTR_KEY_ACK_SUCCESS, "ok");
        assert_eq!(event.attribute(ATTR_KEY_MODULE), Some("checkers"));
        assert_eq!(event.attribute(ATTR_KEY_ACK_SUCCESS), Some("ok"));
        assert_eq!(event.attribute(ATTR_KEY_ACK_ERROR), None);
    }
}
