use super::{
    schema_change::SchemaChangeEvent, status_node::StatusChangeEvent,
    topology_change::TopologyChangeEvent,
};
use crate::protocol::protocol_notations::enum_value::enum_value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the type tag that opens the body of an Event message.
///
/// ### Variants:
/// - **TopologyChange**: A node joined, left or moved in the ring.
/// - **StatusChange**: A node went up or down.
/// - **SchemaChange**: A keyspace, table or type was created, updated or dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    TopologyChange,
    StatusChange,
    SchemaChange,
}

enum_value!(EventType {
    TopologyChange => "TOPOLOGY_CHANGE",
    StatusChange => "STATUS_CHANGE",
    SchemaChange => "SCHEMA_CHANGE",
});

/// A decoded server pushed event.
///
/// Each variant holds the payload of its event type, so the variant always agrees with the
/// tag it was read from (see `get_type`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    TopologyChange(TopologyChangeEvent),
    StatusChange(StatusChangeEvent),
    SchemaChange(SchemaChangeEvent),
}

impl Event {
    /// Returns the wire type tag of this event.
    pub fn get_type(&self) -> EventType {
        match self {
            Event::TopologyChange(_) => EventType::TopologyChange,
            Event::StatusChange(_) => EventType::StatusChange,
            Event::SchemaChange(_) => EventType::SchemaChange,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::TopologyChange(event) => fmt::Display::fmt(event, f),
            Event::StatusChange(event) => fmt::Display::fmt(event, f),
            Event::SchemaChange(event) => fmt::Display::fmt(event, f),
        }
    }
}

impl From<TopologyChangeEvent> for Event {
    fn from(event: TopologyChangeEvent) -> Self {
        Event::TopologyChange(event)
    }
}

impl From<StatusChangeEvent> for Event {
    fn from(event: StatusChangeEvent) -> Self {
        Event::StatusChange(event)
    }
}

impl From<SchemaChangeEvent> for Event {
    fn from(event: SchemaChangeEvent) -> Self {
        Event::SchemaChange(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::protocol_body::status_node::StatusNode;

    #[test]
    fn test_get_type() {
        let event: Event =
            StatusChangeEvent::new(StatusNode::Down, "10.0.0.5:9042".parse().unwrap()).into();
        assert_eq!(event.get_type(), EventType::StatusChange);
        assert_eq!(event.to_string(), "DOWN 10.0.0.5:9042");
        assert_eq!(EventType::SchemaChange.to_string(), "SCHEMA_CHANGE");
    }
}
