use crate::protocol::protocol_notations::enum_value::enum_value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::SocketAddr;

/// Represents the status of a node in an Event message.
///
/// ### Variants:
/// - **Up**: The node is reachable and serving requests.
/// - **Down**: The node stopped answering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusNode {
    Up,
    Down,
}

enum_value!(StatusNode {
    Up => "UP",
    Down => "DOWN",
});

/// A `STATUS_CHANGE` event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusChangeEvent {
    status: StatusNode,
    node: SocketAddr,
}

impl StatusChangeEvent {
    pub fn new(status: StatusNode, node: SocketAddr) -> StatusChangeEvent {
        StatusChangeEvent { status, node }
    }

    pub fn get_status(&self) -> StatusNode {
        self.status
    }

    pub fn get_node(&self) -> SocketAddr {
        self.node
    }
}

impl fmt::Display for StatusChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_ipv6() {
        let event = StatusChangeEvent::new(StatusNode::Up, "[::1]:9042".parse().unwrap());
        assert_eq!(event.to_string(), "UP [::1]:9042");
        assert_eq!(event.get_status(), StatusNode::Up);
    }
}
