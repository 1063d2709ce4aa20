use crate::protocol::protocol_notations::enum_value::enum_value;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::SocketAddr;

/// Represents changes in the cluster topology.
///
/// This enum is used to indicate the type of change that has occurred in the cluster's topology.
/// It is sent in Event messages to report the addition, removal, or movement of nodes.
///
/// ### Variants:
/// - **NewNode**: A new node was added to the cluster.
/// - **RemovedNode**: A node was removed from the cluster.
/// - **MovedNode**: A node moved to a different position of the token ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TopologyChangeType {
    NewNode,
    RemovedNode,
    MovedNode,
}

enum_value!(TopologyChangeType {
    NewNode => "NEW_NODE",
    RemovedNode => "REMOVED_NODE",
    MovedNode => "MOVED_NODE",
});

/// A `TOPOLOGY_CHANGE` event: which change happened and to which node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TopologyChangeEvent {
    change: TopologyChangeType,
    node: SocketAddr,
}

impl TopologyChangeEvent {
    pub fn new(change: TopologyChangeType, node: SocketAddr) -> TopologyChangeEvent {
        TopologyChangeEvent { change, node }
    }

    pub fn get_change(&self) -> TopologyChangeType {
        self.change
    }

    /// Native transport address of the affected node.
    pub fn get_node(&self) -> SocketAddr {
        self.node
    }
}

impl fmt::Display for TopologyChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.change, self.node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::protocol_notations::enum_value::EnumValue;

    #[test]
    fn test_names() {
        for change in TopologyChangeType::VALUES {
            assert_eq!(TopologyChangeType::from_name(change.name()), Some(*change));
        }
        assert_eq!(TopologyChangeType::from_name("new_node"), None);
    }

    #[test]
    fn test_display() {
        let event = TopologyChangeEvent::new(
            TopologyChangeType::RemovedNode,
            "127.0.0.1:9042".parse().unwrap(),
        );
        assert_eq!(event.to_string(), "REMOVED_NODE 127.0.0.1:9042");
    }
}
