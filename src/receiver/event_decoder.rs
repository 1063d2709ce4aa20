use super::read_notation::{read_enum_value, read_inet, read_string};
use crate::errors::error_types::ErrorTypes;
use crate::protocol::frames_headers::version::ProtocolVersion;
use crate::protocol::protocol_body::{
    event_kind::{Event, EventType},
    schema_change::{SchemaChangeEvent, SchemaChangeTarget, SchemaChangeType},
    status_node::{StatusChangeEvent, StatusNode},
    topology_change::{TopologyChangeEvent, TopologyChangeType},
};

/// Wire layout of a schema change event body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum SchemaLayout {
    /// `change`, `keyspace`, `name`; the target is implied by the name.
    Legacy,
    /// `change`, `target`, `keyspace`, then `name` unless the target is a keyspace.
    Targeted,
}

impl SchemaLayout {
    /// Picks the schema event layout for a protocol version.
    pub(crate) fn for_version(version: ProtocolVersion) -> Result<SchemaLayout, ErrorTypes> {
        match version {
            ProtocolVersion::V1 | ProtocolVersion::V2 => Ok(SchemaLayout::Legacy),
            ProtocolVersion::V3 => Ok(SchemaLayout::Targeted),
            ProtocolVersion::V4 | ProtocolVersion::V5 => Err(version.unsupported()),
        }
    }
}

/// Decodes the body of an Event message into an `Event`.
///
/// The bytes are consumed from the front of `bytes` as the fields are read, so on success
/// whatever follows the event is left in place. `version` is the protocol version
/// negotiated on the connection the bytes came from.
///
/// # Errors:
/// - Truncated or malformed fields, including unknown enum names, as reported by
///   `read_notation`.
/// - `402`/`404` for a schema change with an empty keyspace, or a table or type change with
///   an empty name: such wire values are rejected rather than passed through.
/// - `ErrorTypes::UnsupportedProtocolVersion` for a schema change read under a version with
///   no known schema layout. Only the type tag has been consumed in that case.
pub fn decode_event(bytes: &mut Vec<u8>, version: ProtocolVersion) -> Result<Event, ErrorTypes> {
    let event = match read_enum_value::<EventType>(bytes)? {
        EventType::TopologyChange => Event::TopologyChange(handle_topology_change(bytes)?),
        EventType::StatusChange => Event::StatusChange(handle_status_change(bytes)?),
        EventType::SchemaChange => Event::SchemaChange(handle_schema_change(bytes, version)?),
    };
    log::debug!("Decoded {} event: {}", event.get_type(), event);
    Ok(event)
}

/// This function handles a topology change, the type tag already read.
fn handle_topology_change(bytes: &mut Vec<u8>) -> Result<TopologyChangeEvent, ErrorTypes> {
    let change = read_enum_value::<TopologyChangeType>(bytes)?;
    let node = read_inet(bytes)?;
    Ok(TopologyChangeEvent::new(change, node))
}

/// This function handles a status change, the type tag already read.
fn handle_status_change(bytes: &mut Vec<u8>) -> Result<StatusChangeEvent, ErrorTypes> {
    let status = read_enum_value::<StatusNode>(bytes)?;
    let node = read_inet(bytes)?;
    Ok(StatusChangeEvent::new(status, node))
}

/// This function handles a schema change, the type tag already read.
fn handle_schema_change(
    bytes: &mut Vec<u8>,
    version: ProtocolVersion,
) -> Result<SchemaChangeEvent, ErrorTypes> {
    let layout = match SchemaLayout::for_version(version) {
        Ok(layout) => layout,
        Err(e) => {
            log::warn!("Rejecting schema change event under protocol {}", version);
            return Err(e);
        }
    };
    match layout {
        SchemaLayout::Legacy => {
            let change = read_enum_value::<SchemaChangeType>(bytes)?;
            let keyspace = read_string(bytes)?;
            let name = read_string(bytes)?;
            SchemaChangeEvent::from_legacy(change, keyspace, name)
        }
        SchemaLayout::Targeted => {
            let change = read_enum_value::<SchemaChangeType>(bytes)?;
            let target = read_enum_value::<SchemaChangeTarget>(bytes)?;
            let keyspace = read_string(bytes)?;
            let name = match target {
                SchemaChangeTarget::Keyspace => String::new(),
                SchemaChangeTarget::Table | SchemaChangeTarget::Type => read_string(bytes)?,
            };
            SchemaChangeEvent::new(change, target, keyspace, name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    fn string(value: &str) -> Vec<u8> {
        let mut bytes = (value.len() as u16).to_be_bytes().to_vec();
        bytes.extend(value.as_bytes());
        bytes
    }

    fn body(fields: &[&str]) -> Vec<u8> {
        fields.iter().flat_map(|field| string(field)).collect()
    }

    #[test]
    fn test_status_change() {
        let mut bytes = body(&["STATUS_CHANGE", "DOWN"]);
        bytes.extend([0x04, 10, 0, 0, 5, 0x00, 0x00, 0x23, 0x52]);
        let event = decode_event(&mut bytes, ProtocolVersion::V3).unwrap();
        assert_eq!(
            event,
            Event::StatusChange(StatusChangeEvent::new(
                StatusNode::Down,
                "10.0.0.5:9042".parse::<SocketAddr>().unwrap()
            ))
        );
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_topology_change_ignores_version() {
        for version in [ProtocolVersion::V1, ProtocolVersion::V4, ProtocolVersion::V5] {
            let mut bytes = body(&["TOPOLOGY_CHANGE", "MOVED_NODE"]);
            bytes.extend([0x04, 127, 0, 0, 1, 0x00, 0x00, 0x23, 0x52]);
            let event = decode_event(&mut bytes, version).unwrap();
            assert_eq!(event.get_type(), EventType::TopologyChange);
        }
    }

    #[test]
    fn test_legacy_schema_change() {
        let mut bytes = body(&["SCHEMA_CHANGE", "CREATED", "ks1", "flights"]);
        let event = decode_event(&mut bytes, ProtocolVersion::V1).unwrap();
        let Event::SchemaChange(schema) = event else {
            panic!("expected a schema change");
        };
        assert_eq!(schema.get_target(), SchemaChangeTarget::Table);
        assert_eq!(schema.get_name(), "flights");
    }

    #[test]
    fn test_targeted_schema_change_table() {
        let mut bytes = body(&["SCHEMA_CHANGE", "DROPPED", "TABLE", "ks1", "flights"]);
        let event = decode_event(&mut bytes, ProtocolVersion::V3).unwrap();
        assert_eq!(event.to_string(), "DROPPED TABLE ks1.flights");
    }

    #[test]
    fn test_targeted_keyspace_leaves_next_bytes() {
        let mut bytes = body(&["SCHEMA_CHANGE", "UPDATED", "KEYSPACE", "ks2", "next"]);
        decode_event(&mut bytes, ProtocolVersion::V3).unwrap();
        assert_eq!(bytes, string("next"));
    }

    #[test]
    fn test_unknown_event_type() {
        let mut bytes = body(&["CLIENT_CHANGE", "UP"]);
        let err = decode_event(&mut bytes, ProtocolVersion::V3).unwrap_err();
        assert_eq!(err.get().0, 306);
    }

    #[test]
    fn test_schema_layout_for_version() {
        assert_eq!(
            SchemaLayout::for_version(ProtocolVersion::V2),
            Ok(SchemaLayout::Legacy)
        );
        assert_eq!(
            SchemaLayout::for_version(ProtocolVersion::V3),
            Ok(SchemaLayout::Targeted)
        );
        assert_eq!(
            SchemaLayout::for_version(ProtocolVersion::V5),
            Err(ErrorTypes::UnsupportedProtocolVersion {
                version: ProtocolVersion::V5
            })
        );
    }

    #[test]
    fn test_empty_keyspace_is_rejected() {
        let mut bytes = body(&["SCHEMA_CHANGE", "UPDATED", "KEYSPACE", ""]);
        let err = decode_event(&mut bytes, ProtocolVersion::V3).unwrap_err();
        assert_eq!(err.get().0, 402);
    }

    #[test]
    fn test_targeted_table_without_name_is_rejected() {
        let mut bytes = body(&["SCHEMA_CHANGE", "CREATED", "TABLE", "ks1", ""]);
        let err = decode_event(&mut bytes, ProtocolVersion::V3).unwrap_err();
        assert_eq!(err.get().0, 404);
    }
}
