use super::{
    frames_headers::version::ProtocolVersion,
    protocol_body::{
        event_kind::Event,
        schema_change::{SchemaChangeEvent, SchemaChangeTarget},
    },
    protocol_notations::protocol_body_writer::ProtocolBody,
};
use crate::errors::error_types::ErrorTypes;
use crate::receiver::event_decoder::SchemaLayout;

/// This function writes the body of an Event message in the layout of `version`.
///
/// The output is what `decode_event` reads back: the type tag, then the fields of the
/// event. Topology and status events are written the same way under every version.
///
/// # Errors:
/// - `ErrorTypes::UnsupportedProtocolVersion` for a schema change under a version with no
///   schema layout.
/// - `405` for a type schema change under v1/v2, which cannot express it.
/// - `100` if a keyspace or object name does not fit in a [string].
///
/// Nothing is written to `body` when an error is returned.
pub fn write_event(
    body: &mut ProtocolBody,
    event: &Event,
    version: ProtocolVersion,
) -> Result<(), ErrorTypes> {
    // Staged so a failed write leaves `body` untouched.
    let mut staged = ProtocolBody::new();
    match event {
        Event::TopologyChange(topology) => {
            staged.write_enum_value(&event.get_type())?;
            staged.write_enum_value(&topology.get_change())?;
            staged.write_inet(topology.get_node());
        }
        Event::StatusChange(status) => {
            staged.write_enum_value(&event.get_type())?;
            staged.write_enum_value(&status.get_status())?;
            staged.write_inet(status.get_node());
        }
        Event::SchemaChange(schema) => {
            let layout = SchemaLayout::for_version(version)?;
            if layout == SchemaLayout::Legacy && schema.get_target() == SchemaChangeTarget::Type {
                return Err(ErrorTypes::new(
                    405,
                    format!("Type schema changes cannot be written under protocol {}", version),
                ));
            }
            staged.write_enum_value(&event.get_type())?;
            write_schema_change(&mut staged, schema, layout)?;
        }
    }
    body.append(staged);
    Ok(())
}

/// This private function writes the fields of a schema change.
fn write_schema_change(
    body: &mut ProtocolBody,
    schema: &SchemaChangeEvent,
    layout: SchemaLayout,
) -> Result<(), ErrorTypes> {
    body.write_enum_value(&schema.get_change())?;
    match layout {
        SchemaLayout::Legacy => {
            body.write_string(schema.get_keyspace())?;
            body.write_string(schema.get_name())?;
        }
        SchemaLayout::Targeted => {
            body.write_enum_value(&schema.get_target())?;
            body.write_string(schema.get_keyspace())?;
            if schema.get_target() != SchemaChangeTarget::Keyspace {
                body.write_string(schema.get_name())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::protocol::protocol_body::schema_change::SchemaChangeType;

    fn schema(target: SchemaChangeTarget, name: &str) -> Event {
        SchemaChangeEvent::new(
            SchemaChangeType::Created,
            target,
            "ks1".to_string(),
            name.to_string(),
        )
        .unwrap()
        .into()
    }

    #[test]
    fn test_write_keyspace_change_v3_has_no_name() {
        let mut body = ProtocolBody::new();
        write_event(
            &mut body,
            &schema(SchemaChangeTarget::Keyspace, ""),
            ProtocolVersion::V3,
        )
        .unwrap();
        let mut expected = Vec::new();
        for field in ["SCHEMA_CHANGE", "CREATED", "KEYSPACE", "ks1"] {
            expected.extend((field.len() as u16).to_be_bytes());
            expected.extend(field.as_bytes());
        }
        assert_eq!(body.get_data(), &expected);
    }

    #[test]
    fn test_write_keyspace_change_v2_has_empty_name() {
        let mut body = ProtocolBody::new();
        write_event(
            &mut body,
            &schema(SchemaChangeTarget::Keyspace, ""),
            ProtocolVersion::V2,
        )
        .unwrap();
        assert_eq!(body.get_data()[body.get_length() - 2..], [0x00, 0x00]);
    }

    #[test]
    fn test_write_type_change_legacy_fails() {
        let mut body = ProtocolBody::new();
        let res = write_event(
            &mut body,
            &schema(SchemaChangeTarget::Type, "addr_t"),
            ProtocolVersion::V1,
        );
        assert_eq!(res.unwrap_err().get().0, 405);
        assert_eq!(body.get_length(), 0);
    }

    #[test]
    fn test_write_schema_change_unsupported_version() {
        let mut body = ProtocolBody::new();
        let res = write_event(
            &mut body,
            &schema(SchemaChangeTarget::Table, "flights"),
            ProtocolVersion::V4,
        );
        assert_eq!(res, Err(ProtocolVersion::V4.unsupported()));
        assert_eq!(body.get_length(), 0);
    }

    #[test]
    fn test_write_name_too_long_leaves_body_untouched() {
        let mut body = ProtocolBody::new();
        body.write_byte(0x2A);
        let long_name = "n".repeat(70_000);
        let res = write_event(
            &mut body,
            &schema(SchemaChangeTarget::Table, &long_name),
            ProtocolVersion::V3,
        );
        assert_eq!(res.unwrap_err().get().0, 100);
        assert_eq!(body.get_data(), &vec![0x2A]);
    }

    #[test]
    fn test_write_appends_after_existing_bytes() {
        let mut body = ProtocolBody::new();
        body.write_byte(0x2A);
        write_event(
            &mut body,
            &schema(SchemaChangeTarget::Table, "flights"),
            ProtocolVersion::V3,
        )
        .unwrap();
        assert_eq!(body.get_data()[0], 0x2A);
        assert_eq!(body.get_data()[1..3], [0x00, 0x0D]);
    }
}
