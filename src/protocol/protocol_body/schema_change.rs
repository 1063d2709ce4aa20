use crate::errors::error_types::ErrorTypes;
use crate::protocol::protocol_notations::enum_value::enum_value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the different types of schema changes that can occur during execution.
///
/// This enum categorizes the types of changes that can be made to the database schema.
/// It is used to indicate the nature of the schema modification in a schema change event.
///
/// ### Variants:
/// - **Created**: Represents the creation of a new schema object (e.g., keyspace, table, type).
/// - **Updated**: Represents an update to an existing schema object.
/// - **Dropped**: Represents the removal of an existing schema object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaChangeType {
    Created,
    Updated,
    Dropped,
}

enum_value!(SchemaChangeType {
    Created => "CREATED",
    Updated => "UPDATED",
    Dropped => "DROPPED",
});

/// Represents the kind of schema object affected by a schema change.
///
/// ### Variants:
/// - **Keyspace**: The keyspace itself changed; the event has no object name.
/// - **Table**: A table of the keyspace changed.
/// - **Type**: A user defined type of the keyspace changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchemaChangeTarget {
    Keyspace,
    Table,
    Type,
}

enum_value!(SchemaChangeTarget {
    Keyspace => "KEYSPACE",
    Table => "TABLE",
    Type => "TYPE",
});

/// A `SCHEMA_CHANGE` event.
///
/// Built only through `new` or `from_legacy`, so every value satisfies:
/// - `keyspace` is not empty.
/// - `name` is empty exactly when `target` is `SchemaChangeTarget::Keyspace`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSchemaChangeEvent")]
pub struct SchemaChangeEvent {
    change: SchemaChangeType,
    target: SchemaChangeTarget,
    keyspace: String,
    name: String,
}

impl SchemaChangeEvent {
    /// Creates a schema change event, checking the target against the object name.
    ///
    /// # Errors:
    /// - `402` if `keyspace` is empty.
    /// - `403` if a keyspace target carries a name.
    /// - `404` if a table or type target has no name.
    pub fn new(
        change: SchemaChangeType,
        target: SchemaChangeTarget,
        keyspace: String,
        name: String,
    ) -> Result<SchemaChangeEvent, ErrorTypes> {
        if keyspace.is_empty() {
            return Err(ErrorTypes::new(
                402,
                "Schema change without keyspace".to_string(),
            ));
        }
        match target {
            SchemaChangeTarget::Keyspace if !name.is_empty() => {
                return Err(ErrorTypes::new(
                    403,
                    format!("Keyspace schema change with object name {}", name),
                ))
            }
            SchemaChangeTarget::Table | SchemaChangeTarget::Type if name.is_empty() => {
                return Err(ErrorTypes::new(
                    404,
                    format!("{} schema change without object name", target),
                ))
            }
            _ => {}
        }
        Ok(SchemaChangeEvent {
            change,
            target,
            keyspace,
            name,
        })
    }

    /// Creates a schema change event from the v1/v2 fields, where the target is implied by
    /// the name: an empty name is a keyspace change, anything else a table change.
    ///
    /// Type targets cannot be expressed by those versions.
    pub fn from_legacy(
        change: SchemaChangeType,
        keyspace: String,
        name: String,
    ) -> Result<SchemaChangeEvent, ErrorTypes> {
        let target = if name.is_empty() {
            SchemaChangeTarget::Keyspace
        } else {
            SchemaChangeTarget::Table
        };
        Self::new(change, target, keyspace, name)
    }

    pub fn get_change(&self) -> SchemaChangeType {
        self.change
    }

    pub fn get_target(&self) -> SchemaChangeTarget {
        self.target
    }

    pub fn get_keyspace(&self) -> &str {
        &self.keyspace
    }

    /// Name of the table or type. Empty for keyspace changes.
    pub fn get_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for SchemaChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.change, self.target, self.keyspace)?;
        if !self.name.is_empty() {
            write!(f, ".{}", self.name)?;
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct RawSchemaChangeEvent {
    change: SchemaChangeType,
    target: SchemaChangeTarget,
    keyspace: String,
    name: String,
}

impl TryFrom<RawSchemaChangeEvent> for SchemaChangeEvent {
    type Error = ErrorTypes;

    fn try_from(raw: RawSchemaChangeEvent) -> Result<Self, Self::Error> {
        SchemaChangeEvent::new(raw.change, raw.target, raw.keyspace, raw.name)
    }
}
