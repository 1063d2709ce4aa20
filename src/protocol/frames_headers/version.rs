use crate::errors::error_types::ErrorTypes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bit set on the header version byte of frames sent by the server.
const RESPONSE_BIT: u8 = 0x80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// Represents the native protocol versions a connection can negotiate.
///
/// The version decides the wire layout of some event bodies. It is never stored by the
/// decoder: the caller passes the negotiated version on every call.
///
/// ### Variants:
/// - **V1 (0x01)** and **V2 (0x02)**: legacy schema event layout.
/// - **V3 (0x03)**: schema events carry an explicit target.
/// - **V4 (0x04)** and **V5 (0x05)**: known versions whose schema events are not handled here.
pub enum ProtocolVersion {
    V1 = 0x01,
    V2 = 0x02,
    V3 = 0x03,
    V4 = 0x04,
    V5 = 0x05,
}

impl ProtocolVersion {
    /// Resolves the raw version number (without the direction bit).
    pub fn from_byte(byte: u8) -> Result<ProtocolVersion, ErrorTypes> {
        match byte {
            0x01 => Ok(ProtocolVersion::V1),
            0x02 => Ok(ProtocolVersion::V2),
            0x03 => Ok(ProtocolVersion::V3),
            0x04 => Ok(ProtocolVersion::V4),
            0x05 => Ok(ProtocolVersion::V5),
            _ => Err(ErrorTypes::new(
                401,
                format!("Unknown protocol version byte 0x{:02X}", byte),
            )),
        }
    }

    /// Resolves the version from the first byte of a frame header, in either direction.
    pub fn from_header_byte(byte: u8) -> Result<ProtocolVersion, ErrorTypes> {
        Self::from_byte(byte & !RESPONSE_BIT)
    }

    /// Header version byte for a frame sent by the client.
    pub fn request_byte(&self) -> u8 {
        *self as u8
    }

    /// Header version byte for a frame sent by the server.
    pub fn response_byte(&self) -> u8 {
        *self as u8 | RESPONSE_BIT
    }

    /// Builds the error reported when this version has no layout for a message.
    pub fn unsupported(&self) -> ErrorTypes {
        ErrorTypes::UnsupportedProtocolVersion { version: *self }
    }
}

impl TryFrom<u8> for ProtocolVersion {
    type Error = ErrorTypes;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        ProtocolVersion::from_byte(byte)
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", *self as u8)
    }
}
