use super::enum_value::EnumValue;
use crate::errors::error_types::ErrorTypes;
use std::net::{IpAddr, SocketAddr};

/// This struct implements the body itself. It is used to write the body of an Event message.
///
/// The `ProtocolBody` struct holds the payload of a message as a vector of bytes (`Vec<u8>`),
/// written field by field in the protocol notation. Framing the body is left to the caller.
///
/// ### Fields:
/// - `data`: A vector of bytes (`Vec<u8>`) that contains the body content.
#[derive(Debug)]
pub struct ProtocolBody {
    data: Vec<u8>,
}

impl Default for ProtocolBody {
    fn default() -> Self {
        Self::new()
    }
}

impl ProtocolBody {
    /// Creates a new instance of `ProtocolBody` with an empty data vector.
    pub fn new() -> ProtocolBody {
        ProtocolBody { data: Vec::new() }
    }

    /// Returns the number of bytes written so far.
    pub fn get_length(&self) -> usize {
        self.data.len()
    }

    /// Returns a reference to the `data` vector in the `ProtocolBody`.
    ///
    /// This function provides access to the internal `data` field without taking ownership
    /// or modifying it.
    pub fn get_data(&self) -> &Vec<u8> {
        &self.data
    }

    /// Writes an integer to the `data` field of the `ProtocolBody`.
    ///
    /// This function converts the given integer `value` into its big-endian byte representation
    /// and appends it to the `data` vector.
    pub fn write_int(&mut self, value: i32) {
        self.data.extend(&value.to_be_bytes())
    }

    /// Writes an 8-bit byte to the `data` field of the `ProtocolBody`.
    pub fn write_byte(&mut self, value: u8) {
        self.data.push(value)
    }

    /// Writes a 16-bit integer to the `data` field of the `ProtocolBody`.
    ///
    /// This function converts the given short integer `value` into its big-endian byte representation
    /// and appends it to the `data` vector.
    pub fn write_short(&mut self, value: u16) {
        self.data.extend(&value.to_be_bytes())
    }

    /// Writes a string to the `data` field of the `ProtocolBody`.
    ///
    /// This function writes a string `value` to the body, first writing its length as a short integer
    /// followed by the string's bytes. The maximum string length is `u16::MAX`.
    ///
    /// Returns an error if the string is too long.
    pub fn write_string(&mut self, value: &str) -> Result<(), ErrorTypes> {
        if value.len() > u16::MAX as usize {
            return Err(ErrorTypes::new(100, "String is too long".to_string()));
        }
        self.write_short(value.len() as u16);
        self.data.extend(value.as_bytes());
        Ok(())
    }

    /// Writes an enumerated value as the string holding its name.
    pub fn write_enum_value<T: EnumValue>(&mut self, value: &T) -> Result<(), ErrorTypes> {
        self.write_string(value.name())
    }

    /// Writes an inet to body.
    pub fn write_inet(&mut self, address: SocketAddr) {
        self.write_inetaddr(address.ip());
        self.write_int(address.port() as i32);
    }

    /// Writes an inet address to body: its length (4 or 16) followed by the octets.
    pub fn write_inetaddr(&mut self, address: IpAddr) {
        match address {
            IpAddr::V4(ip) => {
                self.data.push(4);
                self.data.extend(ip.octets());
            }
            IpAddr::V6(ip) => {
                self.data.push(16);
                self.data.extend(ip.octets());
            }
        }
    }

    /// Moves the bytes of `other` to the end of this body.
    pub fn append(&mut self, mut other: ProtocolBody) {
        self.data.append(&mut other.data);
    }

    /// Returns the binary data of the body.
    pub fn get_binary(&self) -> Vec<u8> {
        self.data.clone()
    }

    /// Consumes the body and returns its bytes.
    pub fn into_binary(self) -> Vec<u8> {
        self.data
    }
}
