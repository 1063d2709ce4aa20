use crate::errors::error_types::ErrorTypes;
use crate::protocol::protocol_notations::enum_value::EnumValue;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

/// This function receives an array of bytes and decode it to an i32.
pub fn read_int(bytes: &mut Vec<u8>) -> Result<i32, ErrorTypes> {
    if bytes.len() < 4 {
        return Err(ErrorTypes::new(300, "Int is too short".to_string()));
    }
    let mut result = 0;
    for item in bytes.iter().take(4) {
        result = result << 8 | *item as i32;
    }
    bytes.drain(0..4);
    Ok(result)
}

/// This function receives an array of bytes and decode it to an u8.
pub fn read_byte(bytes: &mut Vec<u8>) -> Result<u8, ErrorTypes> {
    if bytes.is_empty() {
        return Err(ErrorTypes::new(302, "Byte is too short".to_string()));
    }
    let result = bytes[0];
    bytes.drain(0..1);
    Ok(result)
}

/// This function receives an array of bytes and decode it to an u16.
pub fn read_short(bytes: &mut Vec<u8>) -> Result<u16, ErrorTypes> {
    if bytes.len() < 2 {
        return Err(ErrorTypes::new(303, "Short type is too short".to_string()));
    }
    let mut result = 0;
    for item in bytes.iter().take(2) {
        result = result << 8 | *item as u16;
    }
    bytes.drain(0..2);
    Ok(result)
}

/// This function receives an array of bytes and decode it to a String.
///
/// Nothing is consumed when the declared length exceeds the remaining bytes, apart from
/// the length itself.
pub fn read_string(bytes: &mut Vec<u8>) -> Result<String, ErrorTypes> {
    let length = read_short(bytes)? as usize;
    if bytes.len() < length {
        return Err(ErrorTypes::new(304, "String is too short".to_string()));
    }
    String::from_utf8(bytes.drain(0..length).collect())
        .map_err(|_| ErrorTypes::new(305, "String is not valid UTF-8".to_string()))
}

/// This function receives an array of bytes and decode it to an enumerated value sent by name.
pub fn read_enum_value<T: EnumValue>(bytes: &mut Vec<u8>) -> Result<T, ErrorTypes> {
    let name = read_string(bytes)?;
    T::from_name(&name).ok_or_else(|| {
        ErrorTypes::new(
            306,
            format!(
                "Invalid value {} for {}",
                name,
                std::any::type_name::<T>().rsplit("::").next().unwrap_or("enum")
            ),
        )
    })
}

/// This function receives an array of bytes and decode it to an inet.
pub fn read_inet(bytes: &mut Vec<u8>) -> Result<SocketAddr, ErrorTypes> {
    let addr = read_inetaddr(bytes)?;
    let port = read_int(bytes)?;
    let port = u16::try_from(port)
        .map_err(|_| ErrorTypes::new(307, format!("Invalid port {}", port)))?;
    Ok(SocketAddr::new(addr, port))
}

/// This function receives an array of bytes and decode it to an inet adrress.
pub fn read_inetaddr(bytes: &mut Vec<u8>) -> Result<IpAddr, ErrorTypes> {
    let length = read_byte(bytes)? as usize;
    if bytes.len() < length {
        return Err(ErrorTypes::new(
            308,
            "Inet address is too short".to_string(),
        ));
    }
    let result = match length {
        4 => {
            let mut octets = [0u8; 4];
            octets.copy_from_slice(&bytes[..4]);
            IpAddr::V4(Ipv4Addr::from(octets))
        }
        16 => {
            let mut octets = [0u8; 16];
            octets.copy_from_slice(&bytes[..16]);
            IpAddr::V6(Ipv6Addr::from(octets))
        }
        _ => {
            return Err(ErrorTypes::new(
                309,
                "Invalid length for inet address".to_string(),
            ))
        }
    };
    bytes.drain(0..length);
    Ok(result)
}
