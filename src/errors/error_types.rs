use crate::protocol::frames_headers::version::ProtocolVersion;

/// Enum representing the different types of errors that can occur while decoding events.
///
/// ### Error Codes:
/// - **100–199**: Errors in the `protocol_notations` module.
/// - **300–399**: Errors in the `receiver` module.
/// - **400–499**: Errors building events or resolving protocol versions.
///
/// Each coded error is represented by:
/// - `code` (`i32`): The unique error code.
/// - `message` (`String`): A detailed error message.
///
/// A schema event read under a protocol version with no known wire layout is reported
/// through `UnsupportedProtocolVersion`, which keeps the offending version.
#[derive(PartialEq, Clone)]
pub enum ErrorTypes {
    /// Represents an error with a specific code and message.
    Error { code: i32, message: String },
    /// The negotiated protocol version has no schema event layout.
    UnsupportedProtocolVersion { version: ProtocolVersion },
}

/// Code reported by `get` for `ErrorTypes::UnsupportedProtocolVersion`.
pub const UNSUPPORTED_VERSION_CODE: i32 = 400;

impl ErrorTypes {
    /// Creates a new `ErrorTypes::Error` instance.
    ///
    /// # Arguments:
    /// - `code`: The error code associated with this error.
    /// - `message`: A descriptive message explaining the error.
    ///
    /// # Returns:
    /// A new `ErrorTypes` instance.
    pub fn new(code: i32, message: String) -> Self {
        ErrorTypes::Error { code, message }
    }

    /// Retrieves the code and message of the error.
    ///
    /// # Returns:
    /// A tuple containing the error code (`i32`) and the error message (`String`).
    pub fn get(&self) -> (i32, String) {
        match self {
            ErrorTypes::Error { code, message } => (*code, message.clone()),
            ErrorTypes::UnsupportedProtocolVersion { version } => (
                UNSUPPORTED_VERSION_CODE,
                format!("Unsupported protocol version {}", version),
            ),
        }
    }
}

impl std::fmt::Debug for ErrorTypes {
    /// Formats the error information for debugging purposes.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (code, message) = self.get();
        write!(f, "An error has occured: {:?}, code: [{:?}]", message, code)
    }
}

impl std::fmt::Display for ErrorTypes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (code, message) = self.get();
        write!(f, "[{}] {}", code, message)
    }
}

impl std::error::Error for ErrorTypes {}
