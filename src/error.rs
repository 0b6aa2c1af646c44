//! Centralized error types
//!
//! All errors are represented by the `UbxError` enum.
//! Use `Result<T>` as shorthand for `std::result::Result<T, UbxError>`.
//!
//! Decode-path protocol failures (unknown message, bad variable length) are
//! recoverable: the stream synchronizer logs them and keeps parsing.
//! Encode-path failures abort that one send and nothing is written.

use std::fmt;

/// All ubx-link errors
#[derive(Debug)]
pub enum UbxError {
    // === Codec ===
    /// Requested message name has no registry entry
    UnknownMessageName { name: String },
    /// Observed (class, id) pair has no registry entry
    UnknownMessageCode { class: u8, id: u8 },
    /// Identity is known but no layout matches the given payload length
    NoLayoutForLength { name: &'static str, length: u16 },
    /// Variable-length remainder is not divisible by the block size
    InvalidVariableLength { name: &'static str, length: u16 },
    /// Encode payload is missing a declared field
    MissingField {
        name: &'static str,
        field: &'static str,
    },
    /// Encode payload value does not fit the declared field width
    ValueOutOfRange { field: &'static str, value: i64 },
    /// Encode payload value has the wrong kind for the declared field type
    WrongValueKind { field: &'static str },

    // === Mask ===
    /// Bit name not present in the mask table
    InvalidMaskBit { bit: String },

    // === Transport ===
    /// Failed to open serial port
    SerialOpen {
        port: String,
        source: std::io::Error,
    },
    /// No device found matching configuration
    NoDeviceFound,
    /// Multiple devices found matching configuration
    MultipleDevicesFound { count: usize },
    /// Transport stopped before the operation completed
    Disconnected,

    // === Runtime ===
    /// Tokio runtime creation failed
    Runtime { source: std::io::Error },
}

impl std::error::Error for UbxError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SerialOpen { source, .. } | Self::Runtime { source } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for UbxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMessageName { name } => write!(f, "Unknown message name: {}", name),
            Self::UnknownMessageCode { class, id } => {
                write!(f, "Unknown message class 0x{:02x}, id 0x{:02x}", class, id)
            }
            Self::NoLayoutForLength { name, length } => {
                write!(f, "No layout for {} with length {}", name, length)
            }
            Self::InvalidVariableLength { name, length } => {
                write!(f, "Variable length message {} has wrong length {}", name, length)
            }
            Self::MissingField { name, field } => {
                write!(f, "Payload for {} is missing field {}", name, field)
            }
            Self::ValueOutOfRange { field, value } => {
                write!(f, "Value {} does not fit field {}", value, field)
            }
            Self::WrongValueKind { field } => {
                write!(f, "Wrong value kind for field {}", field)
            }
            Self::InvalidMaskBit { bit } => write!(f, "{} is not a valid mask bit", bit),
            Self::SerialOpen { port, .. } => write!(f, "Cannot open serial port: {}", port),
            Self::NoDeviceFound => write!(f, "No device found"),
            Self::MultipleDevicesFound { count } => {
                write!(f, "Multiple devices found ({})", count)
            }
            Self::Disconnected => write!(f, "Device disconnected"),
            Self::Runtime { .. } => write!(f, "Failed to create runtime"),
        }
    }
}

/// Alias for Result with UbxError
pub type Result<T> = std::result::Result<T, UbxError>;
