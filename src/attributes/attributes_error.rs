use std::fmt;

/// Errors raised while building, encoding or decoding `UAttributes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributesError {
    /// The bytes could not be decoded into the attribute layout.
    Decode(String),
    /// The encoded message type is not a known `UMessageType`.
    InvalidMessageType(u8),
    /// The encoded priority is not a known `UPriority`.
    InvalidPriority(u8),
    /// A time-to-live of zero never lets a reply arrive.
    InvalidTtl,
}

impl fmt::Display for AttributesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributesError::Decode(msg) => write!(f, "Attribute decode error: {}", msg),
            AttributesError::InvalidMessageType(v) => write!(f, "Invalid message type: {}", v),
            AttributesError::InvalidPriority(v) => write!(f, "Invalid priority: {}", v),
            AttributesError::InvalidTtl => write!(f, "Time-to-live must be greater than zero"),
        }
    }
}

impl std::error::Error for AttributesError {}
