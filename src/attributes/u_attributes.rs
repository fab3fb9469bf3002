use super::{AttributesError, UAttributesBuilder, UMessageType, UPriority};
use crate::uuid::Uuid;
use std::time::Duration;

/// The envelope carried out-of-band next to every RPC payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UAttributes {
    /// Unique id of the message this envelope belongs to.
    pub id: Uuid,
    pub message_type: UMessageType,
    pub priority: UPriority,
    /// Time-to-live in milliseconds. `None` means the transport default applies.
    pub ttl_ms: Option<u32>,
}

/// Wire layout. Enumerations travel as their `u8` values so that decoding can
/// reject unknown variants explicitly.
#[derive(bitcode::Encode, bitcode::Decode)]
struct AttributesWire {
    id_msb: u64,
    id_lsb: u64,
    message_type: u8,
    priority: u8,
    ttl_ms: Option<u32>,
}

impl UAttributes {
    pub fn builder(id: Uuid, message_type: UMessageType, priority: UPriority) -> UAttributesBuilder {
        UAttributesBuilder::new(id, message_type, priority)
    }

    /// A request envelope with a fresh id.
    pub fn request(priority: UPriority) -> UAttributesBuilder {
        UAttributesBuilder::new(Uuid::generate(), UMessageType::Request, priority)
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl_ms.map(|ms| Duration::from_millis(u64::from(ms)))
    }

    pub fn encode(&self) -> Vec<u8> {
        bitcode::encode(&AttributesWire {
            id_msb: self.id.msb(),
            id_lsb: self.id.lsb(),
            message_type: self.message_type.into(),
            priority: self.priority.into(),
            ttl_ms: self.ttl_ms,
        })
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, AttributesError> {
        let wire: AttributesWire =
            bitcode::decode(bytes).map_err(|e| AttributesError::Decode(e.to_string()))?;

        let message_type = UMessageType::try_from(wire.message_type)
            .map_err(|_| AttributesError::InvalidMessageType(wire.message_type))?;

        let priority = UPriority::try_from(wire.priority)
            .map_err(|_| AttributesError::InvalidPriority(wire.priority))?;

        UAttributesBuilder::new(Uuid::from_parts(wire.id_msb, wire.id_lsb), message_type, priority)
            .with_optional_ttl(wire.ttl_ms)
            .build()
    }
}
