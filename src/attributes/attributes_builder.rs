use super::{AttributesError, UAttributes, UMessageType, UPriority};
use crate::uuid::Uuid;

/// Assembles a validated `UAttributes`.
#[derive(Debug, Clone)]
pub struct UAttributesBuilder {
    id: Uuid,
    message_type: UMessageType,
    priority: UPriority,
    ttl_ms: Option<u32>,
}

impl UAttributesBuilder {
    pub fn new(id: Uuid, message_type: UMessageType, priority: UPriority) -> Self {
        Self {
            id,
            message_type,
            priority,
            ttl_ms: None,
        }
    }

    pub fn with_priority(mut self, priority: UPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_ttl(mut self, ttl_ms: u32) -> Self {
        self.ttl_ms = Some(ttl_ms);
        self
    }

    pub fn with_optional_ttl(mut self, ttl_ms: Option<u32>) -> Self {
        self.ttl_ms = ttl_ms;
        self
    }

    pub fn build(self) -> Result<UAttributes, AttributesError> {
        if self.ttl_ms == Some(0) {
            return Err(AttributesError::InvalidTtl);
        }

        Ok(UAttributes {
            id: self.id,
            message_type: self.message_type,
            priority: self.priority,
            ttl_ms: self.ttl_ms,
        })
    }
}
