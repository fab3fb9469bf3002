use bytes::Bytes;

/// How the payload bytes should be interpreted.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum UPayloadFormat {
    /// The bytes are the value itself.
    Value,
    /// The bytes reference a value stored elsewhere.
    Reference,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UPayload {
    data: Bytes,
    format: UPayloadFormat,
}

impl UPayload {
    pub fn new(data: impl Into<Bytes>, format: UPayloadFormat) -> Self {
        Self {
            data: data.into(),
            format,
        }
    }

    pub fn value(data: impl Into<Bytes>) -> Self {
        Self::new(data, UPayloadFormat::Value)
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn format(&self) -> UPayloadFormat {
        self.format
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_data(self) -> Bytes {
        self.data
    }
}
