use super::Attachment;
use bytes::Bytes;

/// A successful reply as delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    pub payload: Bytes,
    pub attachment: Option<Attachment>,
}

impl Sample {
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self {
            payload: payload.into(),
            attachment: None,
        }
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachment = Some(attachment);
        self
    }
}

/// One entry on a reply channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Ok(Sample),
    /// The transport signalled an error for this query.
    Err(String),
}
