use super::Attachment;
use bytes::Bytes;
use std::time::Duration;

/// One outbound one-shot query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Transport-level subject the query is routed on.
    pub subject: String,
    /// In-band caller payload. May be empty.
    pub payload: Bytes,
    /// Out-of-band entries, carrying the encoded request attributes.
    pub attachment: Attachment,
    /// How long the transport keeps the reply channel open.
    pub timeout: Duration,
}
