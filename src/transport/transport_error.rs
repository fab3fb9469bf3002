use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The session could not be opened or closed.
    Unavailable(String),
    /// The transport refused to publish a query.
    QueryRejected(String),
    /// The reply channel was released by its consumer.
    ChannelClosed,
    /// The reply channel buffer is full.
    ChannelFull,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Unavailable(msg) => write!(f, "Transport unavailable: {}", msg),
            TransportError::QueryRejected(msg) => write!(f, "Query rejected: {}", msg),
            TransportError::ChannelClosed => write!(f, "Reply channel closed"),
            TransportError::ChannelFull => write!(f, "Reply channel full"),
        }
    }
}

impl std::error::Error for TransportError {}
