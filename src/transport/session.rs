use super::{Query, ReplySender, TransportError};
use std::sync::Arc;

/// A live connection to the publish-subscribe fabric.
///
/// Sessions are shared read-only by every in-flight call.
pub trait Session: Send + Sync {
    /// Issues a one-shot query.
    ///
    /// Replies are pushed into `replies`; the transport must drop the sender
    /// once `query.timeout` expires or the final reply has been delivered.
    /// Returning an error means the query was never published.
    fn query(&self, query: Query, replies: ReplySender) -> Result<(), TransportError>;
}

/// Opens and closes the process-wide session used by the RPC bridge.
pub trait SessionProvider: Send + Sync {
    fn open(&self) -> Result<Arc<dyn Session>, TransportError>;

    fn close(&self) -> Result<(), TransportError>;
}
