use querybridge::attributes::AttributesError;
use querybridge::transport::TransportError;
use std::fmt;
use std::time::Duration;

/// Errors reported by lifecycle transitions of the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcBridgeError {
    /// The session or the worker pool could not be brought up or torn down.
    Unavailable(String),
}

impl fmt::Display for RpcBridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcBridgeError::Unavailable(msg) => write!(f, "RPC bridge unavailable: {}", msg),
        }
    }
}

impl std::error::Error for RpcBridgeError {}

impl From<TransportError> for RpcBridgeError {
    fn from(e: TransportError) -> Self {
        RpcBridgeError::Unavailable(e.to_string())
    }
}

impl From<WorkerPoolError> for RpcBridgeError {
    fn from(e: WorkerPoolError) -> Self {
        RpcBridgeError::Unavailable(e.to_string())
    }
}

/// Errors raised while preparing a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcClientError {
    Attributes(AttributesError),
    /// The time-to-live does not fit the millisecond field of the attributes.
    TtlOutOfRange(Duration),
}

impl fmt::Display for RpcClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcClientError::Attributes(e) => write!(f, "Invalid request attributes: {}", e),
            RpcClientError::TtlOutOfRange(ttl) => write!(f, "Time-to-live out of range: {:?}", ttl),
        }
    }
}

impl std::error::Error for RpcClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RpcClientError::Attributes(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AttributesError> for RpcClientError {
    fn from(e: AttributesError) -> Self {
        RpcClientError::Attributes(e)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerPoolError {
    /// Queue size or worker count was zero.
    InvalidConfig,
    /// The pool was created outside of a Tokio runtime.
    NoRuntime,
    /// The queue is full.
    Saturated,
    /// The workers are gone.
    ShutDown,
}

impl fmt::Display for WorkerPoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerPoolError::InvalidConfig => write!(f, "Worker pool needs a queue and at least one worker"),
            WorkerPoolError::NoRuntime => write!(f, "No Tokio runtime available for the worker pool"),
            WorkerPoolError::Saturated => write!(f, "Worker pool queue is full"),
            WorkerPoolError::ShutDown => write!(f, "Worker pool is shut down"),
        }
    }
}

impl std::error::Error for WorkerPoolError {}
