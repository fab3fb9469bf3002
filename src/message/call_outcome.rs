use std::fmt;

/// How an RPC call ended.
///
/// Only `Resolved` carries a payload and attributes. Every other outcome
/// yields an empty `UMessage`; the tag tells callers why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    /// A well-formed reply arrived.
    Resolved,
    /// The reply channel closed or the deadline passed without a reply.
    TimedOut,
    /// The call never reached the transport.
    Rejected(RejectReason),
    /// The transport delivered an explicit error reply.
    TransportError(String),
    /// A reply arrived but could not be turned into a result.
    Malformed(MalformedReason),
    /// The task waiting for the reply went away before finishing.
    Abandoned,
}

/// Why a call was refused before dispatch.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// No bridge user holds the session.
    NotInitialized,
    /// The resource does not name an RPC method.
    NotRpcMethod,
    /// The call priority is below the RPC floor.
    PriorityTooLow,
    /// The request attributes could not be built or encoded.
    AttributesEncoding,
    /// The transport refused the query.
    SubmissionFailed,
    /// The worker pool is full or shut down.
    ExecutorUnavailable,
}

/// Why a delivered reply was discarded.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    EmptyPayload,
    MissingAttachment,
    MissingAttributes,
    InvalidAttributes,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RejectReason::NotInitialized => "bridge is not initialized",
            RejectReason::NotRpcMethod => "resource is not an RPC method",
            RejectReason::PriorityTooLow => "priority is below the RPC floor",
            RejectReason::AttributesEncoding => "request attributes could not be encoded",
            RejectReason::SubmissionFailed => "transport refused the query",
            RejectReason::ExecutorUnavailable => "worker pool is unavailable",
        };
        f.write_str(text)
    }
}

impl fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MalformedReason::EmptyPayload => "payload is empty",
            MalformedReason::MissingAttachment => "no attachment found in the reply",
            MalformedReason::MissingAttributes => "attributes not found in the attachment",
            MalformedReason::InvalidAttributes => "attributes could not be decoded",
        };
        f.write_str(text)
    }
}

impl fmt::Display for CallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallOutcome::Resolved => write!(f, "resolved"),
            CallOutcome::TimedOut => write!(f, "timed out"),
            CallOutcome::Rejected(reason) => write!(f, "rejected: {}", reason),
            CallOutcome::TransportError(msg) => write!(f, "transport error: {}", msg),
            CallOutcome::Malformed(reason) => write!(f, "malformed reply: {}", reason),
            CallOutcome::Abandoned => write!(f, "abandoned"),
        }
    }
}
