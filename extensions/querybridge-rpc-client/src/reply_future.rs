use crate::TaskHandle;
use querybridge::message::{CallOutcome, RejectReason, UMessage};
use querybridge::uuid::Uuid;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

enum ReplyState {
    Ready(Option<UMessage>),
    Pending(TaskHandle<UMessage>),
}

/// The caller's handle to one RPC call.
///
/// Resolves exactly once to the call's `UMessage`. Rejected calls resolve
/// immediately to an empty message tagged with the rejection reason.
pub struct ReplyFuture {
    state: ReplyState,
    request_id: Option<Uuid>,
}

impl ReplyFuture {
    pub(crate) fn pending(handle: TaskHandle<UMessage>, request_id: Uuid) -> Self {
        Self {
            state: ReplyState::Pending(handle),
            request_id: Some(request_id),
        }
    }

    pub(crate) fn rejected(reason: RejectReason) -> Self {
        Self {
            state: ReplyState::Ready(Some(UMessage::empty(CallOutcome::Rejected(reason)))),
            request_id: None,
        }
    }

    /// The id placed in the request attributes, if the call was dispatched.
    pub fn request_id(&self) -> Option<Uuid> {
        self.request_id
    }

    /// Whether the call was refused before reaching the transport.
    pub fn is_rejected(&self) -> bool {
        matches!(
            &self.state,
            ReplyState::Ready(Some(message)) if matches!(message.outcome(), CallOutcome::Rejected(_))
        )
    }

    /// Blocks the current thread until the call resolves.
    ///
    /// Must not be called from within an async context driving the same
    /// runtime's only worker thread.
    pub fn wait(self) -> UMessage {
        futures::executor::block_on(self)
    }
}

impl Future for ReplyFuture {
    type Output = UMessage;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.state {
            ReplyState::Ready(message) => Poll::Ready(
                message
                    .take()
                    .unwrap_or_else(|| UMessage::empty(CallOutcome::Abandoned)),
            ),
            ReplyState::Pending(handle) => match Pin::new(handle).poll(cx) {
                Poll::Ready(Ok(message)) => Poll::Ready(message),
                Poll::Ready(Err(_)) => {
                    tracing::warn!("Reply task dropped before completion");
                    Poll::Ready(UMessage::empty(CallOutcome::Abandoned))
                }
                Poll::Pending => Poll::Pending,
            },
        }
    }
}
