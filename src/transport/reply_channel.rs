use super::{Reply, TransportError};
use tokio::sync::mpsc;

/// Producer half of a reply channel, handed to the transport.
///
/// Dropping every sender closes the channel, which is how a transport signals
/// that a query expired or that no further replies will follow.
#[derive(Debug, Clone)]
pub struct ReplySender {
    tx: mpsc::Sender<Reply>,
}

impl ReplySender {
    /// Delivers a reply, waiting for buffer space if the channel is full.
    pub async fn send(&self, reply: Reply) -> Result<(), TransportError> {
        self.tx
            .send(reply)
            .await
            .map_err(|_| TransportError::ChannelClosed)
    }

    /// Delivers a reply without waiting.
    pub fn try_send(&self, reply: Reply) -> Result<(), TransportError> {
        self.tx.try_send(reply).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => TransportError::ChannelFull,
            mpsc::error::TrySendError::Closed(_) => TransportError::ChannelClosed,
        })
    }

    /// Whether the consumer has released the channel.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Consumer half of a bounded, single-consumer reply channel.
///
/// The channel is owned by exactly one reply collector. It is released when
/// [`ReplyChannel::close`] is called or when the value is dropped, whichever
/// happens first; further closes are no-ops.
#[derive(Debug)]
pub struct ReplyChannel {
    rx: Option<mpsc::Receiver<Reply>>,
}

impl ReplyChannel {
    pub fn bounded(capacity: usize) -> (ReplySender, ReplyChannel) {
        let (tx, rx) = mpsc::channel(capacity);
        (ReplySender { tx }, ReplyChannel { rx: Some(rx) })
    }

    /// Waits for the next reply. Returns `None` once the channel is exhausted
    /// or released.
    pub async fn recv(&mut self) -> Option<Reply> {
        match self.rx.as_mut() {
            Some(rx) => rx.recv().await,
            None => None,
        }
    }

    pub fn close(&mut self) {
        if let Some(mut rx) = self.rx.take() {
            rx.close();
        }
    }

    pub fn is_released(&self) -> bool {
        self.rx.is_none()
    }
}

impl Drop for ReplyChannel {
    fn drop(&mut self) {
        self.close();
    }
}
