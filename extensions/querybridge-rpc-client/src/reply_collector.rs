use querybridge::attributes::UAttributes;
use querybridge::constants::ATTRIBUTES_ATTACHMENT_KEY;
use querybridge::message::{CallOutcome, MalformedReason, UMessage, UPayload};
use querybridge::transport::{Reply, ReplyChannel};
use std::time::Duration;

/// Waits for the reply to one call and decodes it.
///
/// The first entry on the channel decides the outcome. If the channel closes
/// or `deadline` passes before any entry arrives, the call timed out. The
/// channel is released before this returns, whatever the outcome.
pub async fn collect_reply(mut channel: ReplyChannel, deadline: Duration) -> UMessage {
    let message = match tokio::time::timeout(deadline, channel.recv()).await {
        Ok(Some(reply)) => decode_reply(reply),
        Ok(None) => {
            tracing::debug!("Reply channel closed without a reply");
            UMessage::empty(CallOutcome::TimedOut)
        }
        Err(_) => {
            tracing::warn!("No reply within {:?}", deadline);
            UMessage::empty(CallOutcome::TimedOut)
        }
    };

    channel.close();

    message
}

/// Turns a single reply entry into a `UMessage`.
///
/// Malformed replies and transport errors never escalate; they produce an
/// empty message whose outcome records what went wrong.
pub fn decode_reply(reply: Reply) -> UMessage {
    let sample = match reply {
        Reply::Ok(sample) => sample,
        Reply::Err(description) => {
            tracing::error!("Error received: {}", description);
            return UMessage::empty(CallOutcome::TransportError(description));
        }
    };

    let malformed = |reason: MalformedReason| {
        tracing::error!("Discarding reply: {}", reason);
        UMessage::empty(CallOutcome::Malformed(reason))
    };

    if sample.payload.is_empty() {
        return malformed(MalformedReason::EmptyPayload);
    }

    let Some(attachment) = sample.attachment else {
        return malformed(MalformedReason::MissingAttachment);
    };

    let serialized = match attachment.get(ATTRIBUTES_ATTACHMENT_KEY) {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => return malformed(MalformedReason::MissingAttributes),
    };

    let attributes = match UAttributes::decode(serialized) {
        Ok(attributes) => attributes,
        Err(err) => {
            tracing::debug!("Attribute decode failure: {}", err);
            return malformed(MalformedReason::InvalidAttributes);
        }
    };

    UMessage::resolved(UPayload::value(sample.payload), attributes)
}
