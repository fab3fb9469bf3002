use bytes::Bytes;
use querybridge::attributes::{UAttributes, UMessageType, UPriority};
use querybridge::constants::{ATTRIBUTES_ATTACHMENT_KEY, REPLY_CHANNEL_CAPACITY};
use querybridge::message::{CallOutcome, MalformedReason, UPayloadFormat};
use querybridge::transport::{Attachment, Reply, ReplyChannel, Sample, TransportError};
use querybridge::uuid::Uuid;
use querybridge_rpc_client::{collect_reply, decode_reply};
use std::time::Duration;

fn response_attributes() -> UAttributes {
    UAttributes::builder(Uuid::generate(), UMessageType::Response, UPriority::Cs4)
        .build()
        .unwrap()
}

fn attributes_attachment(value: impl Into<Bytes>) -> Attachment {
    Attachment::new().with(ATTRIBUTES_ATTACHMENT_KEY, value)
}

#[test]
fn test_decode_valid_reply() {
    let attributes = response_attributes();
    let reply = Reply::Ok(
        Sample::new(vec![0x01u8, 0x02]).with_attachment(attributes_attachment(attributes.encode())),
    );

    let message = decode_reply(reply);

    assert_eq!(message.outcome(), &CallOutcome::Resolved);
    assert_eq!(message.attributes(), Some(&attributes));
    let payload = message.payload().unwrap();
    assert_eq!(payload.data().as_ref(), &[0x01, 0x02]);
    assert_eq!(payload.format(), UPayloadFormat::Value);
}

#[test]
fn test_decode_malformed_replies() {
    let valid = response_attributes().encode();

    let cases = vec![
        (
            Reply::Ok(Sample::new(Bytes::new()).with_attachment(attributes_attachment(valid.clone()))),
            MalformedReason::EmptyPayload,
        ),
        (
            Reply::Ok(Sample::new(vec![0x01u8])),
            MalformedReason::MissingAttachment,
        ),
        (
            Reply::Ok(Sample::new(vec![0x01u8]).with_attachment(
                Attachment::new().with("unrelated", valid.clone()),
            )),
            MalformedReason::MissingAttributes,
        ),
        (
            Reply::Ok(Sample::new(vec![0x01u8]).with_attachment(attributes_attachment(Bytes::new()))),
            MalformedReason::MissingAttributes,
        ),
        (
            Reply::Ok(Sample::new(vec![0x01u8]).with_attachment(attributes_attachment(
                [valid.as_slice(), &[0xFF, 0xFF]].concat(),
            ))),
            MalformedReason::InvalidAttributes,
        ),
    ];

    for (reply, reason) in cases {
        let message = decode_reply(reply);
        assert!(message.is_empty(), "expected empty message for {:?}", reason);
        assert_eq!(message.outcome(), &CallOutcome::Malformed(reason));
    }
}

#[test]
fn test_decode_transport_error() {
    let message = decode_reply(Reply::Err("unreachable".to_string()));

    assert!(message.is_empty());
    assert_eq!(
        message.outcome(),
        &CallOutcome::TransportError("unreachable".to_string())
    );
}

#[tokio::test]
async fn test_first_reply_decides_and_channel_is_released() {
    let (sender, channel) = ReplyChannel::bounded(REPLY_CHANNEL_CAPACITY);
    let attributes = response_attributes();

    sender
        .try_send(Reply::Ok(Sample::new(vec![0x01u8]).with_attachment(attributes_attachment(
            attributes.encode(),
        ))))
        .unwrap();
    sender
        .try_send(Reply::Err("second reply".to_string()))
        .unwrap();

    let message = collect_reply(channel, Duration::from_secs(1)).await;

    assert_eq!(message.outcome(), &CallOutcome::Resolved);
    assert_eq!(message.attributes(), Some(&attributes));
    assert!(sender.is_closed());
}

#[tokio::test]
async fn test_malformed_reply_still_releases_channel() {
    let (sender, channel) = ReplyChannel::bounded(REPLY_CHANNEL_CAPACITY);

    sender
        .try_send(Reply::Ok(Sample::new(vec![0x01u8])))
        .unwrap();

    let message = collect_reply(channel, Duration::from_secs(1)).await;

    assert_eq!(
        message.outcome(),
        &CallOutcome::Malformed(MalformedReason::MissingAttachment)
    );
    assert_eq!(
        sender.try_send(Reply::Err("late".to_string())),
        Err(TransportError::ChannelClosed)
    );
}

#[tokio::test]
async fn test_deadline_without_reply_times_out() {
    let (sender, channel) = ReplyChannel::bounded(REPLY_CHANNEL_CAPACITY);

    let message = collect_reply(channel, Duration::from_millis(30)).await;

    assert!(message.is_empty());
    assert_eq!(message.outcome(), &CallOutcome::TimedOut);
    assert!(sender.is_closed());
}

#[tokio::test]
async fn test_exhausted_channel_times_out() {
    let (sender, channel) = ReplyChannel::bounded(REPLY_CHANNEL_CAPACITY);
    drop(sender);

    let message = collect_reply(channel, Duration::from_secs(5)).await;

    assert_eq!(message.outcome(), &CallOutcome::TimedOut);
}
