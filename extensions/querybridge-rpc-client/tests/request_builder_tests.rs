use querybridge::attributes::{AttributesError, UAttributes, UMessageType, UPriority};
use querybridge::uri::{UEntity, UResource, UUri};
use querybridge::utils::subject_for;
use querybridge_rpc_client::{CallOptions, RequestBuilder, RpcClientError};
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1_500);

fn resource() -> UUri {
    UUri::local(UEntity::new("body.access").with_version(1), UResource::rpc("UpdateDoor"))
}

#[test]
fn test_build_uses_ttl_as_timeout() {
    let options = CallOptions::new(UPriority::Cs5).with_ttl(Duration::from_millis(300));

    let prepared = RequestBuilder::new(DEFAULT_TIMEOUT)
        .build(&resource(), &options)
        .unwrap();

    assert_eq!(prepared.timeout, Duration::from_millis(300));
    assert_eq!(prepared.attributes.ttl_ms, Some(300));
    assert_eq!(prepared.attributes.priority, UPriority::Cs5);
    assert_eq!(prepared.attributes.message_type, UMessageType::Request);
}

#[test]
fn test_build_falls_back_to_default_timeout() {
    let prepared = RequestBuilder::new(DEFAULT_TIMEOUT)
        .build(&resource(), &CallOptions::new(UPriority::Cs4))
        .unwrap();

    assert_eq!(prepared.timeout, DEFAULT_TIMEOUT);
    assert_eq!(prepared.attributes.ttl_ms, None);
}

#[test]
fn test_build_serializes_attributes_and_hashes_subject() {
    let uri = resource();
    let prepared = RequestBuilder::new(DEFAULT_TIMEOUT)
        .build(&uri, &CallOptions::default())
        .unwrap();

    assert_eq!(prepared.subject, subject_for(&uri));
    assert_eq!(
        UAttributes::decode(&prepared.serialized_attributes).unwrap(),
        prepared.attributes
    );
}

#[test]
fn test_same_resource_same_subject_distinct_ids() {
    let builder = RequestBuilder::new(DEFAULT_TIMEOUT);
    let options = CallOptions::default();

    let first = builder.build(&resource(), &options).unwrap();
    let second = builder.build(&resource(), &options).unwrap();

    assert_eq!(first.subject, second.subject);
    assert_ne!(first.attributes.id, second.attributes.id);
}

#[test]
fn test_build_rejects_unusable_ttls() {
    let builder = RequestBuilder::new(DEFAULT_TIMEOUT);

    let zero = CallOptions::new(UPriority::Cs4).with_ttl(Duration::ZERO);
    assert_eq!(
        builder.build(&resource(), &zero),
        Err(RpcClientError::Attributes(AttributesError::InvalidTtl))
    );

    let huge_ttl = Duration::from_secs(u64::from(u32::MAX));
    let huge = CallOptions::new(UPriority::Cs4).with_ttl(huge_ttl);
    assert_eq!(
        builder.build(&resource(), &huge),
        Err(RpcClientError::TtlOutOfRange(huge_ttl))
    );
}

#[test]
fn test_sub_millisecond_ttl_rounds_up() {
    let builder = RequestBuilder::new(DEFAULT_TIMEOUT);

    let options = CallOptions::new(UPriority::Cs4).with_ttl(Duration::from_micros(500));
    let prepared = builder.build(&resource(), &options).unwrap();
    assert_eq!(prepared.attributes.ttl_ms, Some(1));
    assert_eq!(prepared.timeout, Duration::from_millis(1));

    let options = CallOptions::new(UPriority::Cs4).with_ttl(Duration::from_micros(1_999));
    let prepared = builder.build(&resource(), &options).unwrap();
    assert_eq!(prepared.attributes.ttl_ms, Some(2));
    assert_eq!(prepared.timeout, Duration::from_millis(2));
}
