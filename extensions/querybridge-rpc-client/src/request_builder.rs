use crate::{CallOptions, RpcClientError};
use bytes::Bytes;
use querybridge::attributes::UAttributes;
use querybridge::uri::UUri;
use querybridge::utils::subject_for;
use std::time::Duration;

/// Everything the dispatcher needs to publish one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// Correlation key: decimal hash of the resource's canonical form.
    pub subject: String,
    pub attributes: UAttributes,
    pub serialized_attributes: Bytes,
    /// Transport timeout: the call's time-to-live, or the configured default.
    pub timeout: Duration,
}

/// Turns a resource and call options into a [`PreparedRequest`].
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder {
    default_timeout: Duration,
}

impl RequestBuilder {
    pub fn new(default_timeout: Duration) -> Self {
        Self { default_timeout }
    }

    pub fn build(
        &self,
        resource: &UUri,
        options: &CallOptions,
    ) -> Result<PreparedRequest, RpcClientError> {
        // Sub-millisecond remainders round up so a non-zero ttl never becomes zero.
        let ttl_ms = options
            .ttl()
            .map(|ttl| {
                u32::try_from(ttl.as_nanos().div_ceil(1_000_000))
                    .map_err(|_| RpcClientError::TtlOutOfRange(ttl))
            })
            .transpose()?;

        let attributes = UAttributes::request(options.priority())
            .with_optional_ttl(ttl_ms)
            .build()?;

        let timeout = attributes.ttl().unwrap_or(self.default_timeout);

        Ok(PreparedRequest {
            subject: subject_for(resource),
            serialized_attributes: Bytes::from(attributes.encode()),
            attributes,
            timeout,
        })
    }
}
