use crate::rpc_bridge::BridgeInner;
use crate::{
    CallOptions, ReplyFuture, RequestBuilder, RpcBridgeError, RpcClientConfig, WorkerPool,
    collect_reply,
};
use bytes::Bytes;
use querybridge::constants::{ATTRIBUTES_ATTACHMENT_KEY, REPLY_CHANNEL_CAPACITY, RPC_PRIORITY_FLOOR};
use querybridge::message::RejectReason;
use querybridge::transport::{Attachment, Query, ReplyChannel, Session};
use querybridge::uri::UUri;
use std::sync::Arc;

/// The session and pool that exist while at least one `RpcClient` is alive.
pub(crate) struct BridgeResources {
    pub(crate) session: Arc<dyn Session>,
    pub(crate) pool: WorkerPool,
    pub(crate) config: RpcClientConfig,
}

/// A registered user of an [`RpcBridge`](crate::RpcBridge).
///
/// Holding an `RpcClient` keeps the shared session alive. Dropping it
/// releases the registration; [`RpcClient::release`] does the same but
/// reports teardown failures. Cloning registers another user.
pub struct RpcClient {
    bridge: Arc<BridgeInner>,
    resources: Arc<BridgeResources>,
    released: bool,
}

impl RpcClient {
    pub(crate) fn new(bridge: Arc<BridgeInner>, resources: Arc<BridgeResources>) -> Self {
        Self {
            bridge,
            resources,
            released: false,
        }
    }

    /// Invokes the RPC method at `resource`.
    ///
    /// Never blocks beyond publishing the query. The returned future resolves
    /// once a reply arrives, the call times out, or immediately if the call
    /// is rejected.
    pub fn invoke(
        &self,
        resource: &UUri,
        payload: impl Into<Bytes>,
        options: &CallOptions,
    ) -> ReplyFuture {
        if self.bridge.ref_count() == 0 {
            tracing::error!("RPC bridge is not initialized");
            return ReplyFuture::rejected(RejectReason::NotInitialized);
        }

        dispatch(&self.resources, resource, payload.into(), options)
    }

    /// Releases this registration, tearing the bridge down if it was the last.
    pub fn release(mut self) -> Result<(), RpcBridgeError> {
        self.released = true;
        self.bridge.release()
    }
}

impl Clone for RpcClient {
    fn clone(&self) -> Self {
        self.bridge.retain();
        Self::new(self.bridge.clone(), self.resources.clone())
    }
}

impl Drop for RpcClient {
    fn drop(&mut self) {
        if self.released {
            return;
        }

        if let Err(e) = self.bridge.release() {
            tracing::error!("Failed to release RPC bridge on drop: {}", e);
        }
    }
}

/// Publishes one request and hands its reply channel to the worker pool.
pub(crate) fn dispatch(
    resources: &BridgeResources,
    resource: &UUri,
    payload: Bytes,
    options: &CallOptions,
) -> ReplyFuture {
    if !resource.is_rpc_method() {
        tracing::error!("URI is not of RPC type: {}", resource);
        return ReplyFuture::rejected(RejectReason::NotRpcMethod);
    }

    if options.priority() < RPC_PRIORITY_FLOOR {
        tracing::error!(
            "Priority {:?} is below {:?}",
            options.priority(),
            RPC_PRIORITY_FLOOR
        );
        return ReplyFuture::rejected(RejectReason::PriorityTooLow);
    }

    let prepared = match RequestBuilder::new(resources.config.request_timeout).build(resource, options)
    {
        Ok(prepared) => prepared,
        Err(e) => {
            tracing::error!("Failed to prepare request for {}: {}", resource, e);
            return ReplyFuture::rejected(RejectReason::AttributesEncoding);
        }
    };

    let (replies, channel) = ReplyChannel::bounded(REPLY_CHANNEL_CAPACITY);

    let query = Query {
        subject: prepared.subject,
        payload,
        attachment: Attachment::new()
            .with(ATTRIBUTES_ATTACHMENT_KEY, prepared.serialized_attributes),
        timeout: prepared.timeout,
    };

    tracing::debug!(
        "Querying {} (subject {}, id {}, timeout {:?})",
        resource,
        query.subject,
        prepared.attributes.id,
        query.timeout
    );

    // `channel` is dropped, and therefore released, on every early return.
    if let Err(e) = resources.session.query(query, replies) {
        tracing::error!("Query submission failed: {}", e);
        return ReplyFuture::rejected(RejectReason::SubmissionFailed);
    }

    let deadline = prepared.timeout + resources.config.collector_grace;

    match resources.pool.submit(collect_reply(channel, deadline)) {
        Ok(handle) => ReplyFuture::pending(handle, prepared.attributes.id),
        Err(e) => {
            tracing::error!("Failed to schedule reply collection: {}", e);
            ReplyFuture::rejected(RejectReason::ExecutorUnavailable)
        }
    }
}
