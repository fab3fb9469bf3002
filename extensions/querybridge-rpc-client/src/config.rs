use crate::constants::{
    DEFAULT_COLLECTOR_GRACE, DEFAULT_MAX_CONCURRENT_REQUESTS, DEFAULT_QUEUE_SIZE,
    DEFAULT_REQUEST_TIMEOUT,
};
use std::time::Duration;

/// Settings applied when the bridge builds its session resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcClientConfig {
    /// Transport timeout for calls without a time-to-live.
    pub request_timeout: Duration,
    /// Pending reply collectors the worker pool accepts.
    pub queue_size: usize,
    /// Workers draining reply channels concurrently.
    pub max_concurrent_requests: usize,
    /// Slack added to the transport timeout before a collector stops waiting.
    pub collector_grace: Duration,
}

impl Default for RpcClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            queue_size: DEFAULT_QUEUE_SIZE,
            max_concurrent_requests: DEFAULT_MAX_CONCURRENT_REQUESTS,
            collector_grace: DEFAULT_COLLECTOR_GRACE,
        }
    }
}

impl RpcClientConfig {
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_queue_size(mut self, queue_size: usize) -> Self {
        self.queue_size = queue_size;
        self
    }

    pub fn with_max_concurrent_requests(mut self, max_concurrent_requests: usize) -> Self {
        self.max_concurrent_requests = max_concurrent_requests;
        self
    }

    pub fn with_collector_grace(mut self, grace: Duration) -> Self {
        self.collector_grace = grace;
        self
    }
}
