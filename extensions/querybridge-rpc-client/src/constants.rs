use std::time::Duration;

/// The transport timeout used when a call carries no time-to-live.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(5_000);

/// How many reply collectors may wait in the worker pool queue before new
/// calls are rejected.
pub const DEFAULT_QUEUE_SIZE: usize = 20;

/// The number of workers draining reply channels concurrently.
pub const DEFAULT_MAX_CONCURRENT_REQUESTS: usize = 2;

/// Extra time a collector waits past the transport timeout before it gives up
/// on a transport that never closed the reply channel.
pub const DEFAULT_COLLECTOR_GRACE: Duration = Duration::from_millis(250);
