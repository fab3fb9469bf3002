use crate::rpc_client::{BridgeResources, RpcClient, dispatch};
use crate::{CallOptions, ReplyFuture, RpcBridgeError, RpcClientConfig, WorkerPool};
use bytes::Bytes;
use once_cell::sync::OnceCell;
use querybridge::message::RejectReason;
use querybridge::transport::SessionProvider;
use querybridge::uri::UUri;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

static GLOBAL_BRIDGE: OnceCell<RpcBridge> = OnceCell::new();

pub(crate) struct BridgeInner {
    provider: Arc<dyn SessionProvider>,
    config: RpcClientConfig,
    ref_count: AtomicUsize,
    ready: AtomicBool,
    /// Guards lifecycle transitions. Never taken on the `RpcClient::invoke` path.
    resources: Mutex<Option<Arc<BridgeResources>>>,
}

impl BridgeInner {
    fn lock_resources(&self) -> MutexGuard<'_, Option<Arc<BridgeResources>>> {
        // Transitions leave the slot consistent even if a holder panicked.
        self.resources
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub(crate) fn ref_count(&self) -> usize {
        self.ref_count.load(Ordering::Acquire)
    }

    /// Registers another user of resources that are already up.
    pub(crate) fn retain(&self) {
        let _slot = self.lock_resources();
        self.ref_count.fetch_add(1, Ordering::AcqRel);
    }

    pub(crate) fn release(&self) -> Result<(), RpcBridgeError> {
        let mut slot = self.lock_resources();

        let previous = self.ref_count.load(Ordering::Acquire);
        if previous == 0 {
            tracing::warn!("Release called on an uninitialized RPC bridge");
            return Ok(());
        }

        self.ref_count.store(previous - 1, Ordering::Release);
        if previous > 1 {
            return Ok(());
        }

        self.ready.store(false, Ordering::Release);
        // Dropping the last reference closes the worker pool queue.
        drop(slot.take());

        self.provider.close().map_err(|e| {
            tracing::error!("Session close failed: {}", e);
            RpcBridgeError::from(e)
        })?;

        tracing::info!("RPC bridge torn down");
        Ok(())
    }
}

/// Reference-counted owner of the session and worker pool shared by every
/// RPC caller.
///
/// The first [`RpcBridge::acquire`] opens the session and starts the pool;
/// dropping (or explicitly releasing) the last [`RpcClient`] tears both down.
/// Cloning an `RpcBridge` shares the same state.
#[derive(Clone)]
pub struct RpcBridge {
    inner: Arc<BridgeInner>,
}

impl RpcBridge {
    pub fn new(provider: Arc<dyn SessionProvider>, config: RpcClientConfig) -> Self {
        Self {
            inner: Arc::new(BridgeInner {
                provider,
                config,
                ref_count: AtomicUsize::new(0),
                ready: AtomicBool::new(false),
                resources: Mutex::new(None),
            }),
        }
    }

    /// Installs the process-wide bridge. Only the first call takes effect;
    /// later calls return the already installed instance.
    pub fn install_global(
        provider: Arc<dyn SessionProvider>,
        config: RpcClientConfig,
    ) -> &'static RpcBridge {
        GLOBAL_BRIDGE.get_or_init(|| RpcBridge::new(provider, config))
    }

    /// The process-wide bridge, if one has been installed.
    pub fn global() -> Option<&'static RpcBridge> {
        GLOBAL_BRIDGE.get()
    }

    /// Registers a new user, bringing the session and pool up if this is the
    /// first one.
    ///
    /// On failure the reference count is left unchanged.
    pub fn acquire(&self) -> Result<RpcClient, RpcBridgeError> {
        let inner = &self.inner;
        let mut slot = inner.lock_resources();

        let resources = match slot.as_ref() {
            Some(resources) if inner.ref_count() > 0 => resources.clone(),
            _ => {
                let resources = Arc::new(self.start_resources()?);
                *slot = Some(resources.clone());
                inner.ready.store(true, Ordering::Release);
                tracing::info!("RPC bridge initialized");
                resources
            }
        };

        inner.ref_count.fetch_add(1, Ordering::AcqRel);
        drop(slot);

        Ok(RpcClient::new(inner.clone(), resources))
    }

    fn start_resources(&self) -> Result<BridgeResources, RpcBridgeError> {
        let inner = &self.inner;

        let session = inner.provider.open().map_err(|e| {
            tracing::error!("Session open failed: {}", e);
            RpcBridgeError::from(e)
        })?;

        let pool = match WorkerPool::new(inner.config.queue_size, inner.config.max_concurrent_requests)
        {
            Ok(pool) => pool,
            Err(e) => {
                tracing::error!("Failed to create worker pool: {}", e);
                if let Err(close_err) = inner.provider.close() {
                    tracing::warn!("Session close after pool failure also failed: {}", close_err);
                }
                return Err(e.into());
            }
        };

        Ok(BridgeResources {
            session,
            pool,
            config: inner.config.clone(),
        })
    }

    /// Invokes `resource` without holding an [`RpcClient`].
    ///
    /// Rejects with [`RejectReason::NotInitialized`] when no user currently
    /// holds the bridge. Unlike [`RpcClient::invoke`], this briefly takes the
    /// lifecycle lock to reach the shared resources.
    pub fn invoke(
        &self,
        resource: &UUri,
        payload: impl Into<Bytes>,
        options: &CallOptions,
    ) -> ReplyFuture {
        if !self.is_ready() {
            tracing::error!("RPC bridge is not initialized");
            return ReplyFuture::rejected(RejectReason::NotInitialized);
        }

        let resources = self.inner.lock_resources().clone();

        match resources {
            Some(resources) => dispatch(&resources, resource, payload.into(), options),
            None => {
                tracing::error!("RPC bridge is not initialized");
                ReplyFuture::rejected(RejectReason::NotInitialized)
            }
        }
    }

    pub fn ref_count(&self) -> usize {
        self.inner.ref_count()
    }

    pub fn is_ready(&self) -> bool {
        self.inner.ready.load(Ordering::Acquire)
    }

    pub fn config(&self) -> &RpcClientConfig {
        &self.inner.config
    }
}
