use crate::error::WorkerPoolError;
use futures::FutureExt;
use futures::channel::oneshot;
use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::runtime::Handle;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;

type Job = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// A bounded pool of Tokio tasks that run deferred computations.
///
/// Jobs wait in a queue of `queue_size` entries and are executed by
/// `max_concurrent` workers. When the queue is full, `submit` fails instead of
/// waiting. Dropping the pool closes the queue; workers finish what is already
/// queued and then exit.
pub struct WorkerPool {
    queue: mpsc::Sender<Job>,
    workers: Vec<JoinHandle<()>>,
    queue_size: usize,
}

impl WorkerPool {
    /// Spawns the workers on the current Tokio runtime.
    pub fn new(queue_size: usize, max_concurrent: usize) -> Result<Self, WorkerPoolError> {
        if queue_size == 0 || max_concurrent == 0 {
            return Err(WorkerPoolError::InvalidConfig);
        }

        let runtime = Handle::try_current().map_err(|_| WorkerPoolError::NoRuntime)?;

        let (queue, rx) = mpsc::channel::<Job>(queue_size);
        let rx = Arc::new(Mutex::new(rx));

        let workers = (0..max_concurrent)
            .map(|index| runtime.spawn(Self::worker_loop(index, rx.clone())))
            .collect();

        Ok(Self {
            queue,
            workers,
            queue_size,
        })
    }

    async fn worker_loop(index: usize, rx: Arc<Mutex<mpsc::Receiver<Job>>>) {
        loop {
            // Only the dequeue is serialized; jobs run outside the lock.
            let job = rx.lock().await.recv().await;

            let Some(job) = job else {
                break;
            };

            // A panicking job drops its result sender; the worker keeps going.
            if let Err(panic) = AssertUnwindSafe(job).catch_unwind().await {
                tracing::error!("Worker {} job panicked: {}", index, panic_message(panic.as_ref()));
            }
        }

        tracing::trace!("Worker {} exiting", index);
    }

    /// Queues `task` and returns a handle that resolves to its output.
    pub fn submit<F, T>(&self, task: F) -> Result<TaskHandle<T>, WorkerPoolError>
    where
        F: Future<Output = T> + Send + 'static,
        T: Send + 'static,
    {
        let (done_tx, done_rx) = oneshot::channel::<T>();

        let job: Job = Box::pin(async move {
            let _ = done_tx.send(task.await);
        });

        self.queue.try_send(job).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => WorkerPoolError::Saturated,
            mpsc::error::TrySendError::Closed(_) => WorkerPoolError::ShutDown,
        })?;

        Ok(TaskHandle { rx: done_rx })
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    pub fn queue_size(&self) -> usize {
        self.queue_size
    }

    /// Whether every worker has exited.
    pub fn is_finished(&self) -> bool {
        self.workers.iter().all(|w| w.is_finished())
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(msg) = panic.downcast_ref::<&'static str>() {
        msg
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown panic"
    }
}

/// Resolves to the output of a job submitted to a [`WorkerPool`].
///
/// Resolves to `Err(oneshot::Canceled)` if the job was dropped before it
/// finished, e.g. because it panicked or its runtime shut down.
pub struct TaskHandle<T> {
    rx: oneshot::Receiver<T>,
}

impl<T> Future for TaskHandle<T> {
    type Output = Result<T, oneshot::Canceled>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx)
    }
}
