use crate::Queryable;
use querybridge::transport::{Query, ReplySender, Session, TransportError};
use querybridge::uri::UUri;
use querybridge::utils::subject_for;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

/// An in-process session that routes queries to declared queryables.
///
/// Replies are delivered from a Tokio task. The reply sender is dropped once
/// the queryable has answered or the query timeout expires, whichever comes
/// first; queries to subjects without a queryable simply expire.
#[derive(Default)]
pub struct MemSession {
    queryables: RwLock<HashMap<String, Arc<dyn Queryable>>>,
    recorded: Mutex<Vec<Query>>,
    reject_queries: AtomicBool,
}

impl MemSession {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Serves `subject` with `queryable`, replacing any previous one.
    pub fn declare_queryable(&self, subject: impl Into<String>, queryable: impl Queryable + 'static) {
        self.queryables
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(subject.into(), Arc::new(queryable));
    }

    /// Serves the subject that calls to `method` are published on.
    pub fn declare_rpc_method(&self, method: &UUri, queryable: impl Queryable + 'static) {
        self.declare_queryable(subject_for(method), queryable);
    }

    /// Makes every subsequent query fail at submission.
    pub fn set_reject_queries(&self, reject: bool) {
        self.reject_queries.store(reject, Ordering::Release);
    }

    /// Every query accepted so far, in submission order.
    pub fn recorded_queries(&self) -> Vec<Query> {
        self.recorded
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn query_count(&self) -> usize {
        self.recorded
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl Session for MemSession {
    fn query(&self, query: Query, replies: ReplySender) -> Result<(), TransportError> {
        if self.reject_queries.load(Ordering::Acquire) {
            return Err(TransportError::QueryRejected(format!(
                "subject {} refused",
                query.subject
            )));
        }

        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|_| TransportError::Unavailable("no Tokio runtime".to_string()))?;

        let queryable = self
            .queryables
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&query.subject)
            .cloned();

        self.recorded
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(query.clone());

        runtime.spawn(async move {
            let timeout = query.timeout;

            let deliver = async {
                let Some(queryable) = queryable else {
                    tracing::trace!("No queryable for subject {}", query.subject);
                    std::future::pending::<()>().await;
                    return;
                };

                for reply in queryable.reply(&query).await {
                    if replies.send(reply).await.is_err() {
                        break;
                    }
                }
            };

            if tokio::time::timeout(timeout, deliver).await.is_err() {
                tracing::trace!("Query on {} expired after {:?}", query.subject, timeout);
            }
            // `replies` drops here, closing the reply channel.
        });

        Ok(())
    }
}
