use crate::MemSession;
use querybridge::transport::{Session, SessionProvider, TransportError};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Hands out one shared [`MemSession`] and counts lifecycle calls.
pub struct MemSessionProvider {
    session: Arc<MemSession>,
    opens: AtomicUsize,
    closes: AtomicUsize,
    fail_open: AtomicBool,
    fail_close: AtomicBool,
}

impl MemSessionProvider {
    pub fn new(session: Arc<MemSession>) -> Arc<Self> {
        Arc::new(Self {
            session,
            opens: AtomicUsize::new(0),
            closes: AtomicUsize::new(0),
            fail_open: AtomicBool::new(false),
            fail_close: AtomicBool::new(false),
        })
    }

    pub fn session(&self) -> &Arc<MemSession> {
        &self.session
    }

    pub fn open_count(&self) -> usize {
        self.opens.load(Ordering::Acquire)
    }

    pub fn close_count(&self) -> usize {
        self.closes.load(Ordering::Acquire)
    }

    pub fn set_fail_open(&self, fail: bool) {
        self.fail_open.store(fail, Ordering::Release);
    }

    pub fn set_fail_close(&self, fail: bool) {
        self.fail_close.store(fail, Ordering::Release);
    }
}

impl SessionProvider for MemSessionProvider {
    fn open(&self) -> Result<Arc<dyn Session>, TransportError> {
        if self.fail_open.load(Ordering::Acquire) {
            return Err(TransportError::Unavailable("session open refused".to_string()));
        }

        self.opens.fetch_add(1, Ordering::AcqRel);
        Ok(self.session.clone())
    }

    fn close(&self) -> Result<(), TransportError> {
        self.closes.fetch_add(1, Ordering::AcqRel);

        if self.fail_close.load(Ordering::Acquire) {
            return Err(TransportError::Unavailable("session close refused".to_string()));
        }

        Ok(())
    }
}
