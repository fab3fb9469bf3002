use querybridge::attributes::UPriority;
use std::time::Duration;

/// Per-call policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallOptions {
    priority: UPriority,
    ttl: Option<Duration>,
}

impl CallOptions {
    pub fn new(priority: UPriority) -> Self {
        Self {
            priority,
            ttl: None,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn priority(&self) -> UPriority {
        self.priority
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }
}

impl Default for CallOptions {
    fn default() -> Self {
        Self::new(querybridge::constants::RPC_PRIORITY_FLOOR)
    }
}
