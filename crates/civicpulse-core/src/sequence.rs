//! Latest-request-wins guard for overlapping fetches

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket handed out when a request starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Tracks the most recently started request so that responses from
/// superseded requests can be dropped instead of overwriting fresher data
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    /// Create a sequence with no request started
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request; every earlier ticket stops being current
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` belongs to the most recently started request
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}
