//! Latest-wins render guard.

use std::sync::atomic::{AtomicU64, Ordering};

/// Sequence guard for one render region.
///
/// A tick takes a ticket before it starts fetching and commits it right
/// before rendering. A commit only succeeds if no newer ticket has already
/// rendered, so a slow response can never overwrite a fresher one.
/// Commit and render must happen under the same view lock.
#[derive(Debug, Default)]
pub struct RenderGuard {
    issued: AtomicU64,
    rendered: AtomicU64,
}

impl RenderGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticket(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Returns `false` if a newer ticket already rendered.
    pub fn commit(&self, ticket: u64) -> bool {
        self.rendered
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                (ticket > current).then_some(ticket)
            })
            .is_ok()
    }

    /// Ticket of the last successful commit (0 if none).
    pub fn last_rendered(&self) -> u64 {
        self.rendered.load(Ordering::SeqCst)
    }
}
