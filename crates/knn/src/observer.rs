//! Progress and cancellation hooks for long-running joins.

/// Observer invoked synchronously between query pages, never on the inner
/// pair loop.
///
/// Both methods have no-op defaults, so implementations override only what
/// they need.
pub trait JoinObserver {
    /// Reports cumulative progress after a query page finalizes.
    ///
    /// Fire-and-forget; must not block the join.
    fn report(&mut self, processed: usize, total: usize) {
        let _ = (processed, total);
    }

    /// Polled before each query page starts. Returning `true` aborts the
    /// join with [`JoinError::Cancelled`](crate::JoinError::Cancelled);
    /// pages already finalized are discarded.
    fn cancelled(&self) -> bool {
        false
    }
}

/// Observer that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl JoinObserver for NoopObserver {}
