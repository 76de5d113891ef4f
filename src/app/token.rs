//! View lifetime tokens
//!
//! Each opened detail view gets a token. Closing or replacing the view
//! cancels it, and pending evolution fetches check it before every request
//! and before their result is applied.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation flag shared between a view and its pending fetches
#[derive(Debug, Clone, Default)]
pub struct ViewToken {
    cancelled: Arc<AtomicBool>,
}

impl ViewToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// True when both tokens belong to the same view
    pub fn same_view(&self, other: &ViewToken) -> bool {
        Arc::ptr_eq(&self.cancelled, &other.cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_cancellation() {
        let token = ViewToken::new();
        let pending = token.clone();
        assert!(!pending.is_cancelled());

        token.cancel();
        assert!(pending.is_cancelled());
        assert!(pending.same_view(&token));
    }

    #[test]
    fn test_distinct_views() {
        let a = ViewToken::new();
        let b = ViewToken::new();
        assert!(!a.same_view(&b));
        a.cancel();
        assert!(!b.is_cancelled());
    }
}
