//! Hierarchical cancellation scopes
//!
//! A [`CancelScope`] bounds long-running work: the node holds a root scope
//! for its own lifetime, and callers derive child scopes for individual
//! operations or sessions. Cancelling a scope cancels every scope derived
//! from it; a child created under an already-cancelled parent starts
//! cancelled.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use tokio::sync::Notify;

struct ScopeState {
    cancelled: AtomicBool,
    notify: Notify,
    children: Mutex<Vec<Weak<ScopeState>>>,
}

impl ScopeState {
    fn new(cancelled: bool) -> Arc<Self> {
        Arc::new(Self {
            cancelled: AtomicBool::new(cancelled),
            notify: Notify::new(),
            children: Mutex::new(Vec::new()),
        })
    }

    fn cancel(&self) {
        if self.cancelled.swap(true, Ordering::SeqCst) {
            return;
        }
        self.notify.notify_waiters();
        let children: Vec<_> = self.children.lock().drain(..).collect();
        for child in children {
            if let Some(child) = child.upgrade() {
                child.cancel();
            }
        }
    }
}

/// A cancellation scope shared by clone
///
/// Cloning yields another handle on the same scope; use [`CancelScope::child`]
/// to derive a nested scope instead.
#[derive(Clone)]
pub struct CancelScope {
    inner: Arc<ScopeState>,
}

impl CancelScope {
    /// Create a root scope with no parent
    pub fn root() -> Self {
        Self {
            inner: ScopeState::new(false),
        }
    }

    /// Derive a child scope
    ///
    /// The child is cancelled when this scope is cancelled; cancelling the
    /// child leaves this scope untouched.
    pub fn child(&self) -> Self {
        let child = ScopeState::new(self.is_cancelled());
        // Registration races with a concurrent cancel(); re-check afterwards
        // so the child never misses a cancellation that drained the registry.
        self.inner.children.lock().push(Arc::downgrade(&child));
        if self.is_cancelled() {
            child.cancel();
        }
        Self { inner: child }
    }

    /// Request cancellation of this scope and all scopes derived from it
    pub fn cancel(&self) {
        self.inner.cancel();
    }

    /// Non-blocking cancellation check
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Resolves when cancellation is requested
    pub async fn cancelled(&self) {
        loop {
            let notified = self.inner.notify.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }
}

impl Default for CancelScope {
    fn default() -> Self {
        Self::root()
    }
}

impl std::fmt::Debug for CancelScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancelScope")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn cancel_propagates_to_children() {
        let root = CancelScope::root();
        let child = root.child();
        let grandchild = child.child();

        root.cancel();
        assert!(root.is_cancelled());
        assert!(child.is_cancelled());
        assert!(grandchild.is_cancelled());
    }

    #[test]
    fn child_cancel_leaves_parent_running() {
        let root = CancelScope::root();
        let child = root.child();

        child.cancel();
        assert!(child.is_cancelled());
        assert!(!root.is_cancelled());
    }

    #[test]
    fn child_of_cancelled_parent_starts_cancelled() {
        let root = CancelScope::root();
        root.cancel();
        assert!(root.child().is_cancelled());
    }

    #[tokio::test]
    async fn cancelled_future_wakes_on_cancel() {
        let scope = CancelScope::root();
        let waiter = scope.clone();
        let handle = tokio::spawn(async move {
            waiter.cancelled().await;
        });

        tokio::time::sleep(Duration::from_millis(10)).await;
        scope.cancel();
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("waiter should wake promptly")
            .expect("waiter task should not panic");
    }

    #[tokio::test]
    async fn cancelled_future_resolves_immediately_when_already_cancelled() {
        let scope = CancelScope::root();
        scope.cancel();
        tokio::time::timeout(Duration::from_millis(100), scope.cancelled())
            .await
            .expect("already-cancelled scope should resolve at once");
    }
}
