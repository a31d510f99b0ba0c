//! Cancellable deferred actions
//!
//! After a booking is submitted the wizard closes itself a moment later.
//! That close is a single scheduled action guarded by a [`CancelToken`]:
//! reopening the wizard or dropping the owner cancels it, so a stale close
//! can never reset a freshly opened wizard.
//!
//! Time is passed in explicitly; the owner polls on every tick.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared cancellation flag for one scheduled action
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
struct Pending<A> {
    due: Instant,
    action: A,
    token: CancelToken,
}

/// Holds at most one pending action
#[derive(Debug)]
pub struct Deferred<A> {
    pending: Option<Pending<A>>,
}

impl<A> Deferred<A> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Schedule `action` to fire `delay` after `now`, cancelling whatever was pending
    pub fn schedule(&mut self, action: A, delay: Duration, now: Instant) -> CancelToken {
        self.cancel();
        let token = CancelToken::new();
        self.pending = Some(Pending {
            due: now + delay,
            action,
            token: token.clone(),
        });
        token
    }

    /// Cancel the pending action, if any
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.token.cancel();
        }
    }

    /// Whether an uncancelled action is waiting
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|p| !p.token.is_cancelled())
    }

    /// Take the action if it is due. Cancelled actions are discarded.
    pub fn poll(&mut self, now: Instant) -> Option<A> {
        let pending = self.pending.as_ref()?;
        if pending.token.is_cancelled() {
            self.pending = None;
            return None;
        }
        if now < pending.due {
            return None;
        }
        self.pending.take().map(|p| p.action)
    }
}

impl<A> Default for Deferred<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Drop for Deferred<A> {
    fn drop(&mut self) {
        self.cancel();
    }
}
