//! Per-request context carrying cancellation

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

use crate::storage::{StorageError, StorageResult};

/// Ambient context of a single request
///
/// The host cancels the context when the caller goes away. Storage calls are
/// issued through [`RequestContext::run`] so a cancelled request fails fast
/// with [`StorageError::Cancelled`] instead of completing the persist.
///
/// Clones share state: cancelling any clone cancels them all.
#[derive(Clone, Default)]
pub struct RequestContext {
    inner: Arc<ContextInner>,
}

#[derive(Default)]
struct ContextInner {
    cancelled: AtomicBool,
    notify: Notify,
}

impl RequestContext {
    /// Create a live (not cancelled) context
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.load(Ordering::SeqCst)
    }

    /// Cancel the request. Idempotent.
    pub fn cancel(&self) {
        if !self.inner.cancelled.swap(true, Ordering::SeqCst) {
            self.inner.notify.notify_waiters();
        }
    }

    /// Resolve once the context is cancelled
    pub async fn cancelled(&self) {
        let notified = self.inner.notify.notified();
        tokio::pin!(notified);
        // Register before checking the flag so a concurrent cancel is not missed.
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }

    /// Drive a storage operation unless the context is cancelled first
    ///
    /// A context that is already cancelled never polls `op`.
    pub async fn run<F, T>(&self, op: F) -> StorageResult<T>
    where
        F: Future<Output = StorageResult<T>>,
    {
        if self.is_cancelled() {
            return Err(StorageError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = self.cancelled() => Err(StorageError::Cancelled),
            result = op => result,
        }
    }
}

impl std::fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("is_cancelled", &self.is_cancelled())
            .finish()
    }
}
