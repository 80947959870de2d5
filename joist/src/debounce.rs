//! Debounced task scheduling.

use std::future::Future;
use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;
use tokio::time::{Duration, sleep};

/// Single-slot cancel-and-reschedule timer.
///
/// A `Debouncer` holds at most one pending run. Scheduling again before the
/// delay elapses aborts the pending run and starts the window over, so a
/// burst of calls executes the action once, after the last call.
///
/// Scheduling requires an ambient tokio runtime.
///
/// # Example
///
/// ```ignore
/// let debounce = Debouncer::new(Duration::from_millis(500));
/// debounce.schedule(async move { persist(order).await });
/// ```
pub struct Debouncer {
    delay: Duration,
    pending: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl Debouncer {
    /// Create a debouncer with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    /// Schedule `action` to run after the delay, cancelling any pending run.
    ///
    /// Cancellation aborts the slot at its next await point, including
    /// inside a running action. An action that must run to completion once
    /// started should hand its work to a detached task.
    pub fn schedule<F>(&self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Ok(mut pending) = self.pending.lock() {
            if let Some(handle) = pending.take() {
                handle.abort();
            }
            let delay = self.delay;
            *pending = Some(tokio::spawn(async move {
                sleep(delay).await;
                action.await;
            }));
        }
    }

    /// Abort the pending run, if any.
    pub fn cancel(&self) {
        if let Ok(mut pending) = self.pending.lock()
            && let Some(handle) = pending.take()
        {
            handle.abort();
        }
    }

    /// Check whether a run is scheduled and not yet finished.
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .map(|p| p.as_ref().is_some_and(|h| !h.is_finished()))
            .unwrap_or(false)
    }

    /// The configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Clone for Debouncer {
    fn clone(&self) -> Self {
        Self {
            delay: self.delay,
            pending: Arc::clone(&self.pending),
        }
    }
}

impl std::fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish()
    }
}
