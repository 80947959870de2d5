//! Viewport observation capability.
//!
//! The grid never reads global window state. Hosts inject a
//! [`ViewportObserver`]; the grid reads the current size on mount and can
//! subscribe to changes, with the subscription detached when its guard is
//! dropped. [`StaticViewport`] and [`SharedViewport`] cover headless hosts
//! and tests.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, Weak};

/// Width below which a viewport is considered narrow, in logical pixels.
pub const NARROW_BREAKPOINT: u32 = 768;

/// Logical viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    /// Create a size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check against the narrow breakpoint.
    pub const fn is_narrow(&self) -> bool {
        self.width < NARROW_BREAKPOINT
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        // A comfortable desktop default for hosts that never report a size
        Self::new(1280, 800)
    }
}

/// Callback invoked on viewport changes.
pub type ViewportCallback = Box<dyn Fn(ViewportSize) + Send + Sync>;

/// Capability for reading and observing the viewport.
pub trait ViewportObserver: Send + Sync {
    /// Current viewport size.
    fn current(&self) -> ViewportSize;

    /// Subscribe to size changes.
    ///
    /// The callback runs on every change until the returned subscription is
    /// dropped.
    fn subscribe(&self, callback: ViewportCallback) -> ViewportSubscription;
}

/// RAII guard for a viewport subscription.
///
/// Dropping the guard detaches the callback; hosts hold it for the
/// component's lifetime and let teardown do the rest.
pub struct ViewportSubscription {
    detach: Option<Box<dyn FnOnce() + Send>>,
}

impl ViewportSubscription {
    /// Build a subscription from its detach action.
    pub fn new(detach: impl FnOnce() + Send + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }

    /// Subscription with nothing to detach (observers that never fire).
    pub fn noop() -> Self {
        Self { detach: None }
    }
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl std::fmt::Debug for ViewportSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportSubscription")
            .field("active", &self.detach.is_some())
            .finish()
    }
}

/// Fixed-size observer for tests and headless hosts.
#[derive(Debug, Clone)]
pub struct StaticViewport {
    size: ViewportSize,
}

impl StaticViewport {
    /// Observer that always reports the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: ViewportSize::new(width, height),
        }
    }

    /// A size just below the narrow breakpoint.
    pub fn narrow() -> Self {
        Self::new(NARROW_BREAKPOINT - 1, 800)
    }

    /// A size comfortably above the narrow breakpoint.
    pub fn wide() -> Self {
        Self::new(1280, 800)
    }
}

impl ViewportObserver for StaticViewport {
    fn current(&self) -> ViewportSize {
        self.size
    }

    fn subscribe(&self, _callback: ViewportCallback) -> ViewportSubscription {
        // The size never changes, so there is nothing to detach
        ViewportSubscription::noop()
    }
}

struct SharedViewportInner {
    size: ViewportSize,
    listeners: HashMap<usize, Arc<dyn Fn(ViewportSize) + Send + Sync>>,
    next_id: usize,
}

/// Mutable observer driven by the host (or a test) through [`set_size`].
///
/// [`set_size`]: SharedViewport::set_size
pub struct SharedViewport {
    inner: Arc<RwLock<SharedViewportInner>>,
}

impl SharedViewport {
    /// Create an observer with an initial size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SharedViewportInner {
                size: ViewportSize::new(width, height),
                listeners: HashMap::new(),
                next_id: 0,
            })),
        }
    }

    /// Report a new size, notifying all live subscriptions.
    pub fn set_size(&self, width: u32, height: u32) {
        let size = ViewportSize::new(width, height);
        let listeners: Vec<_> = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            if guard.size == size {
                return;
            }
            guard.size = size;
            guard.listeners.values().cloned().collect()
        };
        // Callbacks run outside the lock so they may re-enter the observer
        for listener in listeners {
            listener(size);
        }
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.inner.read().map(|g| g.listeners.len()).unwrap_or(0)
    }
}

impl Clone for SharedViewport {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl std::fmt::Debug for SharedViewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedViewport")
            .field("size", &self.current())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ViewportObserver for SharedViewport {
    fn current(&self) -> ViewportSize {
        self.inner
            .read()
            .map(|g| g.size)
            .unwrap_or_default()
    }

    fn subscribe(&self, callback: ViewportCallback) -> ViewportSubscription {
        let Ok(mut guard) = self.inner.write() else {
            return ViewportSubscription::noop();
        };
        let id = guard.next_id;
        guard.next_id += 1;
        guard.listeners.insert(id, Arc::from(callback));

        // The guard holds a weak reference so an outliving subscription
        // does not keep the observer alive
        let weak: Weak<RwLock<SharedViewportInner>> = Arc::downgrade(&self.inner);
        ViewportSubscription::new(move || {
            if let Some(inner) = weak.upgrade()
                && let Ok(mut guard) = inner.write()
            {
                guard.listeners.remove(&id);
            }
        })
    }
}
