//! Shared state with atomic snapshot replacement and change notification.
//!
//! A [`Provider`] owns one live state value. Every consumer holds a clone of
//! the same handle, so there is a single source of truth per store. Updates
//! compute the next state from the previous one and swap the snapshot
//! pointer; readers holding an older [`Arc`] keep a consistent view.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use tracing::trace;
use uuid::Uuid;

type Listener<S> = Arc<dyn Fn(&Arc<S>) + Send + Sync>;

/// Cheaply cloneable handle to a shared state value.
pub struct Provider<S> {
    inner: Arc<ProviderInner<S>>,
}

struct ProviderInner<S> {
    name: &'static str,
    snapshot: RwLock<Arc<S>>,
    version: AtomicU64,
    listeners: RwLock<Vec<(Uuid, Listener<S>)>>,
}

impl<S> Clone for Provider<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S> fmt::Debug for Provider<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("name", &self.inner.name)
            .field("version", &self.inner.version.load(Ordering::Acquire))
            .field("listeners", &self.inner.listeners.read().len())
            .finish_non_exhaustive()
    }
}

impl<S: Send + Sync + 'static> Provider<S> {
    /// Create a provider holding `initial`.
    ///
    /// `name` identifies the provider in logs.
    #[must_use]
    pub fn new(name: &'static str, initial: S) -> Self {
        Self {
            inner: Arc::new(ProviderInner {
                name,
                snapshot: RwLock::new(Arc::new(initial)),
                version: AtomicU64::new(0),
                listeners: RwLock::new(Vec::new()),
            }),
        }
    }

    /// The most recently committed state.
    #[must_use]
    pub fn snapshot(&self) -> Arc<S> {
        Arc::clone(&self.inner.snapshot.read())
    }

    /// Number of committed changes since construction.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.version.load(Ordering::Acquire)
    }

    /// Whether two handles point at the same provider.
    #[must_use]
    pub fn same_provider(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Apply a transition to the current state.
    ///
    /// `transition` receives the current state and returns the next one, or
    /// `None` when nothing changes. On `Some`, the snapshot is replaced, the
    /// version is bumped, and every listener is called with the new snapshot
    /// after the lock is released. Returns whether a change was committed.
    pub fn update<F>(&self, transition: F) -> bool
    where
        F: FnOnce(&S) -> Option<S>,
    {
        let next = {
            let mut guard = self.inner.snapshot.write();
            let Some(next) = transition(&**guard) else {
                return false;
            };
            let next = Arc::new(next);
            *guard = Arc::clone(&next);
            self.inner.version.fetch_add(1, Ordering::AcqRel);
            next
        };

        let listeners: Vec<Listener<S>> = self
            .inner
            .listeners
            .read()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        trace!(
            provider = self.inner.name,
            version = self.version(),
            listeners = listeners.len(),
            "Snapshot committed"
        );

        for listener in listeners {
            listener(&next);
        }
        true
    }

    /// Register a listener called with each newly committed snapshot.
    ///
    /// The listener stays registered until the returned [`Subscription`] is
    /// dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Arc<S>) + Send + Sync + 'static,
    {
        let id = Uuid::new_v4();
        self.inner.listeners.write().push((id, Arc::new(listener)));

        let weak: Weak<ProviderInner<S>> = Arc::downgrade(&self.inner);
        Subscription {
            id,
            cancel: Some(Box::new(move |id| {
                if let Some(inner) = weak.upgrade() {
                    inner.listeners.write().retain(|(entry, _)| *entry != id);
                }
            })),
        }
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.read().len()
    }
}

/// Handle for a registered listener. Dropping it unsubscribes.
pub struct Subscription {
    id: Uuid,
    cancel: Option<Box<dyn FnOnce(Uuid) + Send + Sync>>,
}

impl Subscription {
    /// Identifier of this subscription.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel(self.id);
        }
    }
}
