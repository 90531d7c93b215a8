//! Context scopes: where stores are provided and looked up.
//!
//! A [`ContextScope`] plays the role of a provider boundary. Stores are
//! installed with [`ContextScope::provide`] and read back with
//! [`ContextScope::use_context`], which hands out the live shared handle.
//! Child scopes see their parent's stores and may shadow them.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::ContextError;

/// A store handle that can be provided through a [`ContextScope`].
pub trait Store: Clone + Send + Sync + 'static {
    /// Accessor name reported when the store is missing.
    const CONSUMER: &'static str;
    /// Provider name reported when the store is missing.
    const PROVIDER: &'static str;
}

/// A region in which stores are provided to consumers.
///
/// Cloning a scope yields another handle to the same region.
#[derive(Clone, Default)]
pub struct ContextScope {
    inner: Arc<ScopeInner>,
}

#[derive(Default)]
struct ScopeInner {
    parent: Option<ContextScope>,
    providers: RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
}

impl fmt::Debug for ContextScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextScope")
            .field("providers", &self.inner.providers.read().len())
            .field("depth", &self.depth())
            .finish()
    }
}

impl ContextScope {
    /// An empty root scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A nested scope that inherits every store visible here.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            inner: Arc::new(ScopeInner {
                parent: Some(self.clone()),
                providers: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Install `store` in this scope, returning the store it shadows at this
    /// level, if any.
    pub fn provide<S: Store>(&self, store: S) -> Option<S> {
        debug!(provider = S::PROVIDER, "Providing store");
        self.inner
            .providers
            .write()
            .insert(TypeId::of::<S>(), Box::new(store))
            .and_then(|previous| previous.downcast::<S>().ok())
            .map(|previous| *previous)
    }

    /// Builder form of [`provide`](Self::provide).
    #[must_use]
    pub fn with<S: Store>(self, store: S) -> Self {
        self.provide(store);
        self
    }

    /// Look up the nearest provided `S`.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::MissingProvider`] if neither this scope nor any
    /// ancestor provides `S`.
    pub fn use_context<S: Store>(&self) -> Result<S, ContextError> {
        let mut scope = Some(self);
        while let Some(current) = scope {
            if let Some(store) = current
                .inner
                .providers
                .read()
                .get(&TypeId::of::<S>())
                .and_then(|boxed| boxed.downcast_ref::<S>())
            {
                return Ok(store.clone());
            }
            scope = current.inner.parent.as_ref();
        }

        Err(ContextError::MissingProvider {
            consumer: S::CONSUMER,
            provider: S::PROVIDER,
        })
    }

    /// Whether `S` is visible from this scope.
    #[must_use]
    pub fn provides<S: Store>(&self) -> bool {
        self.use_context::<S>().is_ok()
    }

    fn depth(&self) -> usize {
        let mut depth = 0;
        let mut parent = self.inner.parent.as_ref();
        while let Some(scope) = parent {
            depth += 1;
            parent = scope.inner.parent.as_ref();
        }
        depth
    }
}
