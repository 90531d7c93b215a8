//! Error types for the state crate.

use thiserror::Error;

/// Errors raised when reading a store through a [`ContextScope`].
///
/// Store operations themselves are total; the only failure is asking for a
/// store that no enclosing scope provides.
///
/// [`ContextScope`]: crate::ContextScope
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// No enclosing scope provides the requested store.
    #[error("{consumer} must be used within a {provider}")]
    MissingProvider {
        /// Accessor that was called, e.g. `use_cart`.
        consumer: &'static str,
        /// Provider that must enclose the call, e.g. `CartProvider`.
        provider: &'static str,
    },
}
