//! Context Demos State - provider/consumer stores.
//!
//! Each demo has one store that is built once, provided through a
//! [`ContextScope`], and read by every display surface through the same
//! shared handle:
//!
//! - [`CartStore`] - line items with add, remove, and quantity updates, plus
//!   item-count and value aggregates
//! - [`BlogStore`] - categories and tags that can be appended to, and a fixed
//!   post list filterable by category or tag
//!
//! Stores are built on [`Provider`], which replaces its snapshot atomically
//! on every committed change and notifies subscribers afterwards.
//!
//! ```
//! use context_demos_core::{CurrencyCode, ProductId};
//! use context_demos_state::{CartStore, ContextScope, use_cart};
//!
//! let scope = ContextScope::new().with(CartStore::seeded(CurrencyCode::USD));
//! let header = use_cart(&scope)?;
//! let detail = use_cart(&scope)?;
//!
//! detail.update_quantity(ProductId::new(1), 3);
//! assert_eq!(header.cart_total(), 3);
//!
//! assert!(use_cart(&ContextScope::new()).is_err());
//! # Ok::<(), context_demos_state::ContextError>(())
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod blog;
pub mod cart;
pub mod error;
pub mod ids;
pub mod provider;
pub mod scope;
pub mod seed;

pub use blog::{BlogState, BlogStore, use_blog};
pub use cart::{CartState, CartStore, use_cart};
pub use error::ContextError;
pub use ids::MonotonicIds;
pub use provider::{Provider, Subscription};
pub use scope::{ContextScope, Store};
