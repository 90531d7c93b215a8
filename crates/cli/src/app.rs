//! Demo wiring: which store a demo provides, which surfaces read it, and how
//! UI events turn into store operations.

use context_demos_core::{CurrencyCode, EntryName, Product};
use context_demos_state::{BlogStore, CartStore, ContextScope, seed, use_blog, use_cart};
use tracing::warn;

use crate::config::Demo;
use crate::error::CliError;
use crate::events::UiEvent;
use crate::views::{
    AsideSurface, CartSurface, CategoriesSurface, HeaderSurface, PostsSurface, ProductsSurface,
    Surface,
};

/// One running demo.
#[derive(Debug, Clone)]
pub struct App {
    demo: Demo,
    scope: ContextScope,
    products: Vec<Product>,
}

impl App {
    /// Build `demo` with its store provided from seed data.
    #[must_use]
    pub fn new(demo: Demo, currency: CurrencyCode) -> Self {
        let scope = match demo {
            Demo::Shopping => ContextScope::new().with(CartStore::seeded(currency)),
            Demo::Blog => ContextScope::new().with(BlogStore::seeded()),
        };
        Self::with_scope(demo, scope, seed::products(currency))
    }

    /// Build `demo` over an existing scope.
    #[must_use]
    pub const fn with_scope(demo: Demo, scope: ContextScope, products: Vec<Product>) -> Self {
        Self {
            demo,
            scope,
            products,
        }
    }

    #[must_use]
    pub const fn demo(&self) -> Demo {
        self.demo
    }

    #[must_use]
    pub const fn scope(&self) -> &ContextScope {
        &self.scope
    }

    /// The demo's surfaces in display order.
    #[must_use]
    pub fn surfaces(&self) -> Vec<Box<dyn Surface>> {
        match self.demo {
            Demo::Shopping => vec![
                Box::new(HeaderSurface::default()),
                Box::new(ProductsSurface::new(self.products.clone())),
                Box::new(CartSurface),
            ],
            Demo::Blog => vec![
                Box::new(AsideSurface),
                Box::new(PostsSurface::default()),
                Box::new(CategoriesSurface),
            ],
        }
    }

    /// Apply the store side of `event`.
    ///
    /// Filter events touch no store and succeed trivially. A blank dialog
    /// name or an unknown product is logged and ignored, as the UI would
    /// leave the dialog open or offer no such button.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Context`] if the event needs a store this demo
    /// does not provide.
    pub fn dispatch(&self, event: &UiEvent) -> Result<(), CliError> {
        match event {
            UiEvent::AddToCart(id) => {
                let cart = use_cart(&self.scope)?;
                match self.products.iter().find(|product| product.id == *id) {
                    Some(product) => cart.add_to_cart(product),
                    None => warn!(product_id = %id, "No such product, ignoring add to cart"),
                }
            }
            UiEvent::RemoveFromCart(id) => use_cart(&self.scope)?.remove_from_cart(*id),
            UiEvent::UpdateQuantity { id, quantity } => {
                use_cart(&self.scope)?.update_quantity(*id, *quantity);
            }
            UiEvent::Increment(id) => use_cart(&self.scope)?.increment(*id),
            UiEvent::Decrement(id) => use_cart(&self.scope)?.decrement(*id),
            UiEvent::AddCategory(raw) => {
                let blog = use_blog(&self.scope)?;
                match EntryName::parse(raw) {
                    Ok(name) => {
                        blog.add_category(name.into_inner());
                    }
                    Err(e) => warn!(error = %e, "Add category dialog left open"),
                }
            }
            UiEvent::AddTag(raw) => {
                let blog = use_blog(&self.scope)?;
                match EntryName::parse(raw) {
                    Ok(name) => {
                        blog.add_tag(name.into_inner());
                    }
                    Err(e) => warn!(error = %e, "Add tag dialog left open"),
                }
            }
            UiEvent::FilterCategory(_) | UiEvent::FilterTag(_) | UiEvent::ClearFilter => {}
        }
        Ok(())
    }
}
