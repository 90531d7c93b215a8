//! Shopping demo surfaces: header badge, product display, cart detail.

use askama::Template;
use context_demos_core::Product;
use context_demos_state::{ContextScope, use_cart};

use super::{StoreKind, Surface};
use crate::error::CliError;

/// Product line display data for templates.
struct ProductLine {
    name: String,
    price: String,
    description: String,
    in_cart: Option<u32>,
}

/// Cart line display data for templates.
struct CartLine {
    name: String,
    price: String,
    quantity: u32,
    subtotal: String,
}

#[derive(Template)]
#[template(source = "{{ title }} [cart: {{ count }}]", ext = "txt")]
struct HeaderTemplate<'a> {
    title: &'a str,
    count: u64,
}

#[derive(Template)]
#[template(
    source = r"Available Products
{%- for product in products %}
- {{ product.name }} {{ product.price }}
  {{ product.description }}
  {%- if let Some(quantity) = product.in_cart %}
  In cart: {{ quantity }}
  {%- endif %}
{%- endfor %}",
    ext = "txt"
)]
struct ProductsTemplate {
    products: Vec<ProductLine>,
}

#[derive(Template)]
#[template(
    source = r"Shopping Cart
{%- if items.is_empty() %}
Your cart is empty
{%- else %}
{%- for item in items %}
- {{ item.name }} ({{ item.price }} each) x {{ item.quantity }} = {{ item.subtotal }}
{%- endfor %}
Total: {{ total }}
{%- endif %}",
    ext = "txt"
)]
struct CartTemplate {
    items: Vec<CartLine>,
    total: String,
}

/// Store header with the cart item-count badge.
#[derive(Debug, Clone)]
pub struct HeaderSurface {
    title: String,
}

impl HeaderSurface {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Default for HeaderSurface {
    fn default() -> Self {
        Self::new("PC Store")
    }
}

impl Surface for HeaderSurface {
    fn name(&self) -> &'static str {
        "header"
    }

    fn source(&self) -> StoreKind {
        StoreKind::Cart
    }

    fn render(&self, scope: &ContextScope) -> Result<String, CliError> {
        let cart = use_cart(scope)?;
        Ok(HeaderTemplate {
            title: &self.title,
            count: cart.cart_total(),
        }
        .render()?)
    }
}

/// Catalogue of products with "In cart" badges.
#[derive(Debug, Clone)]
pub struct ProductsSurface {
    products: Vec<Product>,
}

impl ProductsSurface {
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl Surface for ProductsSurface {
    fn name(&self) -> &'static str {
        "products"
    }

    fn source(&self) -> StoreKind {
        StoreKind::Cart
    }

    fn render(&self, scope: &ContextScope) -> Result<String, CliError> {
        let cart = use_cart(scope)?.snapshot();
        let products = self
            .products
            .iter()
            .map(|product| ProductLine {
                name: product.name.clone(),
                price: product.price.to_string(),
                description: product.description.clone(),
                in_cart: cart.line_item(product.id).map(|item| item.quantity),
            })
            .collect();
        Ok(ProductsTemplate { products }.render()?)
    }
}

/// Cart detail with per-line subtotals and the cart value.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartSurface;

impl Surface for CartSurface {
    fn name(&self) -> &'static str {
        "cart"
    }

    fn source(&self) -> StoreKind {
        StoreKind::Cart
    }

    fn render(&self, scope: &ContextScope) -> Result<String, CliError> {
        let cart = use_cart(scope)?.snapshot();
        let items = cart
            .items()
            .iter()
            .map(|item| CartLine {
                name: item.name.clone(),
                price: item.price.to_string(),
                quantity: item.quantity,
                subtotal: item.subtotal().to_string(),
            })
            .collect();
        Ok(CartTemplate {
            items,
            total: cart.value().to_string(),
        }
        .render()?)
    }
}
