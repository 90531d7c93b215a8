//! Products and cart line items.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// A product offered on the product display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub description: String,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Price,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            description: description.into(),
        }
    }
}

/// One entry in the cart, keyed by product id.
///
/// `quantity` is always at least 1 while the item is in a cart; an item whose
/// quantity would drop to zero is removed instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: u32,
}

impl CartItem {
    /// A fresh line item for `product` with quantity 1.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
        }
    }

    /// `price × quantity`.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.price.times(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::price::CurrencyCode;

    #[test]
    fn test_from_product_starts_at_one() {
        let product = Product::new(
            ProductId::new(2),
            "Office PC",
            Price::from_whole(699, CurrencyCode::USD),
            "Reliable computer for office work",
        );
        let item = CartItem::from_product(&product);
        assert_eq!(item.id, product.id);
        assert_eq!(item.name, "Office PC");
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_subtotal() {
        let item = CartItem {
            id: ProductId::new(1),
            name: "Gaming PC".to_owned(),
            price: Price::from_whole(1299, CurrencyCode::USD),
            quantity: 3,
        };
        assert_eq!(item.subtotal().amount, Decimal::from(3897));
    }
}
