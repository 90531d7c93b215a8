//! UI events: the interactions a user can perform on the demo surfaces.

use std::fmt;

use context_demos_core::ProductId;
use serde::{Deserialize, Serialize};

/// One user interaction.
///
/// Cart and blog events mutate the shared stores; filter events change only
/// the post list's local state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UiEvent {
    /// "Add to Cart" on a product card.
    AddToCart(ProductId),
    /// Delete button on a cart line.
    RemoveFromCart(ProductId),
    /// Set a cart line's quantity directly.
    UpdateQuantity { id: ProductId, quantity: i64 },
    /// "+" stepper on a cart line.
    Increment(ProductId),
    /// "-" stepper on a cart line.
    Decrement(ProductId),
    /// Submit of the add-category dialog with the raw text field contents.
    AddCategory(String),
    /// Submit of an add-tag dialog.
    AddTag(String),
    /// Show only posts in a category.
    FilterCategory(String),
    /// Show only posts with a tag.
    FilterTag(String),
    /// Show all posts again.
    ClearFilter,
}

impl fmt::Display for UiEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddToCart(id) => write!(f, "add_to_cart {id}"),
            Self::RemoveFromCart(id) => write!(f, "remove_from_cart {id}"),
            Self::UpdateQuantity { id, quantity } => write!(f, "update_quantity {id} -> {quantity}"),
            Self::Increment(id) => write!(f, "increment {id}"),
            Self::Decrement(id) => write!(f, "decrement {id}"),
            Self::AddCategory(name) => write!(f, "add_category {name:?}"),
            Self::AddTag(name) => write!(f, "add_tag {name:?}"),
            Self::FilterCategory(name) => write!(f, "filter_category {name:?}"),
            Self::FilterTag(name) => write!(f, "filter_tag {name:?}"),
            Self::ClearFilter => f.write_str("clear_filter"),
        }
    }
}
