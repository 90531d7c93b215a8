//! Core types for the context demos.
//!
//! This module provides type-safe wrappers for the cart and blog domains.

pub mod blog;
pub mod cart;
pub mod id;
pub mod name;
pub mod price;

pub use blog::{Category, Post, Tag};
pub use cart::{CartItem, Product};
pub use id::*;
pub use name::{EntryName, EntryNameError};
pub use price::{CurrencyCode, CurrencyCodeError, Price, PriceError};
