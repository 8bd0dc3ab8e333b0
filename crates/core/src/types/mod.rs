//! Core types for Teahouse.
//!
//! This module provides type-safe wrappers for the cart domain.

pub mod cart;
pub mod id;
pub mod line_item;
pub mod price;

pub use cart::{Cart, CartError};
pub use id::{ItemId, ItemIdError};
pub use line_item::LineItem;
pub use price::{Price, PriceError};
