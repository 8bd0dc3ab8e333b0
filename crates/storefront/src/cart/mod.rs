//! Cart state management.
//!
//! [`CartStore`] owns the shopper's [`teahouse_core::Cart`], keeps the
//! persistent store in step with it after every mutation, and tells a
//! [`crate::render::CartRenderer`] what to redraw.

mod checkout;
mod store;

pub use checkout::{CheckoutOutcome, Receipt, notice};
pub use store::CartStore;
