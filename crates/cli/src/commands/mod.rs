//! Subcommand implementations.

pub mod cart;
pub mod menu;

use teahouse_core::{ItemIdError, PriceError};
use teahouse_storefront::menu::MenuError;
use thiserror::Error;

/// Errors that can stop a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The item id argument is not usable.
    #[error("Invalid item id: {0}")]
    InvalidItemId(#[from] ItemIdError),

    /// The price argument is not usable.
    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] PriceError),

    /// The menu catalog could not be loaded.
    #[error(transparent)]
    Menu(#[from] MenuError),
}
