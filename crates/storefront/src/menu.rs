//! Menu catalog shown on the home page.
//!
//! The catalog is a JSON file loaded once at startup:
//!
//! ```json
//! [
//!   { "id": "masala-chai", "name": "Masala Chai", "price": 50,
//!     "category": "Tea", "description": "Spiced milk tea" }
//! ]
//! ```
//!
//! Prices here only feed the "Add to cart" buttons; the cart trusts whatever
//! the button submits.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use teahouse_core::{ItemId, Price};
use thiserror::Error;

/// Errors loading the menu.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("failed to read menu: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse menu: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("menu lists {0} more than once")]
    DuplicateId(ItemId),
}

/// One orderable item.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub price: Price,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Items sharing a category, in file order.
#[derive(Debug, Clone)]
pub struct MenuSection {
    pub category: String,
    pub items: Vec<MenuItem>,
}

/// The loaded catalog.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    items: Arc<Vec<MenuItem>>,
}

impl Menu {
    /// Load the menu from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a list of valid
    /// items, or lists an id twice.
    pub fn load(path: &Path) -> Result<Self, MenuError> {
        let raw = std::fs::read_to_string(path)?;
        let menu = Self::from_json(&raw)?;
        tracing::info!(items = menu.len(), path = %path.display(), "Loaded menu");
        Ok(menu)
    }

    /// Parse a menu from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid JSON or duplicate ids.
    pub fn from_json(raw: &str) -> Result<Self, MenuError> {
        let items: Vec<MenuItem> = serde_json::from_str(raw)?;

        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(&item.id) {
                return Err(MenuError::DuplicateId(item.id.clone()));
            }
        }

        Ok(Self {
            items: Arc::new(items),
        })
    }

    /// All items in file order.
    #[must_use]
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the menu has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items grouped by category, categories in order of first appearance.
    #[must_use]
    pub fn sections(&self) -> Vec<MenuSection> {
        let mut sections: Vec<MenuSection> = Vec::new();
        for item in self.items.iter() {
            match sections.iter_mut().find(|s| s.category == item.category) {
                Some(section) => section.items.push(item.clone()),
                None => sections.push(MenuSection {
                    category: item.category.clone(),
                    items: vec![item.clone()],
                }),
            }
        }
        sections
    }
}
