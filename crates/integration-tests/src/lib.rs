//! Integration tests for Teahouse.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p teahouse-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_store` - Cart store behavior against in-memory storage
//! - `storefront_routes` - HTTP round-trips through the full router
//!
//! Nothing here needs a running server: routes are driven with
//! `tower::ServiceExt::oneshot`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use axum::Router;
use teahouse_core::{LineItem, Price};
use teahouse_storefront::config::StorefrontConfig;
use teahouse_storefront::menu::Menu;
use teahouse_storefront::render::CartRenderer;
use teahouse_storefront::routes;
use teahouse_storefront::state::AppState;
use teahouse_storefront::storage::KeyValueStore;

/// Menu used by router tests.
pub const TEST_MENU: &str = r#"[
    {"id": "a", "name": "Tea", "price": 50, "category": "Tea"},
    {"id": "b", "name": "Cake", "price": 120, "category": "Bakes", "description": "Chocolate"}
]"#;

/// One call received by a [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCall {
    /// `render_summary_count(count)`
    Summary(u64),
    /// `render_detailed_list(items, total)`, reduced to `(id, quantity)` pairs.
    Details {
        lines: Vec<(String, u32)>,
        total: Price,
    },
}

/// Renderer that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<RenderCall>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain the recorded calls.
    pub fn take(&mut self) -> Vec<RenderCall> {
        std::mem::take(&mut self.calls)
    }
}

impl CartRenderer for RecordingRenderer {
    fn render_summary_count(&mut self, count: u64) {
        self.calls.push(RenderCall::Summary(count));
    }

    fn render_detailed_list(&mut self, items: &[LineItem], total: Price) {
        let lines = items
            .iter()
            .map(|item| (item.id.to_string(), item.quantity.get()))
            .collect();
        self.calls.push(RenderCall::Details { lines, total });
    }
}

/// Configuration with defaults, serving static files from `static_dir`.
///
/// # Panics
///
/// Panics if the default configuration is rejected, which would be a bug.
#[must_use]
pub fn test_config(static_dir: &Path) -> StorefrontConfig {
    let static_dir = static_dir.display().to_string();
    StorefrontConfig::from_lookup(|key| (key == "TEAHOUSE_STATIC_DIR").then(|| static_dir.clone()))
        .expect("default configuration is valid")
}

/// Build the full router over `storage`.
///
/// # Panics
///
/// Panics if [`TEST_MENU`] does not parse.
#[must_use]
pub fn test_app(storage: impl KeyValueStore + Send + 'static, static_dir: &Path) -> Router {
    let menu = Menu::from_json(TEST_MENU).expect("test menu parses");
    routes::app(AppState::new(test_config(static_dir), menu, storage))
}
