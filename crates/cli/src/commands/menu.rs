//! Menu listing command.

use std::path::Path;

use teahouse_storefront::menu::Menu;
use teahouse_storefront::render::format_price;

use super::CommandError;

/// Print the catalog grouped by category.
///
/// # Errors
///
/// Returns an error if the catalog cannot be read or parsed.
pub fn list(path: &Path) -> Result<(), CommandError> {
    let menu = Menu::load(path)?;

    for section in menu.sections() {
        tracing::info!("{}", section.category);
        for item in &section.items {
            tracing::info!("  {:<24} {:>10}  ({})", item.name, format_price(item.price), item.id);
        }
    }
    Ok(())
}
