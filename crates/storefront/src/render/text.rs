//! Plain-text renderer for terminal output.

use teahouse_core::{LineItem, Price};

use super::{CartRenderer, EMPTY_CART_TEXT, describe_line, describe_total};

/// Collects rendered output as lines of text.
#[derive(Debug, Default)]
pub struct TextRenderer {
    lines: Vec<String>,
}

impl TextRenderer {
    /// Create a renderer with no pending output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the lines rendered since the last call.
    pub fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl CartRenderer for TextRenderer {
    fn render_summary_count(&mut self, count: u64) {
        let noun = if count == 1 { "item" } else { "items" };
        self.lines.push(format!("Cart: {count} {noun}"));
    }

    fn render_detailed_list(&mut self, items: &[LineItem], total: Price) {
        if items.is_empty() {
            self.lines.push(EMPTY_CART_TEXT.to_owned());
        } else {
            self.lines.extend(items.iter().map(|item| format!("  {}", describe_line(item))));
        }
        self.lines.push(describe_total(total));
    }
}
