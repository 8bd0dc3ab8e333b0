//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::menu::{MenuItem, MenuSection};
use crate::render::format_price;
use crate::state::AppState;

/// Menu card display data for templates.
#[derive(Clone)]
pub struct MenuItemView {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Raw amount submitted with the add-to-cart form.
    pub price: String,
    /// Amount with currency label.
    pub price_label: String,
}

impl From<&MenuItem> for MenuItemView {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price.to_string(),
            price_label: format_price(item.price),
        }
    }
}

/// A titled group of menu cards.
#[derive(Clone)]
pub struct MenuSectionView {
    pub category: String,
    pub items: Vec<MenuItemView>,
}

impl From<&MenuSection> for MenuSectionView {
    fn from(section: &MenuSection) -> Self {
        Self {
            category: section.category.clone(),
            items: section.items.iter().map(MenuItemView::from).collect(),
        }
    }
}

/// Review display data for templates.
#[derive(Clone)]
pub struct ReviewView {
    pub author: &'static str,
    pub body: &'static str,
    pub rating: u8,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Menu grouped by category.
    pub sections: Vec<MenuSectionView>,
    /// Featured customer reviews.
    pub reviews: Vec<ReviewView>,
    /// Initial value of the cart badges.
    pub cart_count: u64,
}

/// Static testimonials shown below the menu.
fn featured_reviews() -> Vec<ReviewView> {
    vec![
        ReviewView {
            author: "Ayesha",
            body: "The masala chai tastes exactly like home.",
            rating: 5,
        },
        ReviewView {
            author: "Rohan",
            body: "Great cakes, cosy corner seats, friendly staff.",
            rating: 5,
        },
        ReviewView {
            author: "Meera",
            body: "Come for the cardamom tea, stay for the samosas.",
            rating: 4,
        },
    ]
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> Result<HomeTemplate> {
    let sections = state
        .menu()
        .sections()
        .iter()
        .map(MenuSectionView::from)
        .collect();

    let cart_count = state.with_cart(|cart| cart.total_quantity()).await?;

    Ok(HomeTemplate {
        sections,
        reviews: featured_reviews(),
        cart_count,
    })
}
