/// Renderer: turns products into display-ready card models
///
/// The cards are plain data. Binding them to widgets happens in `cards.rs`,
/// so everything here can be checked without a window.
use crate::state::data::ProductRef;

use super::viewport::{select_variant, Variant};

/// Everything one product card shows
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    /// The product this card was built from
    pub product: ProductRef,
    /// Variant the image reference was selected for
    pub variant: Variant,
    pub image: String,
    pub alt: String,
    pub name: String,
    pub description: String,
    /// Price with two decimals and the currency suffix
    pub price: String,
    pub rating: String,
    pub category: String,
}

impl ProductCard {
    pub fn new(product: &ProductRef, width: f32, currency: &str) -> Self {
        let variant = select_variant(width);
        Self {
            product: ProductRef::clone(product),
            variant,
            image: product.image.get(variant).to_string(),
            alt: product.name.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: format_price(product.price, currency),
            rating: format_number(product.rating),
            category: product.category.clone(),
        }
    }
}

/// Build one card per product, in input order
pub fn render_cards(products: &[ProductRef], width: f32, currency: &str) -> Vec<ProductCard> {
    products
        .iter()
        .map(|product| ProductCard::new(product, width, currency))
        .collect()
}

/// Re-select the image of every card for a new width.
/// Returns how many cards changed.
pub fn patch_images(cards: &mut [ProductCard], width: f32) -> usize {
    let variant = select_variant(width);
    let mut changed = 0;
    for card in cards.iter_mut().filter(|card| card.variant != variant) {
        card.variant = variant;
        card.image = card.product.image.get(variant).to_string();
        changed += 1;
    }
    changed
}

/// Two decimals, with exact half-cent ties going to the larger value
/// (`{:.2}` alone would round them to even).
pub fn format_price(price: f64, currency: &str) -> String {
    // A double sits exactly on a half cent only when it is an odd number of eighths
    let eighths = price * 8.0;
    let amount = if eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0 {
        (price * 100.0).ceil() / 100.0
    } else {
        price
    };
    format!("{:.2} {}", amount, currency)
}

/// Shortest plain rendering of a number ("4", "4.5", "1299.9")
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // no "-0"
        return "0".to_string();
    }
    value.to_string()
}
