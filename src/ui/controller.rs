/// UI controller: owns the view state and runs the filter → sort → render
/// pipeline in response to user actions.
use tracing::debug;

use crate::state::data::{Catalog, ProductRef};
use crate::state::filter::{filter_products, FilterCriteria};
use crate::state::sort::{sort_products, SortCriterion};

use super::render::{format_number, patch_images, render_cards, ProductCard};

/// Browsing session over a loaded catalog.
///
/// The catalog is never modified; every action derives a fresh filtered
/// list and a fresh set of cards from it.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    currency: String,
    width: f32,

    // Control values
    category: Option<String>,
    min_input: String,
    max_input: String,
    active_sort: Option<SortCriterion>,

    /// Last filtered (and sorted) result; empty until a filter runs and after reset
    filtered: Vec<ProductRef>,
    /// Cards currently on screen
    cards: Vec<ProductCard>,
}

impl Session {
    /// Start a session showing the full catalog in load order
    pub fn new(catalog: Catalog, width: f32, currency: impl Into<String>) -> Self {
        let currency = currency.into();
        let cards = render_cards(&catalog.products, width, &currency);
        Self {
            catalog,
            currency,
            width,
            category: None,
            min_input: String::new(),
            max_input: String::new(),
            active_sort: None,
            filtered: Vec::new(),
            cards,
        }
    }

    /// Category selector changed (`None` = all categories)
    pub fn select_category(&mut self, category: Option<String>) {
        self.category = category;
        self.apply();
    }

    /// Edit the min price field without filtering
    pub fn set_min_input(&mut self, value: String) {
        self.min_input = value;
    }

    /// Edit the max price field without filtering
    pub fn set_max_input(&mut self, value: String) {
        self.max_input = value;
    }

    /// Price filter submitted
    pub fn apply_price_filter(&mut self) {
        self.apply();
    }

    /// A sort button was pressed; it becomes the only active one
    pub fn press_sort(&mut self, criterion: SortCriterion) {
        self.active_sort = Some(criterion);
        self.apply();
    }

    /// Clear every control and show the full, unsorted catalog
    pub fn reset(&mut self) {
        self.category = None;
        self.min_input.clear();
        self.max_input.clear();
        self.active_sort = None;
        self.filtered.clear();
        self.cards = render_cards(&self.catalog.products, self.width, &self.currency);
        debug!("Filters reset, showing {} products", self.cards.len());
    }

    /// Settled viewport width: patch image references only
    pub fn resize(&mut self, width: f32) {
        self.width = width;
        let changed = patch_images(&mut self.cards, width);
        debug!("Viewport width {} px, {} images re-selected", width, changed);
    }

    fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_inputs(self.category.as_deref(), &self.min_input, &self.max_input)
    }

    fn apply(&mut self) {
        let criteria = self.criteria();
        let filtered = filter_products(&self.catalog.products, &criteria);
        self.filtered = match self.active_sort {
            Some(criterion) => sort_products(&filtered, Some(criterion)),
            None => filtered,
        };
        self.cards = render_cards(&self.filtered, self.width, &self.currency);

        debug!(
            "Applied {:?} sorted by {:?}: {} of {} products",
            criteria,
            self.active_sort.map(SortCriterion::id),
            self.filtered.len(),
            self.catalog.products.len()
        );
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn min_input(&self) -> &str {
        &self.min_input
    }

    pub fn max_input(&self) -> &str {
        &self.max_input
    }

    pub fn active_sort(&self) -> Option<SortCriterion> {
        self.active_sort
    }

    /// Placeholder for the max price field: the catalog's highest price
    pub fn max_price_placeholder(&self) -> String {
        self.catalog.max_price().map(format_number).unwrap_or_default()
    }
}

#[cfg(test)]
impl Session {
    pub fn filtered(&self) -> &[ProductRef] {
        &self.filtered
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}
