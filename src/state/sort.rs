/// Sort engine: stable, comparator-based ordering of a product sequence
use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use tracing::warn;

use super::data::{Product, ProductRef};

/// The available sort orders, one per sort button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortCriterion {
    /// Name, ascending
    Name,
    PriceAsc,
    PriceDesc,
    /// Rating, best first
    Rating,
}

impl SortCriterion {
    /// Button order in the toolbar
    pub const ALL: [SortCriterion; 4] = [
        SortCriterion::Name,
        SortCriterion::PriceAsc,
        SortCriterion::PriceDesc,
        SortCriterion::Rating,
    ];

    /// Stable identifier ("name", "priceAsc", "priceDesc", "rating")
    pub fn id(self) -> &'static str {
        match self {
            SortCriterion::Name => "name",
            SortCriterion::PriceAsc => "priceAsc",
            SortCriterion::PriceDesc => "priceDesc",
            SortCriterion::Rating => "rating",
        }
    }

    /// Look up a criterion by identifier; unknown identifiers give `None`
    #[cfg(test)]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|criterion| criterion.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            SortCriterion::Name => "По названию",
            SortCriterion::PriceAsc => "Цена ↑",
            SortCriterion::PriceDesc => "Цена ↓",
            SortCriterion::Rating => "По рейтингу",
        }
    }

    fn compare(self, names: &NameOrder, a: &Product, b: &Product) -> Ordering {
        match self {
            SortCriterion::Name => names.compare(&a.name, &b.name),
            SortCriterion::PriceAsc => a.price.total_cmp(&b.price),
            SortCriterion::PriceDesc => b.price.total_cmp(&a.price),
            SortCriterion::Rating => b.rating.total_cmp(&a.rating),
        }
    }
}

/// Return a new sequence ordered by `criterion`.
/// Equal keys keep their input order; `None` returns the input order.
pub fn sort_products(products: &[ProductRef], criterion: Option<SortCriterion>) -> Vec<ProductRef> {
    let mut sorted = products.to_vec();
    if let Some(criterion) = criterion {
        let names = NameOrder::new();
        sorted.sort_by(|a, b| criterion.compare(&names, a, b));
    }
    sorted
}

/// Locale-aware name comparison using the root (CLDR) collation:
/// accents and case are secondary to the base letter, Latin sorts before
/// Cyrillic, and "ё" sits next to "е".
struct NameOrder {
    collator: Option<Collator>,
}

impl NameOrder {
    fn new() -> Self {
        let collator = match Collator::try_new(&Default::default(), CollatorOptions::new()) {
            Ok(collator) => Some(collator),
            Err(err) => {
                warn!("Collation data unavailable, sorting names by code point: {}", err);
                None
            }
        };
        Self { collator }
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        }
    }
}
