/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the catalog loader, the filter/sort pipeline and the UI layer.
use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// One of the three responsive image renditions of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Mobile,
    Tablet,
    Desktop,
}

/// Image references for each viewport bucket (URL or path)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ImageSet {
    pub mobile: String,
    pub tablet: String,
    pub desktop: String,
}

impl ImageSet {
    pub fn get(&self, variant: Variant) -> &str {
        match variant {
            Variant::Mobile => &self.mobile,
            Variant::Tablet => &self.tablet,
            Variant::Desktop => &self.desktop,
        }
    }
}

/// Represents a single product in the catalog.
/// Immutable once loaded; shared between the catalog and every derived view.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    /// Display name, also the alt text and the "name" sort key
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Non-negative price
    pub price: f64,
    pub rating: f64,
    /// Expected to be one of the catalog's declared categories
    pub category: String,
    pub image: ImageSet,
}

/// Shared handle to a loaded product.
/// Filtering and sorting clone handles, never product data.
pub type ProductRef = Arc<Product>;

/// The startup document as it appears on disk
#[derive(Deserialize, Debug)]
pub struct CatalogDocument {
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// The full, read-only catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Products in load order (the default display order)
    pub products: Vec<ProductRef>,
    /// Unique category names in declaration order
    pub categories: Vec<String>,
    /// Directory relative image references resolve against
    pub base_dir: PathBuf,
}

impl Catalog {
    /// Highest price in the catalog, found with a single scan.
    /// `None` for an empty catalog.
    pub fn max_price(&self) -> Option<f64> {
        self.products
            .iter()
            .map(|product| product.price)
            .fold(None, |max, price| match max {
                Some(current) if current >= price => Some(current),
                _ => Some(price),
            })
    }
}
