use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use super::data::{Catalog, CatalogDocument, Product};
use crate::error::CatalogError;

/// Load the catalog document once at startup.
///
/// Relative image references in the document are later resolved against
/// the directory the document lives in.
pub async fn load_catalog(path: PathBuf) -> Result<Catalog, CatalogError> {
    info!("📁 Loading catalog from {}", path.display());

    let contents = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| CatalogError::Read {
            path: path.clone(),
            source,
        })?;

    let catalog = parse_catalog(&contents, catalog_dir(&path)).map_err(|err| match err {
        ParseFailure::Json(source) => CatalogError::Parse { path, source },
        ParseFailure::Invalid(err) => err,
    })?;

    info!(
        "✅ Catalog loaded: {} products in {} categories",
        catalog.products.len(),
        catalog.categories.len()
    );

    Ok(catalog)
}

/// Directory that relative image references in the catalog resolve against
fn catalog_dir(catalog_path: &Path) -> PathBuf {
    catalog_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

/// Why a document could not become a catalog
#[derive(Debug)]
pub enum ParseFailure {
    Json(serde_json::Error),
    Invalid(CatalogError),
}

/// Parse and validate a catalog document
pub fn parse_catalog(json: &str, base_dir: PathBuf) -> Result<Catalog, ParseFailure> {
    let document: CatalogDocument = serde_json::from_str(json).map_err(ParseFailure::Json)?;

    let mut categories: Vec<String> = Vec::with_capacity(document.categories.len());
    for category in document.categories {
        if categories.contains(&category) {
            warn!("Duplicate category \"{}\" ignored", category);
            continue;
        }
        categories.push(category);
    }

    let mut products = Vec::with_capacity(document.products.len());
    for product in document.products {
        validate_product(&product).map_err(ParseFailure::Invalid)?;
        if !categories.contains(&product.category) {
            warn!(
                "Product \"{}\" has undeclared category \"{}\"",
                product.name, product.category
            );
        }
        products.push(Arc::new(product));
    }

    Ok(Catalog {
        products,
        categories,
        base_dir,
    })
}

fn validate_product(product: &Product) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidProduct {
        name: product.name.clone(),
        reason,
    };

    if !product.price.is_finite() || product.price < 0.0 {
        return Err(invalid(format!("price {} is not a non-negative number", product.price)));
    }
    if !product.rating.is_finite() {
        return Err(invalid(format!("rating {} is not a number", product.rating)));
    }
    Ok(())
}
