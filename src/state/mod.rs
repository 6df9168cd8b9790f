/// State management module
///
/// This module handles the catalog data and the pure pipeline over it:
/// - Shared data structures (data.rs)
/// - Loading and validating the catalog document (catalog.rs)
/// - Category and price filtering (filter.rs)
/// - Sort orders (sort.rs)

pub mod catalog;
pub mod data;
pub mod filter;
pub mod sort;
