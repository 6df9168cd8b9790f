/// Filter engine: category and price-range selection over the catalog
use super::data::ProductRef;

/// Criteria derived from the current control values
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// `None` matches every category
    pub category: Option<String>,
    pub min_price: f64,
    pub max_price: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            category: None,
            min_price: 0.0,
            max_price: f64::INFINITY,
        }
    }
}

impl FilterCriteria {
    /// Build criteria from raw control values.
    /// An empty category means "any"; unusable price text means "no bound".
    pub fn from_inputs(category: Option<&str>, min_input: &str, max_input: &str) -> Self {
        Self {
            category: category.filter(|c| !c.is_empty()).map(str::to_string),
            min_price: parse_price_input(min_input, 0.0),
            max_price: parse_price_input(max_input, f64::INFINITY),
        }
    }

    pub fn matches(&self, product: &ProductRef) -> bool {
        let category_match = self
            .category
            .as_ref()
            .map_or(true, |category| &product.category == category);
        let price_match = product.price >= self.min_price && product.price <= self.max_price;
        category_match && price_match
    }
}

/// Keep every product matching the criteria, in input order.
/// `min_price > max_price` simply yields nothing.
pub fn filter_products(products: &[ProductRef], criteria: &FilterCriteria) -> Vec<ProductRef> {
    products
        .iter()
        .filter(|product| criteria.matches(product))
        .cloned()
        .collect()
}

/// Parse a price field the way a browser's `parseFloat` reads it: leading
/// whitespace is skipped and the longest numeric prefix wins, so "12abc"
/// reads as 12. Text without a numeric prefix yields `default`.
pub fn parse_price_input(input: &str, default: f64) -> f64 {
    let trimmed = input.trim_start();
    let prefix = &trimmed[..numeric_prefix_len(trimmed)];
    match prefix.parse::<f64>() {
        Ok(value) if !value.is_nan() => value,
        _ => default,
    }
}

/// Length in bytes of the longest `[+-]digits[.digits][e[+-]digits]` prefix
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+') | Some(b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::fixtures::product;
    use std::sync::Arc;

    fn names(products: &[ProductRef]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    fn sample() -> Vec<ProductRef> {
        vec![
            product("B", 10.0, 4.0, "X"),
            product("A", 5.0, 4.0, "Y"),
            product("C", 25.0, 3.5, "X"),
        ]
    }

    #[test]
    fn test_parse_price_input() {
        assert_eq!(parse_price_input("42", 0.0), 42.0);
        assert_eq!(parse_price_input("  19.99", 0.0), 19.99);
        assert_eq!(parse_price_input("12abc", 0.0), 12.0);
        assert_eq!(parse_price_input(".5", 0.0), 0.5);
        assert_eq!(parse_price_input("3.", 0.0), 3.0);
        assert_eq!(parse_price_input("1e3", 0.0), 1000.0);
        assert_eq!(parse_price_input("2e", 0.0), 2.0);
        assert_eq!(parse_price_input("-7", 0.0), -7.0);
        assert_eq!(parse_price_input("", 0.0), 0.0);
        assert_eq!(parse_price_input("abc", f64::INFINITY), f64::INFINITY);
        assert_eq!(parse_price_input("-", 5.0), 5.0);
        assert_eq!(parse_price_input(".", 5.0), 5.0);
        assert_eq!(parse_price_input("NaN", 5.0), 5.0);
    }

    #[test]
    fn test_unparseable_inputs_default_to_open_range() {
        let criteria = FilterCriteria::from_inputs(Some("X"), "", "abc");
        assert_eq!(criteria.min_price, 0.0);
        assert_eq!(criteria.max_price, f64::INFINITY);

        let result = filter_products(&sample(), &criteria);
        assert_eq!(names(&result), vec!["B", "C"]);
    }

    #[test]
    fn test_filter_by_category() {
        let criteria = FilterCriteria::from_inputs(Some("X"), "", "");
        assert_eq!(names(&filter_products(&sample(), &criteria)), vec!["B", "C"]);
    }

    #[test]
    fn test_empty_category_means_any() {
        let criteria = FilterCriteria::from_inputs(Some(""), "", "");
        assert_eq!(criteria.category, None);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let criteria = FilterCriteria::from_inputs(None, "5", "10");
        assert_eq!(names(&filter_products(&sample(), &criteria)), vec!["B", "A"]);
    }

    #[test]
    fn test_explicit_zero_max_is_a_bound() {
        let criteria = FilterCriteria::from_inputs(None, "", "0");
        assert_eq!(criteria.max_price, 0.0);
        assert!(filter_products(&sample(), &criteria).is_empty());
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let criteria = FilterCriteria::from_inputs(None, "20", "10");
        assert!(filter_products(&sample(), &criteria).is_empty());
    }

    #[test]
    fn test_no_match_is_empty() {
        let criteria = FilterCriteria::from_inputs(Some("Z"), "", "");
        assert!(filter_products(&sample(), &criteria).is_empty());
    }

    #[test]
    fn test_open_criteria_returns_input_unchanged() {
        let products = sample();
        let result = filter_products(&products, &FilterCriteria::default());

        assert_eq!(result.len(), products.len());
        for (kept, original) in result.iter().zip(&products) {
            assert!(Arc::ptr_eq(kept, original));
        }
    }
}
