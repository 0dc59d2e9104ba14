//! Catalog view-model: pure derivation of the displayed product list.
//!
//! `CatalogQuery` owns one page's filter/sort state. It is rebuilt from the
//! URL query string on every request and applied to the loaded catalog with
//! `apply`, which is a pure function of (products, query) and carries no
//! state of its own.

use crate::catalog::Product;
use crate::ids::CategoryId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Upper bound of the price slider, in cents.
pub const PRICE_RANGE_MAX_CENTS: i64 = 50000;

/// Sort keys offered by the listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Featured items first, original order otherwise.
    #[default]
    Featured,
    /// New arrivals first. The flag is a proxy for a real timestamp.
    Newest,
    /// By effective price, low to high.
    PriceLow,
    /// By effective price, high to low.
    PriceHigh,
}

impl SortKey {
    /// Parse the wire value used in the sort select and query string.
    pub fn from_str(s: &str) -> Self {
        match s {
            "newest" => SortKey::Newest,
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            _ => SortKey::Featured,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::Newest => "newest",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::Newest => "Newest",
            SortKey::PriceLow => "Price: Low to High",
            SortKey::PriceHigh => "Price: High to Low",
        }
    }

    /// All keys, in the order the sort select shows them.
    pub fn all() -> [SortKey; 4] {
        [
            SortKey::Featured,
            SortKey::Newest,
            SortKey::PriceLow,
            SortKey::PriceHigh,
        ]
    }
}

/// Filter/sort configuration for the catalog listing.
///
/// Transient: owned by the rendering request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogQuery {
    /// Selected category IDs. Empty means no category filter.
    pub categories: Vec<CategoryId>,
    /// Inclusive lower bound on the effective price.
    pub price_min: Money,
    /// Inclusive upper bound on the effective price.
    pub price_max: Money,
    /// Free-text search. Empty disables the search predicate.
    pub search: String,
    /// Sort key applied after filtering.
    pub sort: SortKey,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogQuery {
    /// The unfiltered default: all categories, full price range, no search,
    /// featured sort.
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
            price_min: Money::zero(Currency::USD),
            price_max: Money::new(PRICE_RANGE_MAX_CENTS, Currency::USD),
            search: String::new(),
            sort: SortKey::Featured,
        }
    }

    /// Parse a query from a URL query string.
    ///
    /// Recognized keys: `category` (repeatable or comma-separated),
    /// `min_price`/`max_price` (decimal currency units), `q`, `sort`.
    /// Unknown keys and unparsable values fall back to the defaults.
    pub fn from_query_string(qs: &str) -> Self {
        let mut query = Self::new();

        for pair in qs.split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = parts.next().unwrap_or("");
            let decoded = urlencoding_decode(value);

            match key {
                "category" => {
                    for id in decoded.split(',').filter(|s| !s.is_empty()) {
                        let id = CategoryId::new(id);
                        if !query.categories.contains(&id) {
                            query.categories.push(id);
                        }
                    }
                }
                "min_price" => {
                    if let Ok(v) = decoded.parse::<f64>() {
                        query.price_min = Money::from_decimal(v, Currency::USD);
                    }
                }
                "max_price" => {
                    if let Ok(v) = decoded.parse::<f64>() {
                        query.price_max = Money::from_decimal(v, Currency::USD);
                    }
                }
                "q" => query.search = decoded,
                "sort" => query.sort = SortKey::from_str(&decoded),
                _ => {}
            }
        }

        query
    }

    /// Add a selected category.
    pub fn with_category(mut self, id: impl Into<CategoryId>) -> Self {
        self.categories.push(id.into());
        self
    }

    /// Set the inclusive price range.
    pub fn with_price_range(mut self, min: Money, max: Money) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the sort key.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Whether any filter deviates from the defaults (drives the
    /// "Clear all" affordance and the active-filter chips).
    pub fn has_active_filters(&self) -> bool {
        !self.categories.is_empty()
            || !self.search.is_empty()
            || !self.price_min.is_zero()
            || self.price_max.amount_cents < PRICE_RANGE_MAX_CENTS
    }

    /// Check a single product against all active predicates (AND-combined).
    pub fn matches(&self, product: &Product) -> bool {
        // Category: empty selection means no category filter.
        if !self.categories.is_empty() && !self.categories.contains(&product.category_id) {
            return false;
        }

        // Price: inclusive bounds on the effective (discounted) price.
        let price = product.effective_price();
        if price < self.price_min.to_decimal() || price > self.price_max.to_decimal() {
            return false;
        }

        // Search: empty query disables the predicate entirely.
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = product.name.to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle)
                || product.category.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        true
    }

    /// Derive the ordered product list for display.
    ///
    /// Filters first, then sorts. All sorts are stable: the featured and
    /// newest sorts partition on their flag and preserve the original
    /// relative order within each group, and equal effective prices keep
    /// their input order under the price sorts.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut result: Vec<Product> = products
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect();

        match self.sort {
            SortKey::Featured => result.sort_by_key(|p| !p.featured),
            SortKey::Newest => result.sort_by_key(|p| !p.new_arrival),
            SortKey::PriceLow => {
                result.sort_by(|a, b| a.effective_price().total_cmp(&b.effective_price()))
            }
            SortKey::PriceHigh => {
                result.sort_by(|a, b| b.effective_price().total_cmp(&a.effective_price()))
            }
        }

        result
    }
}

/// Minimal percent-decoding for query string values.
fn urlencoding_decode(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '%' {
            let hex: String = chars.by_ref().take(2).collect();
            if let Ok(byte) = u8::from_str_radix(&hex, 16) {
                result.push(byte as char);
            }
        } else if c == '+' {
            result.push(' ');
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn sample() -> Vec<Product> {
        vec![
            Product::new("1", "Premium Wireless Headphones", usd(29999), "Electronics", "electronics")
                .with_description("Crystal-clear sound with active noise cancellation.")
                .with_discount(15)
                .featured()
                .new_arrival()
                .with_stock(23),
            Product::new("2", "Smart Fitness Watch", usd(19999), "Electronics", "electronics")
                .with_description("Track your fitness goals.")
                .featured()
                .with_stock(15),
            Product::new("3", "Casual Cotton T-Shirt", usd(2999), "Clothing", "clothing")
                .with_description("Soft, breathable organic cotton.")
                .with_discount(10)
                .with_stock(100),
            Product::new("4", "Designer Leather Wallet", usd(5999), "Accessories", "accessories")
                .with_description("Elegant leather wallet with RFID protection.")
                .featured()
                .with_stock(30),
            Product::new("5", "Portable Bluetooth Speaker", usd(8999), "Electronics", "electronics")
                .with_description("Compact yet powerful speaker.")
                .new_arrival()
                .with_stock(18),
        ]
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_default_query_is_stable_featured_partition() {
        // Empty categories, full price range, empty search: identity modulo
        // the stable featured-first partition.
        let result = CatalogQuery::new().apply(&sample());
        assert_eq!(ids(&result), vec!["1", "2", "4", "3", "5"]);
    }

    #[test]
    fn test_empty_category_selection_means_all() {
        let query = CatalogQuery::new().with_sort(SortKey::PriceLow);
        assert_eq!(query.apply(&sample()).len(), 5);
    }

    #[test]
    fn test_category_filter() {
        let query = CatalogQuery::new().with_category("electronics");
        let result = query.apply(&sample());
        assert!(result.iter().all(|p| p.category_id.as_str() == "electronics"));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_multiple_category_filter() {
        let query = CatalogQuery::new()
            .with_category("clothing")
            .with_category("accessories");
        assert_eq!(ids(&query.apply(&sample())), vec!["4", "3"]);
    }

    #[test]
    fn test_price_filter_uses_effective_price() {
        // Headphones: $299.99 at 15% off = $254.9915; a max of $254.99
        // excludes them, a max of $255 keeps them.
        let query = CatalogQuery::new().with_price_range(usd(25000), usd(25499));
        assert!(query.apply(&sample()).is_empty());

        let query = CatalogQuery::new().with_price_range(usd(25000), usd(25500));
        assert_eq!(ids(&query.apply(&sample())), vec!["1"]);
    }

    #[test]
    fn test_price_bounds_inclusive() {
        // Fitness watch sits exactly at $199.99 with no discount.
        let query = CatalogQuery::new().with_price_range(usd(19999), usd(19999));
        assert_eq!(ids(&query.apply(&sample())), vec!["2"]);
    }

    #[test]
    fn test_excluding_price_range_yields_empty() {
        let query = CatalogQuery::new().with_price_range(usd(100000), usd(200000));
        assert!(query.apply(&sample()).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let query = CatalogQuery::new().with_search("SHIRT");
        assert_eq!(ids(&query.apply(&sample())), vec!["3"]);
    }

    #[test]
    fn test_search_matches_description_and_category() {
        let query = CatalogQuery::new().with_search("rfid");
        assert_eq!(ids(&query.apply(&sample())), vec!["4"]);

        let query = CatalogQuery::new().with_search("accessor").with_sort(SortKey::Newest);
        assert_eq!(ids(&query.apply(&sample())), vec!["4"]);
    }

    #[test]
    fn test_empty_search_disables_predicate() {
        let query = CatalogQuery::new().with_search("");
        assert_eq!(query.apply(&sample()).len(), 5);
    }

    #[test]
    fn test_predicates_and_combined() {
        let query = CatalogQuery::new()
            .with_category("electronics")
            .with_price_range(usd(0), usd(10000))
            .with_search("speaker");
        assert_eq!(ids(&query.apply(&sample())), vec!["5"]);
    }

    #[test]
    fn test_sort_newest_stable_partition() {
        let result = CatalogQuery::new().with_sort(SortKey::Newest).apply(&sample());
        assert_eq!(ids(&result), vec!["1", "5", "2", "3", "4"]);
    }

    #[test]
    fn test_sort_price_low_and_high_reverse() {
        let low = CatalogQuery::new().with_sort(SortKey::PriceLow).apply(&sample());
        let high = CatalogQuery::new().with_sort(SortKey::PriceHigh).apply(&sample());

        // All effective prices are distinct, so the orders are exact mirrors.
        let mut reversed = ids(&high);
        reversed.reverse();
        assert_eq!(ids(&low), reversed);
        assert_eq!(ids(&low), vec!["3", "4", "5", "2", "1"]);
    }

    #[test]
    fn test_price_low_orders_by_effective_price() {
        // A at $100 with no discount, B at $100 with 50% off.
        let products = vec![
            Product::new("a", "A", usd(10000), "Electronics", "electronics").with_stock(1),
            Product::new("b", "B", usd(10000), "Electronics", "electronics")
                .with_discount(50)
                .with_stock(1),
        ];
        let result = CatalogQuery::new().with_sort(SortKey::PriceLow).apply(&products);
        assert_eq!(ids(&result), vec!["b", "a"]);
        assert!((result[0].effective_price() - 50.0).abs() < 1e-9);
        assert!((result[1].effective_price() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_search_shirt_example() {
        let products = vec![
            Product::new("1", "Cotton T-Shirt", usd(2999), "Clothing", "clothing").with_stock(1),
            Product::new("2", "Leather Wallet", usd(5999), "Accessories", "accessories")
                .with_stock(1),
        ];
        let result = CatalogQuery::new().with_search("shirt").apply(&products);
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn test_from_query_string() {
        let query = CatalogQuery::from_query_string(
            "category=electronics,clothing&min_price=10&max_price=250&q=wireless+audio&sort=price-high",
        );
        assert_eq!(query.categories.len(), 2);
        assert_eq!(query.price_min.amount_cents, 1000);
        assert_eq!(query.price_max.amount_cents, 25000);
        assert_eq!(query.search, "wireless audio");
        assert_eq!(query.sort, SortKey::PriceHigh);
        assert!(query.has_active_filters());
    }

    #[test]
    fn test_from_query_string_defaults() {
        let query = CatalogQuery::from_query_string("");
        assert_eq!(query, CatalogQuery::new());
        assert!(!query.has_active_filters());

        // Garbage values fall back to defaults rather than failing.
        let query = CatalogQuery::from_query_string("min_price=abc&sort=bogus&page=2");
        assert_eq!(query.price_min.amount_cents, 0);
        assert_eq!(query.sort, SortKey::Featured);
    }

    #[test]
    fn test_sort_key_round_trip() {
        for key in SortKey::all() {
            assert_eq!(SortKey::from_str(key.as_str()), key);
        }
        assert_eq!(SortKey::from_str("anything-else"), SortKey::Featured);
    }
}
