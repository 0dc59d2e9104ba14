//! Product catalog module.
//!
//! Reference data (products, categories) plus the view-model that derives
//! the displayed list from a filter/sort configuration.

mod category;
mod product;
mod view;

pub use category::Category;
pub use product::Product;
pub use view::{CatalogQuery, SortKey, PRICE_RANGE_MAX_CENTS};

use crate::ids::{CategoryId, ProductId};
use serde::{Deserialize, Serialize};

/// The loaded catalog: full product and category collections.
///
/// The view-model is agnostic to where this came from (static seed data or
/// the hosted backend); a failed upstream fetch is represented as an empty
/// catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Create a catalog from collections.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// An empty catalog, used when the upstream fetch failed.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.categories.is_empty()
    }

    /// Products carrying the featured flag, in catalog order.
    pub fn featured_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// New arrivals, in catalog order.
    pub fn new_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.new_arrival).collect()
    }

    /// Products belonging to a category.
    pub fn products_in_category(&self, category_id: &CategoryId) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| &p.category_id == category_id)
            .collect()
    }

    /// Look up a product by ID.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a category by ID.
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn catalog() -> Catalog {
        let products = vec![
            Product::new("1", "Headphones", Money::new(29999, Currency::USD), "Electronics", "electronics")
                .featured()
                .new_arrival(),
            Product::new("2", "T-Shirt", Money::new(2999, Currency::USD), "Clothing", "clothing"),
            Product::new("3", "Watch", Money::new(19999, Currency::USD), "Electronics", "electronics")
                .featured(),
        ];
        let categories = vec![
            Category::new("electronics", "Electronics", "", "", 2),
            Category::new("clothing", "Clothing", "", "", 1),
        ];
        Catalog::new(products, categories)
    }

    #[test]
    fn test_featured_and_new() {
        let c = catalog();
        assert_eq!(c.featured_products().len(), 2);
        assert_eq!(c.new_products().len(), 1);
    }

    #[test]
    fn test_products_in_category() {
        let c = catalog();
        let electronics = c.products_in_category(&CategoryId::new("electronics"));
        assert_eq!(electronics.len(), 2);
        assert!(c.products_in_category(&CategoryId::new("home")).is_empty());
    }

    #[test]
    fn test_lookups() {
        let c = catalog();
        assert!(c.product(&ProductId::new("2")).is_some());
        assert!(c.product(&ProductId::new("99")).is_none());
        assert_eq!(c.category(&CategoryId::new("clothing")).unwrap().name, "Clothing");
    }

    #[test]
    fn test_empty_catalog() {
        let c = Catalog::empty();
        assert!(c.is_empty());
        assert!(c.featured_products().is_empty());
    }
}
