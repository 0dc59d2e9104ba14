//! Product reference data.

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the storefront catalog.
///
/// Immutable reference data; loaded once per request from the seed catalog
/// or the hosted backend, never mutated by the storefront.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Base price before any discount.
    pub price: Money,
    /// Percentage discount (0-100). None or 0 means no discount.
    pub discount_percent: Option<u8>,
    /// Image URL.
    pub image: String,
    /// Display name of the category.
    pub category: String,
    /// Category identifier.
    pub category_id: CategoryId,
    /// Shown in the featured rail and sorted first under the featured sort.
    #[serde(default)]
    pub featured: bool,
    /// "New arrival" flag. Stands in for a real timestamp; the newest sort
    /// partitions on it rather than ordering by date.
    #[serde(default)]
    pub new_arrival: bool,
    /// Average rating (0-5).
    pub rating: f64,
    /// Number of reviews.
    pub reviews: u32,
    /// Units in stock.
    pub stock: u32,
}

impl Product {
    /// Create a product with the required fields; optional fields default off.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
        category_id: impl Into<CategoryId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            discount_percent: None,
            image: String::new(),
            category: category.into(),
            category_id: category_id.into(),
            featured: false,
            new_arrival: false,
            rating: 0.0,
            reviews: 0,
            stock: 0,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the discount percentage.
    pub fn with_discount(mut self, percent: u8) -> Self {
        self.discount_percent = if percent > 0 { Some(percent) } else { None };
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Mark as featured.
    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Mark as a new arrival.
    pub fn new_arrival(mut self) -> Self {
        self.new_arrival = true;
        self
    }

    /// Set rating and review count.
    pub fn with_rating(mut self, rating: f64, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    /// Set the stock count.
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// The discount percentage, with absent treated as zero.
    pub fn discount(&self) -> u8 {
        self.discount_percent.unwrap_or(0).min(100)
    }

    /// Check if the product carries a discount.
    pub fn has_discount(&self) -> bool {
        self.discount() > 0
    }

    /// Effective price in currency units: base price reduced by the
    /// discount percentage.
    ///
    /// Derived on demand and never stored; rounding happens only when the
    /// value is formatted for display. A product with no discount uses its
    /// base price. The result is never negative (discount is capped at 100).
    pub fn effective_price(&self) -> f64 {
        let base = self.price.to_decimal();
        base - base * f64::from(self.discount()) / 100.0
    }

    /// Effective price formatted for display (e.g., "$254.99").
    pub fn display_effective_price(&self) -> String {
        Money::display_decimal(self.price.currency, self.effective_price())
    }

    /// Check if the product can be added to the cart.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Stock status message for product pages.
    pub fn stock_message(&self) -> String {
        if self.stock == 0 {
            "Out of Stock".to_string()
        } else if self.stock <= 5 {
            format!("Only {} left", self.stock)
        } else {
            "In Stock".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product(price_cents: i64, discount: u8) -> Product {
        Product::new(
            "1",
            "Test Product",
            Money::new(price_cents, Currency::USD),
            "Electronics",
            "electronics",
        )
        .with_discount(discount)
    }

    #[test]
    fn test_effective_price_no_discount() {
        let p = product(29999, 0);
        assert!((p.effective_price() - 299.99).abs() < 1e-9);
        assert!(!p.has_discount());
    }

    #[test]
    fn test_effective_price_with_discount() {
        let p = product(10000, 50);
        assert!((p.effective_price() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_effective_price_unrounded() {
        // 15% off $299.99 = $254.9915; the raw value keeps the fraction.
        let p = product(29999, 15);
        assert!((p.effective_price() - 254.9915).abs() < 1e-9);
        assert_eq!(p.display_effective_price(), "$254.99");
    }

    #[test]
    fn test_effective_price_never_negative() {
        let p = product(10000, 100);
        assert_eq!(p.effective_price(), 0.0);

        // Out-of-range discounts are capped rather than going negative.
        let mut p = product(10000, 0);
        p.discount_percent = Some(250);
        assert!(p.effective_price() >= 0.0);
    }

    #[test]
    fn test_stock_message() {
        assert_eq!(product(100, 0).with_stock(0).stock_message(), "Out of Stock");
        assert_eq!(product(100, 0).with_stock(3).stock_message(), "Only 3 left");
        assert_eq!(product(100, 0).with_stock(23).stock_message(), "In Stock");
    }
}
