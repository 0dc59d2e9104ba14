//! Wire row types for the hosted backend.
//!
//! The backend returns snake_cased rows with nullable flag columns; these
//! types mirror that shape exactly and map into the domain types.

use serde::{Deserialize, Serialize};
use shop_commerce::prelude::*;

/// A product row as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Price in currency units, as stored by the backend.
    pub price: f64,
    #[serde(default)]
    pub discount: Option<u8>,
    pub image: String,
    pub category: String,
    pub category_id: String,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default, rename = "new")]
    pub new_arrival: Option<bool>,
    pub rating: f64,
    pub reviews: u32,
    pub stock: u32,
}

impl ProductRow {
    /// Map into the domain type. A null or zero discount becomes "no
    /// discount"; null flags become false.
    pub fn into_product(self) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name,
            description: self.description,
            price: Money::from_decimal(self.price, Currency::USD),
            discount_percent: self.discount.filter(|d| *d > 0),
            image: self.image,
            category: self.category,
            category_id: CategoryId::new(self.category_id),
            featured: self.featured.unwrap_or(false),
            new_arrival: self.new_arrival.unwrap_or(false),
            rating: self.rating,
            reviews: self.reviews,
            stock: self.stock,
        }
    }
}

/// A category row as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: String,
    pub product_count: u32,
}

impl CategoryRow {
    pub fn into_category(self) -> Category {
        Category::new(
            self.id,
            self.name,
            self.description,
            self.image,
            self.product_count,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_row_mapping() {
        let json = r#"{
            "id": "1",
            "name": "Premium Wireless Headphones",
            "description": "Crystal-clear sound.",
            "price": 299.99,
            "discount": 15,
            "image": "https://example.com/img.jpg",
            "category": "Electronics",
            "category_id": "electronics",
            "featured": true,
            "new": true,
            "rating": 4.8,
            "reviews": 156,
            "stock": 23
        }"#;
        let row: ProductRow = serde_json::from_str(json).unwrap();
        let product = row.into_product();

        assert_eq!(product.id.as_str(), "1");
        assert_eq!(product.price.amount_cents, 29999);
        assert_eq!(product.discount_percent, Some(15));
        assert!(product.featured);
        assert!(product.new_arrival);
    }

    #[test]
    fn test_product_row_null_flags() {
        let json = r#"{
            "id": "3",
            "name": "Casual Cotton T-Shirt",
            "description": "Soft organic cotton.",
            "price": 29.99,
            "discount": null,
            "image": "",
            "category": "Clothing",
            "category_id": "clothing",
            "featured": null,
            "new": null,
            "rating": 4.5,
            "reviews": 210,
            "stock": 100
        }"#;
        let product: Product = serde_json::from_str::<ProductRow>(json)
            .unwrap()
            .into_product();

        assert_eq!(product.discount_percent, None);
        assert!(!product.featured);
        assert!(!product.new_arrival);
        assert!((product.effective_price() - 29.99).abs() < 1e-9);
    }

    #[test]
    fn test_product_row_zero_discount_is_none() {
        let json = r#"{
            "id": "2",
            "name": "Smart Fitness Watch",
            "description": "",
            "price": 199.99,
            "discount": 0,
            "image": "",
            "category": "Electronics",
            "category_id": "electronics",
            "rating": 4.6,
            "reviews": 89,
            "stock": 15
        }"#;
        let product: Product = serde_json::from_str::<ProductRow>(json)
            .unwrap()
            .into_product();
        assert_eq!(product.discount_percent, None);
        assert!(!product.has_discount());
    }

    #[test]
    fn test_category_row_mapping() {
        let json = r#"{
            "id": "home",
            "name": "Home & Living",
            "description": "Home decor and essentials.",
            "image": "",
            "product_count": 31
        }"#;
        let category: Category = serde_json::from_str::<CategoryRow>(json)
            .unwrap()
            .into_category();
        assert_eq!(category.id.as_str(), "home");
        assert_eq!(category.product_count, 31);
    }
}
