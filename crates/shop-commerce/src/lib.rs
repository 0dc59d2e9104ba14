//! Commerce domain types and logic for the NextCommerce storefront.
//!
//! - **Catalog**: products, categories, and the catalog view-model that
//!   derives the displayed list from a filter/sort configuration
//! - **Cart**: shopping cart with line items and pricing
//! - **Money**: cents-based monetary values
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_commerce::prelude::*;
//!
//! let catalog = Catalog::new(products, categories);
//!
//! let query = CatalogQuery::new()
//!     .with_category("electronics")
//!     .with_search("wireless")
//!     .with_sort(SortKey::PriceLow);
//!
//! for product in query.apply(&catalog.products) {
//!     println!("{} {}", product.name, product.display_effective_price());
//! }
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, CatalogQuery, Category, Product, SortKey};

    // Cart
    pub use crate::cart::{Cart, CartPricing, LineItem};
}
