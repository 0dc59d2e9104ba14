//! Category reference data.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
///
/// Flat, immutable reference data. `product_count` is denormalized from the
/// backend and used only for display next to the filter checkboxes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// Category description.
    pub description: String,
    /// Image URL.
    pub image: String,
    /// Denormalized number of products in this category.
    pub product_count: u32,
}

impl Category {
    /// Create a new category.
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        product_count: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            image: image.into(),
            product_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_creation() {
        let cat = Category::new("clothing", "Clothing", "Stylish clothing.", "", 42);
        assert_eq!(cat.id.as_str(), "clothing");
        assert_eq!(cat.product_count, 42);
    }
}
