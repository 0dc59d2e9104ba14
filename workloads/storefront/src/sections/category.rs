//! Category page sections.

use shop_commerce::catalog::{Category, Product};
use shop_commerce::ids::CategoryId;

use super::common::{html_escape, render_product_card};

/// Render the category header: name, description, and product count.
pub fn render_category_header(category: &Category, count: usize) -> String {
    let count_label = if count == 1 {
        "1 product".to_string()
    } else {
        format!("{} products", count)
    };

    format!(
        r#"<section class="category-header" data-section="category-header">
    <nav class="breadcrumb" aria-label="Breadcrumb">
        <a href="/">Home</a> / <a href="/products">Products</a> / <span>{}</span>
    </nav>
    <h1>{}</h1>
    <p class="category-description">{}</p>
    <span class="result-count">{}</span>
</section>"#,
        html_escape(&category.name),
        html_escape(&category.name),
        html_escape(&category.description),
        count_label
    )
}

/// Render the category's product grid, or its empty state.
pub fn render_category_grid(products: &[&Product]) -> String {
    if products.is_empty() {
        return r#"<section class="listing-results empty" data-section="products">
    <div class="empty-state">
        <h2>Nothing here yet</h2>
        <p>This category has no products right now.</p>
        <a href="/products" class="empty-action">Browse all products</a>
    </div>
</section>"#
            .to_string();
    }

    let cards: String = products.iter().map(|p| render_product_card(p)).collect();

    format!(
        r#"<section class="listing-results" data-section="products">
    <div class="product-grid">
        {}
    </div>
</section>"#,
        cards
    )
}

/// Render the not-found state for an unknown category ID.
pub fn render_category_not_found(id: &CategoryId) -> String {
    format!(
        r#"<section class="not-found" data-section="not-found">
    <h1>Category not found</h1>
    <p>We couldn't find a category with ID &quot;{}&quot;.</p>
    <a href="/products" class="empty-action">Browse all products</a>
</section>"#,
        html_escape(id.as_str())
    )
}
