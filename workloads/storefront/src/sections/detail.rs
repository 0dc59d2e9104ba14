//! Product detail sections.

use shop_commerce::catalog::{Catalog, Product};
use shop_commerce::ids::ProductId;

use super::common::{html_escape, render_product_card, render_stars, stock_class};

/// How many related products the detail page shows.
const RELATED_LIMIT: usize = 4;

/// Render the product detail section.
pub fn render_product_detail(product: &Product) -> String {
    let badge = if product.has_discount() {
        format!(
            r#"<span class="discount-badge">-{}%</span>"#,
            product.discount()
        )
    } else {
        String::new()
    };

    let price = if product.has_discount() {
        format!(
            r#"<span class="price-current">{}</span> <span class="price-original">{}</span>"#,
            product.display_effective_price(),
            product.price.display()
        )
    } else {
        format!(
            r#"<span class="price-current">{}</span>"#,
            product.display_effective_price()
        )
    };

    format!(
        r#"<section class="product-detail" data-section="product" data-product-id="{}">
    <nav class="breadcrumb" aria-label="Breadcrumb">
        <a href="/">Home</a> / <a href="/products">Products</a> /
        <a href="/products/category/{}">{}</a> / <span>{}</span>
    </nav>
    <div class="detail-layout">
        <div class="detail-image">
            <img src="{}" alt="{}">
            {}
        </div>
        <div class="detail-info">
            <h1>{}</h1>
            <div class="product-rating">
                {}
                <span class="rating-value">{:.1} ({} reviews)</span>
            </div>
            <div class="detail-price">{}</div>
            <div class="product-stock {}">{}</div>
            <p class="detail-description">{}</p>
            <button class="add-to-cart" data-product-id="{}" {}>
                Add to Cart
            </button>
        </div>
    </div>
</section>"#,
        product.id,
        product.category_id,
        html_escape(&product.category),
        html_escape(&product.name),
        html_escape(&product.image),
        html_escape(&product.name),
        badge,
        html_escape(&product.name),
        render_stars(product.rating),
        product.rating,
        product.reviews,
        price,
        stock_class(product),
        product.stock_message(),
        html_escape(&product.description),
        product.id,
        if product.is_in_stock() { "" } else { "disabled" }
    )
}

/// Other products from the same category, excluding the product itself.
pub fn related_products<'a>(catalog: &'a Catalog, product: &Product) -> Vec<&'a Product> {
    catalog
        .products_in_category(&product.category_id)
        .into_iter()
        .filter(|p| p.id != product.id)
        .take(RELATED_LIMIT)
        .collect()
}

/// Render the related products strip.
pub fn render_related(products: &[&Product]) -> String {
    if products.is_empty() {
        return String::new();
    }

    let cards: String = products.iter().map(|p| render_product_card(p)).collect();

    format!(
        r#"<section class="home-section" data-section="related">
    <div class="section-header">
        <h2>You May Also Like</h2>
    </div>
    <div class="product-grid">
        {}
    </div>
</section>"#,
        cards
    )
}

/// Render the not-found state for an unknown product ID.
pub fn render_product_not_found(id: &ProductId) -> String {
    format!(
        r#"<section class="not-found" data-section="not-found">
    <h1>Product not found</h1>
    <p>We couldn't find a product with ID &quot;{}&quot;.</p>
    <a href="/products" class="empty-action">Browse all products</a>
</section>"#,
        html_escape(id.as_str())
    )
}
