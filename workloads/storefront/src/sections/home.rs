//! Home page sections: hero, featured products, new arrivals, category
//! tiles, and the newsletter signup.

use shop_commerce::catalog::{Category, Product};

use super::common::{html_escape, render_product_card};

pub fn render_hero() -> String {
    r#"<section class="hero" data-section="hero">
    <div class="hero-inner">
        <h1>Discover Amazing Products</h1>
        <p>Shop the latest trends with unbeatable prices and free shipping on orders over $50.</p>
        <a href="/products" class="hero-cta">Shop Now</a>
    </div>
</section>"#
        .to_string()
}

pub fn render_featured(products: &[&Product]) -> String {
    if products.is_empty() {
        return String::new();
    }

    let cards: String = products.iter().map(|p| render_product_card(p)).collect();

    format!(
        r#"<section class="home-section" data-section="featured">
    <div class="section-header">
        <h2>Featured Products</h2>
        <a href="/products" class="section-link">View all</a>
    </div>
    <div class="product-grid">
        {}
    </div>
</section>"#,
        cards
    )
}

pub fn render_new_arrivals(products: &[&Product]) -> String {
    if products.is_empty() {
        return String::new();
    }

    let cards: String = products.iter().map(|p| render_product_card(p)).collect();

    format!(
        r#"<section class="home-section" data-section="new-arrivals">
    <div class="section-header">
        <h2>New Arrivals</h2>
        <a href="/products?sort=newest" class="section-link">View all</a>
    </div>
    <div class="product-grid">
        {}
    </div>
</section>"#,
        cards
    )
}

pub fn render_category_tiles(categories: &[Category]) -> String {
    if categories.is_empty() {
        return String::new();
    }

    let tiles: String = categories
        .iter()
        .map(|c| {
            format!(
                r#"<a href="/products/category/{}" class="category-tile">
        <img src="{}" alt="{}" loading="lazy">
        <div class="category-tile-info">
            <h3>{}</h3>
            <span class="category-count">{} products</span>
        </div>
    </a>"#,
                c.id,
                html_escape(&c.image),
                html_escape(&c.name),
                html_escape(&c.name),
                c.product_count
            )
        })
        .collect();

    format!(
        r#"<section class="home-section" data-section="categories">
    <div class="section-header">
        <h2>Shop by Category</h2>
    </div>
    <div class="category-grid">
        {}
    </div>
</section>"#,
        tiles
    )
}

pub fn render_newsletter() -> String {
    r#"<section class="newsletter" data-section="newsletter">
    <h2>Stay in the Loop</h2>
    <p>Subscribe for new arrivals, exclusive offers, and more.</p>
    <form class="newsletter-form" action="/newsletter" method="GET">
        <input type="email" name="email" placeholder="Enter your email" aria-label="Email address" required>
        <button type="submit">Subscribe</button>
    </form>
</section>"#
        .to_string()
}
