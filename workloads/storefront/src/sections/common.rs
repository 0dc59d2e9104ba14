//! Shared rendering helpers: escaping, star ratings, and the product card.

use shop_commerce::catalog::Product;

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn urlencoding_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            ' ' => result.push('+'),
            _ => {
                for byte in c.to_string().as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}

pub fn render_stars(rating: f64) -> String {
    let full_stars = rating.floor() as u32;
    let has_half = rating.fract() >= 0.5;
    let empty_stars = 5 - full_stars - u32::from(has_half);

    let mut html = String::from(r#"<span class="stars">"#);

    for _ in 0..full_stars {
        html.push_str(r#"<span class="star full">★</span>"#);
    }
    if has_half {
        html.push_str(r#"<span class="star half">★</span>"#);
    }
    for _ in 0..empty_stars {
        html.push_str(r#"<span class="star empty">☆</span>"#);
    }

    html.push_str("</span>");
    html
}

pub fn stock_class(product: &Product) -> &'static str {
    if product.stock == 0 {
        "out-of-stock"
    } else if product.stock <= 5 {
        "low-stock"
    } else {
        "in-stock"
    }
}

/// Render one product card for a grid.
pub fn render_product_card(product: &Product) -> String {
    let badge = if product.has_discount() {
        format!(r#"<span class="discount-badge">-{}%</span>"#, product.discount())
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
        format!(r#"<span class="price-current">{}</span>"#, product.display_effective_price())
    };

    format!(
        r#"<article class="product-card" data-product-id="{}">
    <a href="/products/{}" class="product-link">
        <div class="product-image">
            <img src="{}" alt="{}" loading="lazy">
            {}
        </div>
        <div class="product-info">
            <h3 class="product-title">{}</h3>
            <div class="product-rating">
                {}
                <span class="rating-value">{:.1} ({})</span>
            </div>
            <div class="product-price">{}</div>
            <div class="product-stock {}">{}</div>
        </div>
    </a>
    <button class="add-to-cart" data-product-id="{}" {}>
        Add to Cart
    </button>
</article>"#,
        product.id,
        product.id,
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
        product.id,
        if product.is_in_stock() { "" } else { "disabled" }
    )
}

/// Build a listing URL from query parts, skipping default values.
pub fn listing_url(query: &shop_commerce::catalog::CatalogQuery) -> String {
    use shop_commerce::catalog::{SortKey, PRICE_RANGE_MAX_CENTS};

    let mut params: Vec<String> = Vec::new();

    if !query.categories.is_empty() {
        let ids: Vec<&str> = query.categories.iter().map(|c| c.as_str()).collect();
        params.push(format!("category={}", ids.join(",")));
    }
    if !query.price_min.is_zero() {
        params.push(format!("min_price={}", query.price_min.to_decimal()));
    }
    if query.price_max.amount_cents < PRICE_RANGE_MAX_CENTS {
        params.push(format!("max_price={}", query.price_max.to_decimal()));
    }
    if !query.search.is_empty() {
        params.push(format!("q={}", urlencoding_encode(&query.search)));
    }
    if query.sort != SortKey::Featured {
        params.push(format!("sort={}", query.sort.as_str()));
    }

    if params.is_empty() {
        "/products".to_string()
    } else {
        format!("/products?{}", params.join("&"))
    }
}