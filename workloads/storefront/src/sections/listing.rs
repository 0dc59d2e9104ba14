//! Product listing sections: header with sort control, the filter sidebar
//! with active-filter chips, and the result grid.

use shop_commerce::catalog::{CatalogQuery, Category, Product, SortKey, PRICE_RANGE_MAX_CENTS};

use super::common::{html_escape, listing_url, render_product_card};

/// Render the listing header: title, result count, and sort control.
pub fn render_listing_header(query: &CatalogQuery, count: usize) -> String {
    let title = if query.search.is_empty() {
        "All Products".to_string()
    } else {
        format!("Results for &quot;{}&quot;", html_escape(&query.search))
    };

    let count_label = if count == 1 {
        "1 product".to_string()
    } else {
        format!("{} products", count)
    };

    let options: String = SortKey::all()
        .iter()
        .map(|key| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                key.as_str(),
                if *key == query.sort { " selected" } else { "" },
                key.display_name()
            )
        })
        .collect();

    format!(
        r#"<section class="listing-header" data-section="listing-header">
    <div class="listing-info">
        <h1>{}</h1>
        <span class="result-count">{}</span>
    </div>
    <form class="sort-control" action="/products" method="GET">
        {}
        <label for="sort">Sort by</label>
        <select id="sort" name="sort">
            {}
        </select>
        <button type="submit">Apply</button>
    </form>
</section>"#,
        title,
        count_label,
        hidden_filter_fields(query),
        options
    )
}

/// Render the filter sidebar: search, categories, price range, and the
/// active-filter chips.
pub fn render_filters(categories: &[Category], query: &CatalogQuery) -> String {
    let category_options: String = categories
        .iter()
        .map(|c| {
            let checked = if query.categories.contains(&c.id) {
                " checked"
            } else {
                ""
            };
            format!(
                r#"<label class="filter-option">
            <input type="checkbox" name="category" value="{}"{}>
            <span>{}</span>
            <span class="filter-count">{}</span>
        </label>"#,
                c.id,
                checked,
                html_escape(&c.name),
                c.product_count
            )
        })
        .collect();

    let chips = render_active_chips(categories, query);

    format!(
        r#"<aside class="filters-sidebar" data-section="filters">
    <div class="filters-header">
        <h2>Filters</h2>
        {}
    </div>
    <form action="/products" method="GET">
        <input type="hidden" name="sort" value="{}">
        <div class="filter-group">
            <h3 class="filter-title">Search</h3>
            <input type="search" name="q" value="{}" placeholder="Search products...">
        </div>
        <div class="filter-group">
            <h3 class="filter-title">Categories</h3>
            {}
        </div>
        <div class="filter-group">
            <h3 class="filter-title">Price Range</h3>
            <div class="price-inputs">
                <input type="number" name="min_price" min="0" step="1" value="{}" aria-label="Minimum price">
                <span>to</span>
                <input type="number" name="max_price" min="0" step="1" value="{}" aria-label="Maximum price">
            </div>
        </div>
        <button type="submit" class="apply-filters">Apply Filters</button>
    </form>
</aside>"#,
        chips,
        query.sort.as_str(),
        html_escape(&query.search),
        category_options,
        query.price_min.to_decimal(),
        query.price_max.to_decimal()
    )
}

/// Chips for each active filter, each linking to the listing without it.
fn render_active_chips(categories: &[Category], query: &CatalogQuery) -> String {
    if !query.has_active_filters() {
        return String::new();
    }

    let mut chips = String::from(r#"<div class="active-filters">"#);

    for id in &query.categories {
        let name = categories
            .iter()
            .find(|c| &c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| id.to_string());

        let mut without = query.clone();
        without.categories.retain(|c| c != id);
        chips.push_str(&format!(
            r#"<a class="active-filter" href="{}">{} &times;</a>"#,
            listing_url(&without),
            html_escape(&name)
        ));
    }

    if !query.search.is_empty() {
        let mut without = query.clone();
        without.search.clear();
        chips.push_str(&format!(
            r#"<a class="active-filter" href="{}">&quot;{}&quot; &times;</a>"#,
            listing_url(&without),
            html_escape(&query.search)
        ));
    }

    if !query.price_min.is_zero() || query.price_max.amount_cents < PRICE_RANGE_MAX_CENTS {
        let mut without = query.clone();
        without.price_min = shop_commerce::Money::zero(without.price_min.currency);
        without.price_max =
            shop_commerce::Money::new(PRICE_RANGE_MAX_CENTS, without.price_max.currency);
        chips.push_str(&format!(
            r#"<a class="active-filter" href="{}">{} - {} &times;</a>"#,
            listing_url(&without),
            query.price_min.display(),
            query.price_max.display()
        ));
    }

    chips.push_str(r#"<a class="clear-all" href="/products">Clear all</a>"#);
    chips.push_str("</div>");
    chips
}

/// Render the filtered, sorted product grid.
pub fn render_product_grid(products: &[Product]) -> String {
    let cards: String = products.iter().map(render_product_card).collect();

    format!(
        r#"<section class="listing-results" data-section="products">
    <div class="product-grid">
        {}
    </div>
</section>"#,
        cards
    )
}

/// Render the empty state shown when no products match the filters.
pub fn render_empty_listing() -> String {
    r#"<section class="listing-results empty" data-section="products">
    <div class="empty-state">
        <h2>No products found</h2>
        <p>Try adjusting your filters or search.</p>
        <a href="/products" class="empty-action">Clear filters</a>
    </div>
</section>"#
        .to_string()
}

/// Hidden inputs carrying the non-sort filter state through the sort form.
fn hidden_filter_fields(query: &CatalogQuery) -> String {
    let mut fields = String::new();

    for id in &query.categories {
        fields.push_str(&format!(
            r#"<input type="hidden" name="category" value="{}">"#,
            id
        ));
    }
    if !query.price_min.is_zero() {
        fields.push_str(&format!(
            r#"<input type="hidden" name="min_price" value="{}">"#,
            query.price_min.to_decimal()
        ));
    }
    if query.price_max.amount_cents < PRICE_RANGE_MAX_CENTS {
        fields.push_str(&format!(
            r#"<input type="hidden" name="max_price" value="{}">"#,
            query.price_max.to_decimal()
        ));
    }
    if !query.search.is_empty() {
        fields.push_str(&format!(
            r#"<input type="hidden" name="q" value="{}">"#,
            html_escape(&query.search)
        ));
    }

    fields
}
