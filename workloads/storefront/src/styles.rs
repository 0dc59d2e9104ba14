//! Inline stylesheet for the storefront shell.

pub const STOREFRONT_STYLES: &str = r##"
:root {
    --primary: #2563eb;
    --primary-hover: #1d4ed8;
    --bg: #f8fafc;
    --card-bg: #ffffff;
    --text: #1e293b;
    --text-muted: #64748b;
    --border: #e2e8f0;
    --success: #22c55e;
    --warning: #f59e0b;
    --error: #ef4444;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
}

.site-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem 2rem;
    background: var(--card-bg);
    border-bottom: 1px solid var(--border);
    position: sticky;
    top: 0;
    z-index: 100;
}

.logo {
    font-size: 1.5rem;
    font-weight: 700;
    color: var(--primary);
    text-decoration: none;
}

.header-nav {
    display: flex;
    gap: 1.5rem;
}

.header-nav a {
    color: var(--text);
    text-decoration: none;
}

.header-nav a:hover { color: var(--primary); }

main {
    max-width: 1400px;
    margin: 0 auto;
    padding: 2rem;
}

.site-footer {
    border-top: 1px solid var(--border);
    background: var(--card-bg);
    margin-top: 3rem;
}

.footer-inner {
    max-width: 1400px;
    margin: 0 auto;
    padding: 2rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 1rem;
    color: var(--text-muted);
}

.footer-brand { font-weight: 700; color: var(--text); }
.footer-nav { display: flex; gap: 1.5rem; }
.footer-nav a { color: var(--text-muted); text-decoration: none; }

/* Hero */
.hero {
    background: linear-gradient(135deg, var(--primary), #7c3aed);
    color: white;
    border-radius: 16px;
    padding: 4rem 2rem;
    text-align: center;
    margin-bottom: 3rem;
}

.hero h1 { font-size: 2.5rem; margin-bottom: 0.75rem; }
.hero p { font-size: 1.125rem; opacity: 0.9; margin-bottom: 1.5rem; }

.hero-cta {
    display: inline-block;
    padding: 0.875rem 2.5rem;
    background: white;
    color: var(--primary);
    border-radius: 8px;
    font-weight: 600;
    text-decoration: none;
}

/* Home sections */
.home-section { margin-bottom: 3rem; }

.section-header {
    display: flex;
    align-items: baseline;
    justify-content: space-between;
    margin-bottom: 1.25rem;
}

.section-header h2 { font-size: 1.5rem; }
.section-link { color: var(--primary); text-decoration: none; font-size: 0.9375rem; }

.category-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
    gap: 1.5rem;
}

.category-tile {
    position: relative;
    display: block;
    border-radius: 12px;
    overflow: hidden;
    background: var(--card-bg);
    text-decoration: none;
    color: inherit;
}

.category-tile img {
    width: 100%;
    aspect-ratio: 4 / 3;
    object-fit: cover;
    background: #f1f5f9;
}

.category-tile-info { padding: 1rem; }
.category-count { color: var(--text-muted); font-size: 0.875rem; }

.newsletter {
    background: var(--card-bg);
    border-radius: 16px;
    padding: 3rem 2rem;
    text-align: center;
}

.newsletter p { color: var(--text-muted); margin: 0.5rem 0 1.25rem; }

.newsletter-form {
    display: flex;
    justify-content: center;
    gap: 0;
    max-width: 420px;
    margin: 0 auto;
}

.newsletter-form input {
    flex: 1;
    padding: 0.75rem 1rem;
    border: 1px solid var(--border);
    border-radius: 8px 0 0 8px;
    font-size: 1rem;
}

.newsletter-form button {
    padding: 0.75rem 1.5rem;
    background: var(--primary);
    color: white;
    border: none;
    border-radius: 0 8px 8px 0;
    cursor: pointer;
    font-weight: 500;
}

/* Listing */
.listing-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 1.5rem;
    padding-bottom: 1rem;
    border-bottom: 1px solid var(--border);
}

.listing-info h1 { font-size: 1.5rem; margin-bottom: 0.25rem; }
.result-count { color: var(--text-muted); }

.sort-control {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.sort-control select,
.sort-control button {
    padding: 0.5rem;
    border: 1px solid var(--border);
    border-radius: 6px;
    background: var(--card-bg);
    cursor: pointer;
}

.listing-layout {
    display: grid;
    grid-template-columns: 260px 1fr;
    gap: 2rem;
}

.filters-sidebar {
    background: var(--card-bg);
    border-radius: 12px;
    padding: 1.5rem;
    height: fit-content;
    position: sticky;
    top: 100px;
}

.filters-header { margin-bottom: 1rem; }
.filters-header h2 { font-size: 1.125rem; }

.active-filters {
    display: flex;
    flex-wrap: wrap;
    gap: 0.5rem;
    margin-top: 0.75rem;
}

.active-filter {
    display: inline-flex;
    align-items: center;
    gap: 0.25rem;
    padding: 0.25rem 0.5rem;
    background: var(--primary);
    color: white;
    border-radius: 4px;
    font-size: 0.875rem;
    text-decoration: none;
}

.clear-all { color: var(--primary); font-size: 0.875rem; text-decoration: none; align-self: center; }

.filter-group {
    margin-bottom: 1.5rem;
    padding-bottom: 1rem;
    border-bottom: 1px solid var(--border);
}

.filter-group:last-of-type { border-bottom: none; }

.filter-title {
    font-size: 0.875rem;
    font-weight: 600;
    margin-bottom: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: var(--text-muted);
}

.filter-group input[type="search"],
.filter-group input[type="number"] {
    width: 100%;
    padding: 0.5rem 0.75rem;
    border: 1px solid var(--border);
    border-radius: 6px;
}

.filter-option {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.375rem 0;
    cursor: pointer;
    font-size: 0.9375rem;
}

.filter-count { margin-left: auto; color: var(--text-muted); font-size: 0.875rem; }

.price-inputs {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.apply-filters {
    width: 100%;
    padding: 0.75rem;
    background: var(--primary);
    color: white;
    border: none;
    border-radius: 8px;
    font-weight: 500;
    cursor: pointer;
}

/* Product grid */
.product-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
    gap: 1.5rem;
}

.product-card {
    background: var(--card-bg);
    border-radius: 12px;
    overflow: hidden;
    transition: box-shadow 0.2s;
}

.product-card:hover { box-shadow: 0 4px 12px rgba(0,0,0,0.1); }

.product-link {
    text-decoration: none;
    color: inherit;
    display: block;
}

.product-image {
    position: relative;
    aspect-ratio: 1;
    overflow: hidden;
    background: #f1f5f9;
}

.product-image img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.discount-badge {
    position: absolute;
    top: 0.75rem;
    left: 0.75rem;
    padding: 0.25rem 0.5rem;
    background: var(--error);
    color: white;
    border-radius: 6px;
    font-size: 0.8125rem;
    font-weight: 600;
}

.product-info { padding: 1rem; }

.product-title {
    font-size: 1rem;
    font-weight: 500;
    margin-bottom: 0.5rem;
}

.product-rating {
    display: flex;
    align-items: center;
    gap: 0.25rem;
    margin-bottom: 0.5rem;
}

.stars { color: var(--warning); }
.star.empty { color: var(--border); }
.rating-value { color: var(--text-muted); font-size: 0.875rem; }

.product-price { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.5rem; }
.price-original {
    color: var(--text-muted);
    text-decoration: line-through;
    font-size: 0.9375rem;
    font-weight: 400;
}

.product-stock { font-size: 0.875rem; }
.product-stock.in-stock { color: var(--success); }
.product-stock.low-stock { color: var(--warning); }
.product-stock.out-of-stock { color: var(--error); }

.add-to-cart {
    width: calc(100% - 2rem);
    margin: 0 1rem 1rem;
    padding: 0.75rem;
    background: var(--primary);
    color: white;
    border: none;
    border-radius: 8px;
    font-weight: 500;
    cursor: pointer;
}

.add-to-cart:hover:not(:disabled) { background: var(--primary-hover); }
.add-to-cart:disabled { background: var(--border); cursor: not-allowed; }

/* Detail */
.breadcrumb { color: var(--text-muted); font-size: 0.875rem; margin-bottom: 1.5rem; }
.breadcrumb a { color: var(--text-muted); text-decoration: none; }
.breadcrumb a:hover { color: var(--primary); }

.detail-layout {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 3rem;
}

.detail-image {
    position: relative;
    border-radius: 16px;
    overflow: hidden;
    background: #f1f5f9;
}

.detail-image img { width: 100%; display: block; }

.detail-info h1 { font-size: 2rem; margin-bottom: 0.75rem; }
.detail-price { font-size: 1.75rem; font-weight: 700; margin: 1rem 0; }
.detail-description { color: var(--text-muted); margin: 1rem 0 1.5rem; }
.detail-info .add-to-cart { width: auto; margin: 0; padding: 0.875rem 2.5rem; }

/* Category page */
.category-header { margin-bottom: 2rem; }
.category-header h1 { font-size: 1.75rem; margin-bottom: 0.25rem; }
.category-description { color: var(--text-muted); margin-bottom: 0.5rem; }

/* Cart */
.cart h1 { font-size: 1.75rem; margin-bottom: 1.5rem; }
.cart-count { color: var(--text-muted); font-size: 1.125rem; font-weight: 400; }

.cart-layout {
    display: grid;
    grid-template-columns: 1fr 320px;
    gap: 2rem;
    align-items: start;
}

.cart-line {
    display: flex;
    align-items: center;
    gap: 1rem;
    background: var(--card-bg);
    border-radius: 12px;
    padding: 1rem;
    margin-bottom: 1rem;
}

.cart-line img {
    width: 80px;
    height: 80px;
    object-fit: cover;
    border-radius: 8px;
    background: #f1f5f9;
}

.line-info { flex: 1; display: flex; flex-direction: column; gap: 0.25rem; }
.line-name { color: inherit; text-decoration: none; font-weight: 500; }
.line-unit-price { color: var(--text-muted); font-size: 0.875rem; }

.line-quantity { display: flex; align-items: center; gap: 0.5rem; }

.qty-btn {
    width: 2rem;
    height: 2rem;
    border: 1px solid var(--border);
    background: var(--card-bg);
    border-radius: 6px;
    cursor: pointer;
}

.line-total { font-weight: 600; min-width: 5rem; text-align: right; }

.line-remove {
    background: none;
    border: none;
    color: var(--text-muted);
    font-size: 1.25rem;
    cursor: pointer;
}

.cart-summary {
    background: var(--card-bg);
    border-radius: 12px;
    padding: 1.5rem;
}

.cart-summary h2 { font-size: 1.125rem; margin-bottom: 1rem; }

.summary-row {
    display: flex;
    justify-content: space-between;
    padding: 0.5rem 0;
    color: var(--text-muted);
}

.summary-row.total {
    color: var(--text);
    font-weight: 700;
    font-size: 1.125rem;
    border-top: 1px solid var(--border);
    margin-top: 0.5rem;
    padding-top: 1rem;
}

.shipping-note { color: var(--text-muted); font-size: 0.875rem; margin: 0.5rem 0; }

.checkout {
    width: 100%;
    padding: 0.875rem;
    margin-top: 1rem;
    background: var(--primary);
    color: white;
    border: none;
    border-radius: 8px;
    font-weight: 600;
    cursor: pointer;
}

.continue-link {
    display: block;
    text-align: center;
    margin-top: 0.75rem;
    color: var(--primary);
    font-size: 0.9375rem;
    text-decoration: none;
}

/* Account */
.account h1 { font-size: 1.75rem; margin-bottom: 1.5rem; }

.account-tabs {
    display: flex;
    gap: 1rem;
    border-bottom: 1px solid var(--border);
    margin-bottom: 1.5rem;
}

.account-tabs .tab {
    padding: 0.75rem 0;
    color: var(--text-muted);
    text-decoration: none;
}

.account-tabs .tab.active {
    color: var(--primary);
    border-bottom: 2px solid var(--primary);
}

.account-panel {
    background: var(--card-bg);
    border-radius: 12px;
    padding: 1.5rem;
    margin-bottom: 1.5rem;
}

.account-panel h2 { font-size: 1.125rem; margin-bottom: 1rem; }

.profile-fields dt { color: var(--text-muted); font-size: 0.875rem; margin-top: 0.75rem; }
.profile-fields dd { margin: 0.125rem 0 0; }

.empty-note { color: var(--text-muted); }

/* Empty and not-found states */
.empty-state, .not-found {
    text-align: center;
    padding: 4rem 2rem;
}

.empty-state h2, .not-found h1 { margin-bottom: 0.5rem; }
.empty-state p, .not-found p { color: var(--text-muted); margin-bottom: 1.5rem; }

.empty-action {
    display: inline-block;
    padding: 0.75rem 2rem;
    background: var(--primary);
    color: white;
    border-radius: 8px;
    text-decoration: none;
    font-weight: 500;
}

/* Responsive */
@media (max-width: 1024px) {
    .listing-layout { grid-template-columns: 1fr; }
    .filters-sidebar { position: static; }
    .detail-layout { grid-template-columns: 1fr; }
    .cart-layout { grid-template-columns: 1fr; }
}

@media (max-width: 640px) {
    .site-header { flex-wrap: wrap; gap: 1rem; padding: 1rem; }
    .listing-header { flex-direction: column; align-items: flex-start; gap: 1rem; }
    .product-grid { grid-template-columns: repeat(2, 1fr); gap: 1rem; }
    .cart-line { flex-wrap: wrap; }
    .footer-inner { flex-direction: column; }
}
"##;
