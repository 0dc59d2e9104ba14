//! Cart page sections.
//!
//! There is no session store yet, so the cart page renders a demo cart
//! seeded from the catalog.

use shop_commerce::cart::{Cart, LineItem};
use shop_commerce::catalog::Catalog;
use shop_commerce::ids::ProductId;
use shop_commerce::Money;

use super::common::html_escape;

/// Build the demo cart from catalog products: one pair of headphones and
/// two wallets. Products missing from the catalog are skipped.
pub fn demo_cart(catalog: &Catalog) -> Cart {
    let mut cart = Cart::new();

    for (id, quantity) in [("1", 1), ("4", 2)] {
        if let Some(product) = catalog.product(&ProductId::new(id)) {
            let _ = cart.add_item(
                product.id.clone(),
                product.name.clone(),
                product.price,
                product.discount_percent,
                product.image.clone(),
                quantity,
            );
        }
    }

    cart
}

/// Render the cart page: line items and the order summary.
pub fn render_cart(cart: &Cart) -> String {
    if cart.is_empty() {
        return r#"<section class="cart empty" data-section="cart">
    <h1>Shopping Cart</h1>
    <div class="empty-state">
        <h2>Your cart is empty</h2>
        <p>Looks like you haven't added anything yet.</p>
        <a href="/products" class="empty-action">Continue Shopping</a>
    </div>
</section>"#
            .to_string();
    }

    let lines: String = cart.items.iter().map(|i| render_line_item(cart, i)).collect();
    let pricing = cart.pricing();

    let shipping_note = if pricing.shipping > 0.0 {
        r#"<p class="shipping-note">Free shipping on orders over $50.</p>"#
    } else {
        ""
    };

    format!(
        r#"<section class="cart" data-section="cart">
    <h1>Shopping Cart <span class="cart-count">({} items)</span></h1>
    <div class="cart-layout">
        <div class="cart-lines">
            {}
        </div>
        <aside class="cart-summary">
            <h2>Order Summary</h2>
            <div class="summary-row"><span>Subtotal</span><span>{}</span></div>
            <div class="summary-row"><span>Shipping</span><span>{}</span></div>
            <div class="summary-row total"><span>Total</span><span>{}</span></div>
            {}
            <button class="checkout">Proceed to Checkout</button>
            <a href="/products" class="continue-link">Continue Shopping</a>
        </aside>
    </div>
</section>"#,
        cart.total_quantity(),
        lines,
        pricing.display_subtotal(),
        pricing.display_shipping(),
        pricing.display_total(),
        shipping_note
    )
}

fn render_line_item(cart: &Cart, item: &LineItem) -> String {
    format!(
        r#"<article class="cart-line" data-line-id="{}">
    <img src="{}" alt="{}">
    <div class="line-info">
        <a href="/products/{}" class="line-name">{}</a>
        <span class="line-unit-price">{} each</span>
    </div>
    <div class="line-quantity">
        <button class="qty-btn" data-action="decrement" aria-label="Decrease quantity">-</button>
        <span class="qty-value">{}</span>
        <button class="qty-btn" data-action="increment" aria-label="Increase quantity">+</button>
    </div>
    <span class="line-total">{}</span>
    <button class="line-remove" data-action="remove" aria-label="Remove item">&times;</button>
</article>"#,
        item.id,
        html_escape(&item.image),
        html_escape(&item.name),
        item.product_id,
        html_escape(&item.name),
        Money::display_decimal(cart.currency, item.effective_unit_price()),
        item.quantity,
        Money::display_decimal(cart.currency, item.line_total())
    )
}
