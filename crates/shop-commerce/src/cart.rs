//! Shopping cart with line items and pricing.

use crate::error::CommerceError;
use crate::ids::{LineItemId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 99;

/// Order value above which shipping is free, in currency units.
pub const FREE_SHIPPING_THRESHOLD: f64 = 50.0;

/// Flat shipping rate in cents.
pub const SHIPPING_FLAT_CENTS: i64 = 599;

/// A line in the cart. Carries a snapshot of the product fields the cart
/// page renders, so the cart does not need the catalog to price itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub id: LineItemId,
    pub product_id: ProductId,
    pub name: String,
    /// Base unit price at the time the item was added.
    pub price: Money,
    /// Discount percentage carried over from the product (0-100).
    pub discount_percent: Option<u8>,
    pub image: String,
    pub quantity: i64,
}

impl LineItem {
    fn new(
        product_id: ProductId,
        name: impl Into<String>,
        price: Money,
        discount_percent: Option<u8>,
        image: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            id: LineItemId::new(format!("line-{}", product_id)),
            product_id,
            name: name.into(),
            price,
            discount_percent,
            image: image.into(),
            quantity,
        }
    }

    /// Effective unit price: base price reduced by the discount percentage.
    /// Derived, unrounded; same invariant as the catalog.
    pub fn effective_unit_price(&self) -> f64 {
        let base = self.price.to_decimal();
        let discount = f64::from(self.discount_percent.unwrap_or(0).min(100));
        base - base * discount / 100.0
    }

    /// Line total: effective unit price times quantity.
    pub fn line_total(&self) -> f64 {
        self.effective_unit_price() * self.quantity as f64
    }
}

/// A shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    pub items: Vec<LineItem>,
    pub currency: Currency,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            currency: Currency::USD,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines (the header badge count).
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Add an item, merging with an existing line for the same product.
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        name: impl Into<String>,
        price: Money,
        discount_percent: Option<u8>,
        image: impl Into<String>,
        quantity: i64,
    ) -> Result<LineItemId, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }
            existing.quantity = new_quantity;
            return Ok(existing.id.clone());
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        let item = LineItem::new(product_id, name, price, discount_percent, image, quantity);
        let id = item.id.clone();
        self.items.push(item);
        Ok(id)
    }

    /// Set a line's quantity. The +/- controls never go below one; use
    /// `remove_item` to take a line out of the cart.
    pub fn update_quantity(
        &mut self,
        line_item_id: &LineItemId,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        if quantity < 1 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        let item = self
            .items
            .iter_mut()
            .find(|i| &i.id == line_item_id)
            .ok_or_else(|| CommerceError::ItemNotInCart(line_item_id.to_string()))?;
        item.quantity = quantity;
        Ok(())
    }

    /// Remove a line from the cart. Returns true if it was present.
    pub fn remove_item(&mut self, line_item_id: &LineItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| &i.id != line_item_id);
        self.items.len() < before
    }

    /// Compute the pricing breakdown.
    pub fn pricing(&self) -> CartPricing {
        let subtotal: f64 = self.items.iter().map(|i| i.line_total()).sum();
        let shipping = if self.is_empty() || subtotal > FREE_SHIPPING_THRESHOLD {
            0.0
        } else {
            Money::new(SHIPPING_FLAT_CENTS, self.currency).to_decimal()
        };

        CartPricing {
            subtotal,
            shipping,
            total: subtotal + shipping,
            currency: self.currency,
        }
    }
}

/// Pricing breakdown for the cart summary panel.
///
/// Values are derived decimals in currency units; they are rounded only
/// when formatted for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartPricing {
    pub subtotal: f64,
    pub shipping: f64,
    pub total: f64,
    pub currency: Currency,
}

impl CartPricing {
    pub fn display_subtotal(&self) -> String {
        Money::display_decimal(self.currency, self.subtotal)
    }

    pub fn display_shipping(&self) -> String {
        if self.shipping == 0.0 {
            "Free".to_string()
        } else {
            Money::display_decimal(self.currency, self.shipping)
        }
    }

    pub fn display_total(&self) -> String {
        Money::display_decimal(self.currency, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn cart_with_headphones() -> (Cart, LineItemId) {
        let mut cart = Cart::new();
        let id = cart
            .add_item(
                ProductId::new("1"),
                "Premium Wireless Headphones",
                usd(29999),
                Some(15),
                "",
                1,
            )
            .unwrap();
        (cart, id)
    }

    #[test]
    fn test_add_and_merge() {
        let (mut cart, _) = cart_with_headphones();
        cart.add_item(ProductId::new("1"), "Premium Wireless Headphones", usd(29999), Some(15), "", 2)
            .unwrap();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_line_total_uses_effective_price() {
        let (mut cart, id) = cart_with_headphones();
        cart.update_quantity(&id, 2).unwrap();
        let line = &cart.items[0];
        assert!((line.effective_unit_price() - 254.9915).abs() < 1e-9);
        assert!((line.line_total() - 509.983).abs() < 1e-9);
    }

    #[test]
    fn test_update_quantity_floor() {
        let (mut cart, id) = cart_with_headphones();
        assert!(matches!(
            cart.update_quantity(&id, 0),
            Err(CommerceError::InvalidQuantity(0))
        ));
        assert_eq!(cart.items[0].quantity, 1);
    }

    #[test]
    fn test_quantity_limit() {
        let (mut cart, id) = cart_with_headphones();
        assert!(matches!(
            cart.update_quantity(&id, 100),
            Err(CommerceError::QuantityExceedsLimit(100, MAX_QUANTITY_PER_ITEM))
        ));
    }

    #[test]
    fn test_remove_item() {
        let (mut cart, id) = cart_with_headphones();
        assert!(cart.remove_item(&id));
        assert!(!cart.remove_item(&id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_shipping_waived_over_threshold() {
        let (cart, _) = cart_with_headphones();
        let pricing = cart.pricing();
        assert_eq!(pricing.shipping, 0.0);
        assert_eq!(pricing.display_shipping(), "Free");
        assert!((pricing.total - pricing.subtotal).abs() < 1e-9);
    }

    #[test]
    fn test_flat_shipping_under_threshold() {
        let mut cart = Cart::new();
        cart.add_item(ProductId::new("3"), "Casual Cotton T-Shirt", usd(2999), Some(10), "", 1)
            .unwrap();
        let pricing = cart.pricing();
        assert!((pricing.subtotal - 26.991).abs() < 1e-9);
        assert!((pricing.shipping - 5.99).abs() < 1e-9);
        assert_eq!(pricing.display_total(), "$32.98");
    }

    #[test]
    fn test_empty_cart_pricing() {
        let pricing = Cart::new().pricing();
        assert_eq!(pricing.subtotal, 0.0);
        assert_eq!(pricing.shipping, 0.0);
        assert_eq!(pricing.total, 0.0);
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let mut cart = Cart::new();
        let err = cart.add_item(
            ProductId::new("1"),
            "Headphones",
            Money::new(1000, Currency::EUR),
            None,
            "",
            1,
        );
        assert!(matches!(err, Err(CommerceError::CurrencyMismatch { .. })));
    }
}
