//! Cart and line item types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::Serialize;

/// Maximum quantity allowed per line item. Additions saturate here.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// A shopping cart.
///
/// Holds at most one line item per product, in the order products were
/// first added. The cart lives for the session only; there is no
/// persistence, so it serializes for display but is only ever built
/// through its methods.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct Cart {
    items: Vec<LineItem>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart priced in dong.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart priced in the given currency.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add `quantity` of a product to the cart.
    ///
    /// - product already in the cart: quantity grows by `quantity`;
    ///   a `quantity` of zero or less is ignored
    /// - new product: inserted with `quantity`, at least 1
    ///
    /// Line quantities saturate at [`MAX_QUANTITY_PER_ITEM`]. Returns the
    /// line's quantity after the call.
    pub fn add(&mut self, product: &Product, quantity: i64) -> i64 {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            if quantity > 0 {
                existing.quantity = existing
                    .quantity
                    .saturating_add(quantity)
                    .min(MAX_QUANTITY_PER_ITEM);
            }
            tracing::debug!(id = %product.id, quantity = existing.quantity, "cart line updated");
            return existing.quantity;
        }

        let quantity = quantity.clamp(1, MAX_QUANTITY_PER_ITEM);
        self.items.push(LineItem {
            product: product.clone(),
            quantity,
        });
        tracing::debug!(id = %product.id, quantity, "cart line added");
        quantity
    }

    /// Add a single unit of a product.
    pub fn add_one(&mut self, product: &Product) -> i64 {
        self.add(product, 1)
    }

    /// Remove a product's line item. Returns `false` if it was not in the cart.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product.id != product_id);
        self.items.len() < len_before
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total item count (sum of quantities).
    pub fn count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of price times quantity over all line items.
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.items.iter().try_fold(Money::zero(self.currency), |acc, item| {
            if item.product.price.currency != self.currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: self.currency.code().to_string(),
                    got: item.product.price.currency.code().to_string(),
                });
            }
            let line = item.total()?;
            acc.try_add(&line).ok_or(CommerceError::Overflow)
        })
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get the line item for a product.
    pub fn get(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product.id == product_id)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineItem {
    /// Product being purchased.
    pub product: Product,
    /// Quantity, at least 1.
    pub quantity: i64,
}

impl LineItem {
    /// Unit price times quantity.
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.product
            .price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}
