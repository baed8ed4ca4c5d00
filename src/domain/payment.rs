//! Amount computation for transactions.
//!
//! The shipping cost is added once per order item inside the subtotal and
//! once more on top of the taxed total. Existing ledgers were produced with
//! this formula, so it is kept as is.

use super::errors::TransactionError;
use super::order::OrderItem;

pub const TAX_PERCENT: i64 = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentQuote {
    pub subtotal: i64,
    pub tax: i64,
    pub total: i64,
}

/// Fails on an empty order or on any line with a non-positive quantity.
pub fn ensure_payable_items(items: &[OrderItem]) -> Result<(), TransactionError> {
    if items.is_empty() {
        return Err(TransactionError::OrderItemsEmpty);
    }
    if items.iter().any(|item| item.quantity <= 0) {
        return Err(TransactionError::InvalidQuantity);
    }
    Ok(())
}

impl PaymentQuote {
    pub fn compute(items: &[OrderItem], shipping_cost: i32) -> Self {
        let shipping = i64::from(shipping_cost);
        let subtotal: i64 = items
            .iter()
            .map(|item| i64::from(item.price) * i64::from(item.quantity) + shipping)
            .sum();
        let tax = subtotal * TAX_PERCENT / 100;
        Self {
            subtotal,
            tax,
            total: subtotal + tax + shipping,
        }
    }

    /// Returns the amount to persist when `supplied` covers the quote.
    pub fn settle(&self, supplied: i32) -> Result<i32, TransactionError> {
        if i64::from(supplied) < self.total {
            return Err(TransactionError::InsufficientBalance);
        }
        i32::try_from(self.total).map_err(|_| TransactionError::InsufficientBalance)
    }
}
