//! Checkout placeholder. No payment is taken; the summary tells the
//! visitor how to complete the order.

use crate::cart::{Cart, CartLine};
use crate::error::{CartError, Result};
use serde::Serialize;

pub const CHECKOUT_NOTICE: &str =
    "Online payment is not available yet. Email crew@playaworkshop.org with this summary to reserve your gear.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutSummary {
    pub lines: Vec<CartLine>,
    pub item_count: u32,
    pub total_cents: u64,
    pub notice: &'static str,
}

pub fn checkout(cart: &Cart) -> Result<CheckoutSummary> {
    if cart.is_empty() {
        return Err(CartError::EmptyCart);
    }

    tracing::info!(
        items = cart.item_count(),
        total_cents = cart.total(),
        "Checkout requested"
    );

    Ok(CheckoutSummary {
        lines: cart.lines().to_vec(),
        item_count: cart.item_count(),
        total_cents: cart.total(),
        notice: CHECKOUT_NOTICE,
    })
}
