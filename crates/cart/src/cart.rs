//! Shopping cart.
//!
//! Prices are captured in cents when an item is added so totals never drift
//! through float arithmetic. The cart is stored as a JSON array under
//! [`CART_KEY`].

use crate::error::{CartError, Result};
use crate::storage::KeyValueStore;
use festival_core::{RecordId, ShopItem};
use serde::{Deserialize, Serialize};

pub const CART_KEY: &str = "cart";

/// One cart row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: RecordId,
    pub title: String,
    pub unit_price_cents: u64,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal_cents(&self) -> u64 {
        self.unit_price_cents.saturating_mul(u64::from(self.quantity))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `item`, merging with an existing line
    pub fn add(&mut self, item: &ShopItem, quantity: u32) -> Result<&CartLine> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }
        if !item.in_stock {
            return Err(CartError::SoldOut(item.id.to_string()));
        }

        let index = match self.position(&item.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(quantity);
                index
            }
            None => {
                self.lines.push(CartLine {
                    id: item.id.clone(),
                    title: item.title.clone(),
                    unit_price_cents: item.price_cents(),
                    quantity,
                });
                self.lines.len() - 1
            }
        };

        tracing::debug!(id = %item.id, quantity, "Added to cart");
        Ok(&self.lines[index])
    }

    /// Set a line's quantity; `0` removes the line
    pub fn set_quantity(&mut self, id: &RecordId, quantity: u32) -> Result<()> {
        let index = self
            .position(id)
            .ok_or_else(|| CartError::NotInCart(id.to_string()))?;

        if quantity == 0 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity = quantity;
        }
        Ok(())
    }

    pub fn remove(&mut self, id: &RecordId) -> Result<CartLine> {
        let index = self
            .position(id)
            .ok_or_else(|| CartError::NotInCart(id.to_string()))?;
        Ok(self.lines.remove(index))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total number of units across all lines
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }

    /// Total price in cents
    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |total, line| total.saturating_add(line.subtotal_cents()))
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Read the cart from `store`. Missing or corrupt data yields an empty cart.
    pub fn load(store: &impl KeyValueStore) -> Self {
        let raw = match store.get(CART_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Cart store unreadable, starting empty");
                return Self::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Discarding corrupt cart");
            Self::new()
        })
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<()> {
        store.set(CART_KEY, serde_json::to_string(self)?)
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.lines.iter().position(|line| &line.id == id)
    }
}
