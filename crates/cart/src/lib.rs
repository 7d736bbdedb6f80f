//! Client-side state for the festival catalog: the shopping cart, the theme
//! preference and a checkout stub, all persisted through a [`KeyValueStore`].
//!
//! ```rust
//! use festival_cart::{checkout, Cart, MemoryStore};
//! use festival_core::{RecordId, ShopItem};
//!
//! let item = ShopItem {
//!     id: RecordId::Number(1),
//!     title: "Dust Goggles".into(),
//!     description: String::new(),
//!     price: 18.0,
//!     category: None,
//!     image: None,
//!     in_stock: true,
//! };
//!
//! let mut store = MemoryStore::new();
//! let mut cart = Cart::load(&store);
//! cart.add(&item, 2).unwrap();
//! cart.save(&mut store).unwrap();
//!
//! assert_eq!(checkout(&cart).unwrap().total_cents, 3600);
//! ```

mod cart;
mod checkout;
mod error;
mod preferences;
mod storage;

pub use cart::{Cart, CartLine, CART_KEY};
pub use checkout::{checkout, CheckoutSummary, CHECKOUT_NOTICE};
pub use error::{CartError, Result};
pub use preferences::{ThemePreference, THEME_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
