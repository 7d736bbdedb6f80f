//! Cart error types

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CartError>;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("Cart is empty")]
    EmptyCart,

    #[error("Quantity must be at least 1")]
    ZeroQuantity,

    #[error("Item {0} is not in the cart")]
    NotInCart(String),

    #[error("Item {0} is sold out")]
    SoldOut(String),

    #[error("Failed to access store at {path}: {source}")]
    Store {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No data directory available for the cart store")]
    NoDataDir,

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CartError {
    pub(crate) fn store(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Store {
            path: path.into(),
            source,
        }
    }
}
