use serde::{Deserialize, Serialize};

use super::product::{Product, ProductId};

/// A product in the cart together with how many of it were selected.
///
/// `quantity` is at least 1 for every line held by a cart; a line that would
/// drop to zero is removed instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// First line for `product`, quantity 1.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }
}
