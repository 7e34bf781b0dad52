use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{CartLine, ProductId};

use super::error::CartStateError;

pub type CartLines = BTreeMap<ProductId, CartLine>;

/// Immutable snapshot of the cart, keyed by product id.
///
/// Cloning is cheap and shares the underlying map. Two snapshots are the same
/// snapshot exactly when they share that map; the reducer only allocates a new
/// one when the contents change.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CartState {
    lines: Arc<CartLines>,
}

impl TryFrom<CartLines> for CartState {
    type Error = CartStateError;

    fn try_from(lines: CartLines) -> Result<Self, Self::Error> {
        for (key, line) in &lines {
            if line.id() != *key {
                return Err(CartStateError::KeyMismatch {
                    key: *key,
                    id: line.id(),
                });
            }
            if line.quantity == 0 {
                return Err(CartStateError::ZeroQuantity(*key));
            }
        }
        Ok(Self {
            lines: Arc::new(lines),
        })
    }
}

impl<'de> Deserialize<'de> for CartState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let lines = CartLines::deserialize(deserializer)?;
        Self::try_from(lines).map_err(serde::de::Error::custom)
    }
}

impl CartState {
    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.get(&id)
    }

    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.get(id).map_or(0, |line| line.quantity)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in ascending product id order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    pub fn same_snapshot(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.lines, &other.lines)
    }

    pub(crate) fn lines_arc(&self) -> &Arc<CartLines> {
        &self.lines
    }

    /// Copy the map, apply `edit` and wrap the result in a new snapshot.
    pub(crate) fn modified(&self, edit: impl FnOnce(&mut CartLines)) -> Self {
        let mut lines = CartLines::clone(&self.lines);
        edit(&mut lines);
        Self {
            lines: Arc::new(lines),
        }
    }
}
