use std::sync::Arc;

use tracing::debug;

use crate::domain::CartLine;

use super::state::{CartLines, CartState};

/// Memoized projection of a [`CartState`] into an ordered slice of lines.
///
/// The cache key is the identity of the state's map, so a snapshot that was
/// not touched by the reducer hands back the exact same `Arc`.
#[derive(Debug, Default)]
pub struct CartLinesSelector {
    cached: Option<(Arc<CartLines>, Arc<[CartLine]>)>,
    recomputations: usize,
}

impl CartLinesSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, state: &CartState) -> Arc<[CartLine]> {
        if let Some((key, lines)) = &self.cached {
            if Arc::ptr_eq(key, state.lines_arc()) {
                return Arc::clone(lines);
            }
        }

        let lines: Arc<[CartLine]> = state.lines().cloned().collect();
        self.recomputations += 1;
        debug!(
            line_count = lines.len(),
            recomputations = self.recomputations,
            "Recomputed cart lines"
        );
        self.cached = Some((Arc::clone(state.lines_arc()), Arc::clone(&lines)));
        lines
    }

    #[cfg(test)]
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}

/// Sum of quantities over `lines`; 0 when empty.
pub fn total_item_count(lines: &[CartLine]) -> u64 {
    lines.iter().map(|line| u64::from(line.quantity)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::reducer::{decrement, increment};
    use crate::domain::{Product, ProductId};

    #[test]
    fn test_unchanged_state_returns_cached_lines() {
        let mut selector = CartLinesSelector::new();
        let state = increment(&CartState::default(), Product::new(1, "Mug", 7.5));

        let first = selector.select(&state);
        let second = selector.select(&state.clone());
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(selector.recomputations(), 1);

        let noop = decrement(&state, ProductId(99));
        let third = selector.select(&noop);
        assert!(Arc::ptr_eq(&first, &third));
        assert_eq!(selector.recomputations(), 1);
    }

    #[test]
    fn test_mutation_invalidates_cache() {
        let mut selector = CartLinesSelector::new();
        let state = increment(&CartState::default(), Product::new(1, "Mug", 7.5));
        let before = selector.select(&state);

        let state = increment(&state, Product::new(1, "Mug", 7.5));
        let after = selector.select(&state);

        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(after[0].quantity, 2);
        assert_eq!(selector.recomputations(), 2);
    }

    #[test]
    fn test_lines_are_ordered_by_id() {
        let mut selector = CartLinesSelector::new();
        let state = increment(&CartState::default(), Product::new(20, "Hat", 12.0));
        let state = increment(&state, Product::new(3, "Mug", 7.5));
        let state = increment(&state, Product::new(11, "Scarf", 15.0));

        let ids: Vec<u64> = selector.select(&state).iter().map(|l| l.id().0).collect();
        assert_eq!(ids, vec![3, 11, 20]);
    }

    #[test]
    fn test_total_item_count() {
        assert_eq!(total_item_count(&[]), 0);

        let mut mug = CartLine::new(Product::new(1, "Mug", 7.5));
        mug.quantity = 3;
        let hat = CartLine::new(Product::new(2, "Hat", 12.0));
        assert_eq!(total_item_count(&[mug, hat]), 4);

        let mut empty_line = CartLine::new(Product::new(3, "Pin", 1.0));
        empty_line.quantity = 0;
        assert_eq!(total_item_count(&[empty_line]), 0);
    }
}
