use crate::actor_framework::Reducer;
use crate::domain::{CartLine, Product, ProductId};

use super::state::CartState;

/// The two operations the cart store accepts.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Add one of `product`, inserting a new line if it is not in the cart yet.
    Increment(Product),
    /// Take one away; the line disappears when its last unit goes.
    Decrement(ProductId),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Action = CartAction;

    fn reduce(state: &CartState, action: CartAction) -> CartState {
        match action {
            CartAction::Increment(product) => increment(state, product),
            CartAction::Decrement(id) => decrement(state, id),
        }
    }

    fn changed(prev: &CartState, next: &CartState) -> bool {
        !prev.same_snapshot(next)
    }
}

/// Bump the quantity of `product.id`, or insert it with quantity 1.
///
/// An existing line keeps the product fields it was first added with; only
/// the quantity moves.
pub fn increment(state: &CartState, product: Product) -> CartState {
    state.modified(|lines| {
        lines
            .entry(product.id)
            .and_modify(|line| line.quantity = line.quantity.saturating_add(1))
            .or_insert_with(|| CartLine::new(product));
    })
}

/// Lower the quantity of `id` by one, removing the line at the last unit.
///
/// Unknown ids leave `state` untouched and return the same snapshot.
pub fn decrement(state: &CartState, id: ProductId) -> CartState {
    let Some(current) = state.get(id).map(|line| line.quantity) else {
        return state.clone();
    };

    state.modified(|lines| {
        if current > 1 {
            if let Some(line) = lines.get_mut(&id) {
                line.quantity = current - 1;
            }
        } else {
            lines.remove(&id);
        }
    })
}
