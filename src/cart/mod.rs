//! Cart state, the reducer that mutates it and the memoized line selector.

pub mod error;
pub mod reducer;
pub mod selector;
pub mod state;

pub use error::*;
pub use reducer::*;
pub use selector::*;
pub use state::*;
