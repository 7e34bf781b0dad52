pub mod cart_line;
pub mod product;

pub use cart_line::*;
pub use product::*;
