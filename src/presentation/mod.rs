//! Line-oriented terminal front end: catalog list, product detail and cart.

pub mod command;
pub mod render;
pub mod session;
pub mod view;

pub use command::*;
pub use session::*;
