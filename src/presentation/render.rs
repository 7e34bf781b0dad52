//! Plain-text frames for each screen. Pure functions so they can be asserted on.

use std::fmt::Write;

use crate::domain::{CartLine, Product};

pub fn header(total_items: u64) -> String {
    format!("Total Items in Cart: {total_items}")
}

pub fn loading() -> String {
    "Loading catalog...".to_string()
}

pub fn catalog(products: &[Product], total_items: u64) -> String {
    let mut frame = header(total_items);
    frame.push('\n');
    if products.is_empty() {
        frame.push_str("\nNo products available.\n");
        return frame;
    }
    for product in products {
        let _ = write!(frame, "\n#{:<4} {}  ${}", product.id, product.title, product.price);
    }
    frame.push('\n');
    frame
}

pub fn product_detail(product: &Product, quantity_in_cart: u32) -> String {
    let mut frame = String::new();
    let _ = writeln!(frame, "{}", product.title);
    let _ = writeln!(frame, "{}", "=".repeat(product.title.chars().count()));
    if !product.description.is_empty() {
        let _ = writeln!(frame, "{}", product.description);
    }
    if !product.category.is_empty() {
        let _ = writeln!(frame, "Category: {}", product.category);
    }
    let _ = writeln!(frame, "Price: ${}", product.price);
    if let Some(rating) = &product.rating {
        let _ = writeln!(frame, "Rating: {} ({} reviews)", rating.rate, rating.count);
    }
    if !product.image.is_empty() {
        let _ = writeln!(frame, "Image: {}", product.image);
    }
    let _ = writeln!(frame, "In cart: {quantity_in_cart}");
    let _ = write!(
        frame,
        "[add {id}] add to cart   [- {id}] [+ {id}]   [close]",
        id = product.id
    );
    frame
}

pub fn cart(lines: &[CartLine], total_items: u64) -> String {
    let mut frame = String::from("Cart\n----\n");
    if lines.is_empty() {
        frame.push_str("Your cart is empty.\n");
    }
    for line in lines {
        let _ = writeln!(
            frame,
            "#{:<4} {}  ${}   [- {id}] {} [+ {id}]",
            line.id(),
            line.product.title,
            line.product.price,
            line.quantity,
            id = line.id()
        );
    }
    let _ = write!(frame, "\n{}", header(total_items));
    frame
}
