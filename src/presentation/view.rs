use crate::domain::{Product, ProductId};

use super::command::CommandError;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Catalog,
    ProductDetail(ProductId),
    Cart,
}

/// Local view state. The product list is written once, when the catalog resolves.
#[derive(Debug)]
pub struct ViewState {
    products: Vec<Product>,
    screen: Screen,
}

impl ViewState {
    pub fn loading() -> Self {
        Self {
            products: Vec::new(),
            screen: Screen::Loading,
        }
    }

    pub fn catalog_loaded(&mut self, products: Vec<Product>) {
        self.products = products;
        self.screen = Screen::Catalog;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn open_product(&mut self, id: ProductId) -> Result<(), CommandError> {
        if self.product(id).is_none() {
            return Err(CommandError::UnknownProduct(id));
        }
        self.screen = Screen::ProductDetail(id);
        Ok(())
    }

    pub fn open_cart(&mut self) {
        self.screen = Screen::Cart;
    }

    #[cfg(test)]
    pub(crate) fn set_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    /// Close whatever is open and go back to the list.
    pub fn close(&mut self) {
        self.screen = Screen::Catalog;
    }
}
