use std::fmt::Display;
use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::watch;
use tracing::{debug, info, instrument};

use crate::app_system::AppError;
use crate::cart::{total_item_count, CartLinesSelector, CartState};
use crate::catalog::CatalogSource;
use crate::clients::CartClient;
use crate::domain::{CartLine, Product, ProductId};

use super::command::{Command, CommandError, HELP};
use super::render;
use super::view::{Screen, ViewState};

/// Drives the terminal UI: reads commands, dispatches into the cart store and
/// redraws the current screen from the latest cart snapshot.
pub struct Session<W: Write> {
    cart: CartClient,
    updates: watch::Receiver<CartState>,
    selector: CartLinesSelector,
    view: ViewState,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(cart: CartClient, out: W) -> Self {
        let updates = cart.subscribe();
        Self {
            cart,
            updates,
            selector: CartLinesSelector::new(),
            view: ViewState::loading(),
            out,
        }
    }

    /// Show the loading screen, fetch the catalog once, then show the list.
    #[instrument(skip(self, source), fields(source = %source.describe()))]
    pub async fn load_catalog(&mut self, source: &dyn CatalogSource) -> Result<(), AppError> {
        self.render()?;
        let seeded = self.cart.cart().await?;
        debug!(empty = seeded.is_empty(), "Cart snapshot taken");
        self.selector.select(&seeded);

        let products = source.fetch().await?;
        info!(product_count = products.len(), "Catalog ready");
        self.view.catalog_loaded(products);
        self.render()
    }

    /// Process `input` line by line until `quit` or end of input.
    ///
    /// Bad commands, including lines that are not valid UTF-8, are reported on
    /// the output and do not end the session.
    pub async fn run<R: AsyncBufRead + Unpin>(mut self, mut input: R) -> Result<W, AppError> {
        let mut raw = Vec::new();
        self.prompt()?;

        loop {
            raw.clear();
            if input.read_until(b'\n', &mut raw).await? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&raw);
            if line.trim().is_empty() {
                self.prompt()?;
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => writeln!(self.out, "{HELP}")?,
                Ok(command) => match self.apply(command).await {
                    Ok(()) => self.render()?,
                    Err(AppError::Command(error)) => self.notice(error)?,
                    Err(error) => return Err(error),
                },
                Err(error) => self.notice(error)?,
            }
            self.prompt()?;
        }

        info!("Session ended");
        Ok(self.out)
    }

    #[instrument(skip(self))]
    async fn apply(&mut self, command: Command) -> Result<(), AppError> {
        debug!("Applying command");
        match command {
            Command::List | Command::Close => self.view.close(),
            Command::Show(id) => self.view.open_product(id)?,
            Command::Add(id) => {
                let product = self
                    .view
                    .product(id)
                    .cloned()
                    .ok_or(CommandError::UnknownProduct(id))?;
                self.cart.add_item(product).await?;
                self.view.close();
            }
            Command::Increment(id) => {
                let product = self.product_for_increment(id)?;
                self.cart.add_item(product).await?;
            }
            Command::Decrement(id) => {
                self.cart.remove_item(id).await?;
            }
            Command::Cart => self.view.open_cart(),
            Command::Help | Command::Quit => {}
        }
        Ok(())
    }

    /// The line already in the cart wins over the catalog entry.
    fn product_for_increment(&self, id: ProductId) -> Result<Product, CommandError> {
        self.updates
            .borrow()
            .get(id)
            .map(|line| line.product.clone())
            .or_else(|| self.view.product(id).cloned())
            .ok_or(CommandError::UnknownProduct(id))
    }

    fn current_cart(&mut self) -> CartState {
        let changed = self.updates.has_changed().unwrap_or(false);
        let state = self.updates.borrow_and_update().clone();
        if changed {
            debug!(line_count = state.len(), "Cart changed, re-rendering");
        }
        state
    }

    fn cart_lines(&mut self) -> (Arc<[CartLine]>, u64) {
        let state = self.current_cart();
        let lines = self.selector.select(&state);
        let total = total_item_count(&lines);
        (lines, total)
    }

    fn render(&mut self) -> Result<(), AppError> {
        let frame = match self.view.screen() {
            Screen::Loading => render::loading(),
            Screen::Catalog => {
                let (_, total) = self.cart_lines();
                render::catalog(self.view.products(), total)
            }
            Screen::ProductDetail(id) => {
                let quantity = self.current_cart().quantity_of(id);
                match self.view.product(id).cloned() {
                    Some(product) => render::product_detail(&product, quantity),
                    None => {
                        let (_, total) = self.cart_lines();
                        render::catalog(self.view.products(), total)
                    }
                }
            }
            Screen::Cart => {
                let (lines, total) = self.cart_lines();
                render::cart(&lines, total)
            }
        };
        writeln!(self.out, "\n{frame}")?;
        self.out.flush()?;
        Ok(())
    }

    fn notice(&mut self, message: impl Display) -> Result<(), AppError> {
        writeln!(self.out, "! {message}")?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<(), AppError> {
        write!(self.out, "> ")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_system::StorefrontSystem;
    use crate::catalog::{decode_products, InMemoryCatalogSource, SAMPLE_CATALOG};

    fn sample_source() -> InMemoryCatalogSource {
        InMemoryCatalogSource {
            products: decode_products(SAMPLE_CATALOG.as_bytes()).unwrap(),
        }
    }

    async fn run_script(script: &str) -> (String, CartState) {
        let system = StorefrontSystem::new(8);
        let mut session = Session::new(system.cart_client.clone(), Vec::new());
        session.load_catalog(&sample_source()).await.unwrap();

        let output = session.run(script.as_bytes()).await.unwrap();
        let cart = system.cart_client.cart().await.unwrap();
        system.shutdown().await.unwrap();
        (String::from_utf8(output).unwrap(), cart)
    }

    #[tokio::test]
    async fn test_loading_then_catalog() {
        let (output, cart) = run_script("quit\n").await;
        let loading = output.find("Loading catalog...").unwrap();
        let catalog = output.find("Total Items in Cart: 0").unwrap();
        assert!(loading < catalog);
        assert!(output.contains("Fjallraven - Foldsack No. 1 Backpack  $109.95"));
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_add_from_detail_closes_it() {
        let (output, cart) = run_script("show 1\nadd 1\n").await;
        let detail = output.rfind("In cart: 0").unwrap();
        assert!(output[detail..].contains("Total Items in Cart: 1"));
        assert_eq!(cart.quantity_of(ProductId(1)), 1);
    }

    #[tokio::test]
    async fn test_increment_and_decrement_stay_on_detail() {
        let (output, cart) = run_script("show 2\n+ 2\n+ 2\n- 2\n").await;
        assert!(output.contains("In cart: 2"));
        let last = output.rfind("In cart: ").unwrap();
        assert!(output[last..].starts_with("In cart: 1"));
        assert!(!output[last..].contains("Total Items"));
        assert_eq!(cart.quantity_of(ProductId(2)), 1);
    }

    #[tokio::test]
    async fn test_errors_are_reported_and_session_continues() {
        let (output, cart) = run_script("add 99\nbuy 1\nshow\ndec 42\ninc 5\nquit\nadd 1\n").await;
        assert!(output.contains("! Unknown product: 99"));
        assert!(output.contains("! Unknown command: buy"));
        assert!(output.contains("! Command 'show' needs a product id"));
        assert_eq!(cart.quantity_of(ProductId(5)), 1);
        assert_eq!(cart.quantity_of(ProductId(1)), 0);
    }

    #[tokio::test]
    async fn test_cart_screen_lists_lines() {
        let (output, cart) = run_script("add 5\nadd 1\n+ 1\ncart\n- 5\n").await;
        assert!(output.contains("#1    Fjallraven - Foldsack No. 1 Backpack  $109.95   [- 1] 2 [+ 1]"));
        assert!(output.contains("Total Items in Cart: 3"));
        assert!(!output.contains("Your cart is empty."));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(ProductId(1)), 2);
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_is_reported_and_session_continues() {
        let system = StorefrontSystem::new(8);
        let mut session = Session::new(system.cart_client.clone(), Vec::new());
        session.load_catalog(&sample_source()).await.unwrap();

        let script: &[u8] = b"add \xff\nadd 1\nquit\n";
        let output = session.run(script).await.unwrap();
        let output = String::from_utf8_lossy(&output).into_owned();

        assert!(output.contains("! Invalid product id: \u{FFFD}"));
        let cart = system.cart_client.cart().await.unwrap();
        assert_eq!(cart.quantity_of(ProductId(1)), 1);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_detail_of_missing_product_falls_back_to_catalog_total() {
        let system = StorefrontSystem::new(8);
        let mut session = Session::new(system.cart_client.clone(), Vec::new());
        session.load_catalog(&sample_source()).await.unwrap();
        system
            .cart_client
            .add_item(Product::new(1, "Backpack", 109.95))
            .await
            .unwrap();
        system
            .cart_client
            .add_item(Product::new(1, "Backpack", 109.95))
            .await
            .unwrap();

        session.view.set_screen(Screen::ProductDetail(ProductId(404)));
        session.render().unwrap();

        let output = String::from_utf8(session.out.clone()).unwrap();
        let last = output.rfind("Total Items in Cart: ").unwrap();
        assert!(output[last..].starts_with("Total Items in Cart: 2"));

        drop(session);
        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_help_text() {
        let (output, _) = run_script("help\n").await;
        assert!(output.contains("Commands:"));
    }
}
