use std::str::FromStr;

use thiserror::Error;

use crate::domain::ProductId;

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Show(ProductId),
    /// Add to cart from the detail view, then close it.
    Add(ProductId),
    Increment(ProductId),
    Decrement(ProductId),
    Cart,
    Close,
    Help,
    Quit,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command: {0}")]
    Unknown(String),
    #[error("Command '{0}' needs a product id")]
    MissingId(String),
    #[error("Invalid product id: {0}")]
    InvalidId(String),
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandError::Empty);
        };
        let verb = verb.to_ascii_lowercase();

        let id = |words: &mut std::str::SplitWhitespace<'_>| -> Result<ProductId, CommandError> {
            let raw = words
                .next()
                .ok_or_else(|| CommandError::MissingId(verb.clone()))?;
            raw.parse()
                .map_err(|_| CommandError::InvalidId(raw.to_string()))
        };

        let command = match verb.as_str() {
            "list" | "ls" => Command::List,
            "show" | "open" => Command::Show(id(&mut words)?),
            "add" => Command::Add(id(&mut words)?),
            "inc" | "+" => Command::Increment(id(&mut words)?),
            "dec" | "-" => Command::Decrement(id(&mut words)?),
            "cart" => Command::Cart,
            "close" | "back" => Command::Close,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(CommandError::Unknown(verb.clone())),
        };
        Ok(command)
    }
}

pub const HELP: &str = "\
Commands:
  list              show the catalog
  show <id>         open a product
  add <id>          add a product to the cart and close the product view
  inc <id> | + <id> add one more
  dec <id> | - <id> remove one
  cart              open the cart
  close | back      back to the catalog
  help              this text
  quit              leave";
