use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use reqwest::Url;

use crate::catalog::{
    CatalogError, CatalogSource, FileCatalogSource, HttpCatalogSource, DEFAULT_CATALOG_URL,
};

pub const DEFAULT_BUFFER_SIZE: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

/// Browse a product catalog and fill a shopping cart from the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "storefront", version, about, long_about = None)]
pub struct Config {
    /// Endpoint returning the product list as a JSON array
    #[arg(long, env = "STOREFRONT_CATALOG_URL", default_value = DEFAULT_CATALOG_URL)]
    pub catalog_url: Url,

    /// Read the product list from a local JSON file instead of the endpoint
    #[arg(long, env = "STOREFRONT_CATALOG_FILE")]
    pub catalog_file: Option<PathBuf>,

    /// Capacity of the cart store's request queue
    #[arg(long, default_value_t = DEFAULT_BUFFER_SIZE, value_parser = parse_buffer_size)]
    pub buffer_size: usize,

    /// Log line format
    #[arg(long, value_enum, default_value = "compact")]
    pub log_format: LogFormat,
}

impl Config {
    /// The configured catalog source; a file wins over the URL.
    pub fn catalog_source(&self) -> Result<Box<dyn CatalogSource>, CatalogError> {
        match &self.catalog_file {
            Some(path) => Ok(Box::new(FileCatalogSource::new(path.clone()))),
            None => Ok(Box::new(HttpCatalogSource::new(self.catalog_url.clone())?)),
        }
    }
}

fn parse_buffer_size(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(0) => Err("buffer size must be at least 1".to_string()),
        Ok(size) => Ok(size),
        Err(e) => Err(e.to_string()),
    }
}
