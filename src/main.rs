mod actor_framework;
mod app_system;
mod cart;
mod catalog;
mod clients;
mod domain;
mod presentation;

#[cfg(test)]
mod mock_framework;

use std::process::ExitCode;

use clap::Parser;
use tokio::io::BufReader;
use tracing::{error, info};

use crate::app_system::{setup_tracing, AppError, Config, StorefrontSystem};
use crate::presentation::Session;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();
    setup_tracing(config.log_format);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Storefront failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> Result<(), AppError> {
    info!("Starting storefront");

    let system = StorefrontSystem::new(config.buffer_size);
    let source = config.catalog_source()?;

    let mut session = Session::new(system.cart_client.clone(), std::io::stdout());
    session.load_catalog(source.as_ref()).await?;
    session.run(BufReader::new(tokio::io::stdin())).await?;

    system.shutdown().await?;
    info!("Storefront closed");
    Ok(())
}
