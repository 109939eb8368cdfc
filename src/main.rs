//! Electricity bill calculator web server.
//!
//! Reads configuration from environment variables (optionally via `.env`).

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use electricity_bill::printing::CommandPrinter;
use electricity_bill::{app, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "electricity_bill=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    let printer = CommandPrinter::from_command_line(&config.print_command)
        .context("PRINT_COMMAND is empty")?;
    info!("Printing via '{}'", printer.command_line());

    let address = config.address();
    let state = AppState::new(config, Arc::new(printer));

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Electricity bill calculator listening on {}", address);

    axum::serve(listener, app(state))
        .await
        .context("Server error")?;

    Ok(())
}
