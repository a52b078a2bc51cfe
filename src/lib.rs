pub mod api;
pub mod config;
pub mod core;
pub mod log;
pub mod providers;

use crate::api::{SharedExchange, app_router};
use crate::config::AppConfig;
use crate::core::CurrencyExchange;
use crate::core::amount::{format_with_commas, parse_amount};
use anyhow::{Context, Result, anyhow};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info, warn};

pub enum AppCommand {
    Serve {
        listen: Option<String>,
    },
    Convert {
        source: String,
        target: String,
        amount: String,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    let mut config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let exchange = build_exchange(&config);

    match command {
        AppCommand::Serve { listen } => {
            if let Some(addr) = listen {
                config.listen_addr = addr;
            }
            let listener = TcpListener::bind(&config.listen_addr)
                .await
                .with_context(|| format!("Failed to bind listener on {}", config.listen_addr))?;
            serve(listener, exchange, shutdown_signal()).await
        }
        AppCommand::Convert {
            source,
            target,
            amount,
        } => {
            let line = convert_once(exchange.as_ref(), &source, &target, &amount).await?;
            println!("{line}");
            Ok(())
        }
    }
}

/// Builds the conversion service from the configured rate table.
pub fn build_exchange(config: &AppConfig) -> SharedExchange {
    if config.rates.is_empty() {
        warn!("Rate table is empty, every conversion will fail");
    } else {
        let currencies: Vec<&str> = config.rates.currencies().collect();
        info!(?currencies, "Rate table loaded");
    }
    Arc::new(providers::StaticRateProvider::new(config.rates.clone()))
}

/// Serves the API on `listener` until `shutdown` completes.
pub async fn serve<F>(listener: TcpListener, exchange: SharedExchange, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr().context("Listener has no local address")?;
    info!("Starting server on {addr}");

    axum::serve(listener, app_router(exchange))
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server failed")?;

    info!("Server shutdown complete");
    Ok(())
}

/// One-off conversion with the same parsing and formatting as `GET /rate`.
pub async fn convert_once(
    exchange: &dyn CurrencyExchange,
    source: &str,
    target: &str,
    raw_amount: &str,
) -> Result<String> {
    let amount =
        parse_amount(raw_amount).ok_or_else(|| anyhow!("Invalid amount format: {raw_amount}"))?;
    let converted = exchange.convert(source, target, amount).await?;
    Ok(format!(
        "{} {source} = {} {target}",
        format_with_commas(amount),
        format_with_commas(converted)
    ))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl+C, shutdown only by process exit");
        std::future::pending::<()>().await;
    }
    info!("Received Ctrl+C, shutting down");
}
