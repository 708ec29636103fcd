//! # Till CLI
//!
//! Adds batches of products to a customer's cached cart.
//!
//! ## Usage
//! ```text
//! till --customer 12345 --item DoveSoap:5:39.99
//! till --customer 12345 --batch monday.json --batch tuesday.json
//! TILL_CACHE_BACKEND=redis REDIS_URL=redis://localhost:6379 till -c 12345 -i AxeDeos:2:99.99
//! ```
//!
//! Each `--batch` file is one `add_products` call, in order; all `--item`
//! values together form one more call. The cart after every call is printed
//! to stdout as JSON. Logs go to stderr (`RUST_LOG=debug` for detail).

mod backend;
mod batch;
mod config;

use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use till_cart::CartAggregator;
use till_core::{Cart, CoreError, LineItem, Money};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::backend::CacheBackend;
use crate::config::TillConfig;

/// Add product batches to a customer's cached cart.
#[derive(Debug, Parser)]
#[command(name = "till", version, about)]
struct Cli {
    /// Customer whose cart is updated
    #[arg(short, long, env = "TILL_CUSTOMER_ID")]
    customer: String,

    /// JSON batch file; repeat for several calls
    #[arg(short, long = "batch", value_name = "FILE")]
    batches: Vec<PathBuf>,

    /// Line item as CODE:QTY:PRICE; repeat for several items
    #[arg(short, long = "item", value_name = "CODE:QTY:PRICE")]
    items: Vec<LineItem>,
}

/// Cart plus its derived totals, as printed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CartResponse<'a> {
    #[serde(flatten)]
    cart: &'a Cart,
    subtotal: Money,
    total: Money,
}

impl<'a> TryFrom<&'a Cart> for CartResponse<'a> {
    type Error = CoreError;

    fn try_from(cart: &'a Cart) -> Result<Self, Self::Error> {
        Ok(CartResponse {
            cart,
            subtotal: cart.subtotal()?,
            total: cart.total()?,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = TillConfig::load()?;
    info!(
        backend = %config.cache,
        key_prefix = %config.key_prefix,
        ttl_secs = config.cart_ttl_secs,
        tax_bps = config.sales_tax_bps,
        "Configuration loaded"
    );

    let cache = CacheBackend::connect(&config.cache).await?;
    let aggregator = CartAggregator::new(cache).with_settings(config.cart_settings());

    let mut batches = cli
        .batches
        .iter()
        .map(|path| batch::load(path))
        .collect::<anyhow::Result<Vec<_>>>()?;

    if !cli.items.is_empty() || batches.is_empty() {
        batches.push(cli.items);
    }

    for items in &batches {
        let cart = aggregator.add_products(items, &cli.customer).await?;
        let response = CartResponse::try_from(&cart)?;
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_items() {
        let cli = Cli::try_parse_from([
            "till",
            "--customer",
            "12345",
            "-i",
            "DoveSoap:2:39.99",
            "-i",
            "AxeDeos:2:99.99",
        ])
        .unwrap();

        assert_eq!(cli.customer, "12345");
        assert_eq!(cli.items.len(), 2);
        assert!(cli.batches.is_empty());
    }

    #[test]
    fn test_rejects_malformed_item() {
        let result = Cli::try_parse_from(["till", "-c", "12345", "-i", "DoveSoap:two:39.99"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_response_includes_totals() {
        let mut cart = Cart::new("12345");
        cart.lines = till_core::consolidate(&[
            LineItem::new("DoveSoap", 2, Money::from_cents(3999)),
            LineItem::new("AxeDeos", 2, Money::from_cents(9999)),
        ])
        .unwrap();
        cart.tax_amount = Money::from_cents(3500);

        let json = serde_json::to_value(CartResponse::try_from(&cart).unwrap()).unwrap();
        assert_eq!(json["customerId"], "12345");
        assert_eq!(json["subtotal"], "279.96");
        assert_eq!(json["total"], "314.96");
        assert_eq!(json["lines"].as_array().map(Vec::len), Some(2));
    }
}
