//! Storefront Demo
//!
//! Walks a console storefront through a few add-to-cart activations and
//! prints the cart summary at the end.
//!
//! Use `-c` to load a catalog by name from `fixtures/catalog`
//! Use `-p` to pick product ids to add (repeatable)
//! Use `--delay-ms` / `--linger-ms` to change the sequence timings

use std::{io, sync::Arc, time::Duration};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vitrine::{
    catalog::Catalog,
    console::{ConsoleCartCount, ConsoleNotificationPanel, ConsoleTrigger},
    products::ProductId,
    sequence::SequenceConfig,
    session::Storefront,
    summary,
    utils::DemoStorefrontArgs,
};

/// Storefront Demo
#[tokio::main]
#[expect(clippy::print_stdout, reason = "Example code")]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().compact().with_env_filter(filter).init();

    let args = DemoStorefrontArgs::parse();

    let catalog = Catalog::from_path(format!("fixtures/catalog/{}.yml", args.catalog))?;

    println!("Catalog loaded: {} products\n", catalog.len());

    let config = SequenceConfig {
        processing_delay: Duration::from_millis(args.delay_ms),
        notice_linger: Duration::from_millis(args.linger_ms),
        ..SequenceConfig::default()
    };

    let storefront = Storefront::builder()
        .trigger(Arc::new(ConsoleTrigger::new("Add to cart", io::stdout())))
        .count_display(Arc::new(ConsoleCartCount::new(io::stdout())))
        .notification_panel(Arc::new(ConsoleNotificationPanel::new(io::stdout())))
        .config(config)
        .build()?;

    let picks = if args.product.is_empty() {
        vec![
            "urban-sneaker".to_string(),
            "trail-runner".to_string(),
            "urban-sneaker".to_string(),
        ]
    } else {
        args.product.clone()
    };

    for pick in &picks {
        let payload = catalog.trigger_payload(&ProductId::new(pick.clone()))?;
        let mut outcome = storefront.add_to_cart(&payload).await?;

        if let Some(dismissal) = outcome.take_notice_dismissal() {
            dismissal.await?;
        }

        println!();
    }

    storefront
        .cart()
        .with(|cart| summary::write_summary(&mut io::stdout(), cart))?;

    Ok(())
}
