//! Utils

use clap::Parser;

/// Arguments for the storefront demo
#[derive(Debug, Parser)]
pub struct DemoStorefrontArgs {
    /// Catalog fixture to load products from
    #[clap(short, long, default_value = "shoes")]
    pub catalog: String,

    /// Product ids to add, in order; repeat an id to add it again
    #[clap(short, long)]
    pub product: Vec<String>,

    /// Processing delay in milliseconds between activation and commit
    #[clap(long, default_value_t = 800)]
    pub delay_ms: u64,

    /// How long a notice stays visible, in milliseconds
    #[clap(long, default_value_t = 3000)]
    pub linger_ms: u64,
}
